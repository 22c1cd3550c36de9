//! Track alignment, interpolation and distance algorithms

pub mod alignment;
pub mod interpolation;
pub mod projection;
pub mod bearing;

pub use alignment::{Aligner, Alignment, AlignStrategy};
pub use interpolation::{interpolate, remap};
pub use projection::{project, project_point};
pub use bearing::{compute, BearingMode, Displacement};
