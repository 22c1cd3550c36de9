//! Core types and constants for track comparison

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
