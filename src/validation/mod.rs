//! Input validation and error reporting

pub mod error;
pub mod paths;

pub use error::{exit_code, ConfigError, Error, FileRole, LoadError, Result};
pub use paths::validate_paths;
