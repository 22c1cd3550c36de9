//! Error taxonomy and process exit codes

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes, one per failure category
pub mod exit_code {
    pub const USAGE: i32 = 1;
    pub const INPUT_EXTENSION: i32 = 2;
    pub const INPUT_NAME_TOO_SHORT: i32 = 22;
    pub const INPUT_UNOPENABLE: i32 = 222;
    pub const OUTPUT_EXTENSION: i32 = 3;
    pub const OUTPUT_NAME_TOO_SHORT: i32 = 33;
    pub const OUTPUT_UNOPENABLE: i32 = 333;
    pub const MALFORMED_TRACK: i32 = 4;
    pub const OPTIONS_FILE: i32 = 5;
}

/// Which of the three command-line files a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Reference,
    Output,
}

impl FileRole {
    pub fn is_output(self) -> bool {
        self == FileRole::Output
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Input => write!(f, "Input"),
            FileRole::Reference => write!(f, "Reference"),
            FileRole::Output => write!(f, "Output"),
        }
    }
}

/// Fatal configuration problems detected before any processing
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Usage(String),

    #[error("{} is not a valid .json file", .path.display())]
    WrongExtension { role: FileRole, path: PathBuf },

    #[error("{} is too short to be a valid .json file name", .path.display())]
    NameTooShort { role: FileRole, path: PathBuf },

    #[error("{role} file {} could not be opened: {source}", .path.display())]
    Unopenable {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("options file {}: {reason}", .path.display())]
    OptionsFile { path: PathBuf, reason: String },
}

/// Problems turning a JSON document into a track
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an array or an object of samples, found {found}")]
    UnsupportedDocument { found: &'static str },

    #[error("sample {sample}: field `{field}` is not a number")]
    InvalidField { sample: String, field: &'static str },
}

/// Top-level error for a processing run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{role} track {}: {source}", .path.display())]
    Load {
        role: FileRole,
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Usage(_) => exit_code::USAGE,
            ConfigError::WrongExtension { role, .. } if role.is_output() => exit_code::OUTPUT_EXTENSION,
            ConfigError::WrongExtension { .. } => exit_code::INPUT_EXTENSION,
            ConfigError::NameTooShort { role, .. } if role.is_output() => exit_code::OUTPUT_NAME_TOO_SHORT,
            ConfigError::NameTooShort { .. } => exit_code::INPUT_NAME_TOO_SHORT,
            ConfigError::Unopenable { role, .. } if role.is_output() => exit_code::OUTPUT_UNOPENABLE,
            ConfigError::Unopenable { .. } => exit_code::INPUT_UNOPENABLE,
            ConfigError::OptionsFile { .. } => exit_code::OPTIONS_FILE,
        }
    }
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(e) => e.exit_code(),
            Error::Load { source: LoadError::Io(_), .. } => exit_code::INPUT_UNOPENABLE,
            Error::Load { .. } => exit_code::MALFORMED_TRACK,
            Error::Serialize(_) | Error::Write { .. } => exit_code::OUTPUT_UNOPENABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_role() {
        let path = PathBuf::from("x.txt");
        let input = ConfigError::WrongExtension { role: FileRole::Input, path: path.clone() };
        let reference = ConfigError::WrongExtension { role: FileRole::Reference, path: path.clone() };
        let output = ConfigError::WrongExtension { role: FileRole::Output, path: path.clone() };
        assert_eq!(input.exit_code(), 2);
        assert_eq!(reference.exit_code(), 2);
        assert_eq!(output.exit_code(), 3);

        let short = ConfigError::NameTooShort { role: FileRole::Output, path };
        assert_eq!(short.exit_code(), 33);
    }

    #[test]
    fn test_load_error_codes() {
        let malformed = Error::Load {
            role: FileRole::Input,
            path: PathBuf::from("a.json"),
            source: LoadError::UnsupportedDocument { found: "number" },
        };
        assert_eq!(malformed.exit_code(), exit_code::MALFORMED_TRACK);

        let unreadable = Error::Load {
            role: FileRole::Reference,
            path: PathBuf::from("b.json"),
            source: LoadError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
        };
        assert_eq!(unreadable.exit_code(), exit_code::INPUT_UNOPENABLE);
    }

    #[test]
    fn test_error_messages() {
        let e = ConfigError::WrongExtension { role: FileRole::Input, path: PathBuf::from("track.csv") };
        assert_eq!(e.to_string(), "track.csv is not a valid .json file");

        let e = Error::Load {
            role: FileRole::Reference,
            path: PathBuf::from("ref.json"),
            source: LoadError::InvalidField { sample: "3".into(), field: "lat" },
        };
        assert_eq!(e.to_string(), "Reference track ref.json: sample 3: field `lat` is not a number");
    }
}
