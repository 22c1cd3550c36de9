//! Pre-flight checks on the command-line file paths

use super::error::{ConfigError, FileRole};
use std::fs::File;
use std::io;
use std::path::Path;

const JSON_EXTENSION: &str = ".json";

/// The name must be longer than the bare extension and end with `.json`
pub fn check_json_name(path: &Path, role: FileRole) -> Result<(), ConfigError> {
    let name = path.to_string_lossy();
    if name.len() <= JSON_EXTENSION.len() {
        return Err(ConfigError::NameTooShort { role, path: path.to_path_buf() });
    }
    if !name.ends_with(JSON_EXTENSION) {
        return Err(ConfigError::WrongExtension { role, path: path.to_path_buf() });
    }
    Ok(())
}

pub fn check_readable(path: &Path, role: FileRole) -> Result<(), ConfigError> {
    File::open(path)
        .map(drop)
        .map_err(|source| ConfigError::Unopenable { role, path: path.to_path_buf(), source })
}

/// The output is only created once the report is complete, so this checks
/// that it could be: the parent directory exists and the path is not a directory.
pub fn check_writable_location(path: &Path) -> Result<(), ConfigError> {
    let unopenable = |source: io::Error| ConfigError::Unopenable {
        role: FileRole::Output,
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(unopenable(io::Error::new(io::ErrorKind::Other, "path is a directory")));
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(unopenable(
            io::Error::new(io::ErrorKind::NotFound, "parent directory does not exist"),
        )),
        _ => Ok(()),
    }
}

/// Validate all three paths in command-line order, stopping at the first failure
pub fn validate_paths(input: &Path, reference: &Path, output: &Path) -> Result<(), ConfigError> {
    for (path, role) in [(input, FileRole::Input), (reference, FileRole::Reference)] {
        check_json_name(path, role)?;
        check_readable(path, role)?;
        log::info!("SUCCESS: file {} opened", path.display());
    }
    check_json_name(output, FileRole::Output)?;
    check_writable_location(output)?;
    log::info!("SUCCESS: output {} is writable", output.display());
    Ok(())
}
