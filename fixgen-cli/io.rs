//! Filesystem preparation for the generator CLIs.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Makes sure `dir` exists, creating it and any missing parents.
///
/// Calling this on an existing directory is not an error.
///
/// # Returns
///
/// `true` if the directory was created by this call, `false` if it already
/// existed.
///
/// # Errors
///
/// - [`Error::NotADirectory`] if `dir` exists but is not a directory
/// - [`Error::CreateDirectory`] if the directory cannot be created
pub fn ensure_output_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    if dir.exists() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    fs::create_dir_all(dir).map_err(|source| Error::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(true)
}
