//! Utility functions for error handling
//!
//! Helpers that turn raw IO failures into errors carrying the path involved.

use std::fs;
use std::path::Path;

use crate::error::{FamilleError, Result};

/// Read a whole file to a string, attaching the path on failure
///
/// # Arguments
/// * `path` - The path to the file to read
///
/// # Returns
/// * `Result<String>` - The file contents or an error naming the path
pub fn read_to_string(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(FamilleError::with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "Path is not a file"),
            path,
        ));
    }

    fs::read_to_string(path).map_err(|e| FamilleError::with_path(e, path))
}

/// Async counterpart of [`read_to_string`]
pub async fn read_to_string_async(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FamilleError::with_path(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_carries_path() {
        let path = Path::new("/definitely/not/here/roster.json");
        let err = read_to_string(path).unwrap_err();

        match err {
            FamilleError::PathError { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
