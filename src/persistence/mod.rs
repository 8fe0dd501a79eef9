//! Small-file persistence in the user data directory
//!
//! Everything here returns `Result`; callers at the edge (high score,
//! settings) turn failures into defaults and carry on.

use std::fs;
use std::path::{Path, PathBuf};

/// Folder name under the platform data directory
pub const APP_DIR_NAME: &str = "dodge_master";
/// Fallback folder under the home directory
pub const HOME_DIR_NAME: &str = ".dodge_master";

/// Persistence errors
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents could not be parsed
    #[error("Parse error in {path}: {reason}")]
    Parse { path: String, reason: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither a data directory nor a home directory is known
    #[error("No user data directory available")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Resolve the user-writable directory for game files
///
/// Prefers the platform data dir, falls back to `~/.dodge_master`.
pub fn user_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .or_else(|| dirs::home_dir().map(|h| h.join(HOME_DIR_NAME)))
        .ok_or(PersistenceError::NoDataDir)
}

/// Read a whole file as text
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write text, creating parent directories as needed
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("file.txt");
        write_text(&path, "hello").unwrap();
        assert_eq!(read_text(&path).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
