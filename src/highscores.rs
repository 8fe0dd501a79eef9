//! Best score storage
//!
//! A single integer in `highscore.txt` inside the user data directory. Loading
//! never fails (missing or garbled files read as 0) and saving is best-effort.

use std::path::{Path, PathBuf};

use crate::persistence::{self, PersistenceError};

/// File name inside the user data directory
pub const HIGHSCORE_FILE: &str = "highscore.txt";

/// Best score backed by a text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    path: Option<PathBuf>,
}

impl HighScoreFile {
    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store in the user data directory
    ///
    /// Without a usable directory the store still works, it just never
    /// remembers anything.
    pub fn in_user_dir() -> Self {
        match persistence::user_data_dir() {
            Ok(dir) => Self::at(dir.join(HIGHSCORE_FILE)),
            Err(e) => {
                log::warn!("High score will not be saved: {}", e);
                Self { path: None }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored best score, 0 on any failure
    pub fn load(&self) -> u32 {
        let Some(path) = &self.path else {
            return 0;
        };
        match read_score(path) {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score: {}", e);
                0
            }
        }
    }

    /// Save the best score; failures are logged and dropped
    pub fn save(&self, score: u32) {
        let Some(path) = &self.path else {
            return;
        };
        match persistence::write_text(path, &score.to_string()) {
            Ok(()) => log::info!("High score saved ({})", score),
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }
    }
}

fn read_score(path: &Path) -> persistence::Result<u32> {
    let text = persistence::read_text(path)?;
    text.trim()
        .parse::<u32>()
        .map_err(|e| PersistenceError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreFile::at(dir.path().join(HIGHSCORE_FILE));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreFile::at(dir.path().join(HIGHSCORE_FILE));
        store.save(37);
        assert_eq!(store.load(), 37);
        store.save(41);
        assert_eq!(store.load(), 41);
    }

    #[test]
    fn test_surrounding_whitespace_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIGHSCORE_FILE);
        std::fs::write(&path, "  12\n").unwrap();
        assert_eq!(HighScoreFile::at(&path).load(), 12);
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIGHSCORE_FILE);
        for garbage in ["", "abc", "-5", "3.5", "99999999999999999999"] {
            std::fs::write(&path, garbage).unwrap();
            assert_eq!(HighScoreFile::at(&path).load(), 0, "contents {garbage:?}");
        }
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = dir.path().join(HIGHSCORE_FILE);
        std::fs::create_dir(&path).unwrap();
        let store = HighScoreFile::at(&path);
        store.save(5);
        assert_eq!(store.load(), 0);
    }
}
