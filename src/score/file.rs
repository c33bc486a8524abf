//! File-backed high-score store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::HighScoreStore;
use crate::core::{StoreError, HIGH_SCORE_FILE};

/// Stores the high score as a decimal number in a text file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `highscore.txt` in the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::at(HIGH_SCORE_FILE)
    }

    /// Store at a custom path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> Result<Option<f64>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let text = contents.trim();
        if text.is_empty() {
            tracing::warn!(path = %self.path.display(), "high score file is blank, treating as no record");
            return Ok(None);
        }

        text.parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
            .map(Some)
            .ok_or_else(|| StoreError::Corrupt {
                path: self.path.clone(),
                contents: text.to_string(),
            })
    }

    fn save(&mut self, score: f64) -> Result<(), StoreError> {
        fs::write(&self.path, format!("{score}\n")).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_path() {
        assert_eq!(FileStore::new().path(), Path::new("highscore.txt"));
        assert_eq!(FileStore::default(), FileStore::new());
    }

    #[test]
    fn test_missing_file_is_no_record() {
        let dir = tempdir().unwrap();
        let store = FileStore::at(dir.path().join("highscore.txt"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::at(dir.path().join("highscore.txt"));

        store.save(13147.75).unwrap();
        assert_eq!(store.load().unwrap(), Some(13147.75));

        // Later saves replace the record entirely
        store.save(5.0).unwrap();
        assert_eq!(store.load().unwrap(), Some(5.0));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "5\n");
    }

    #[test]
    fn test_reads_surrounding_whitespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "  0.0\n").unwrap();
        assert_eq!(FileStore::at(&path).load().unwrap(), Some(0.0));
    }

    #[test]
    fn test_blank_file_is_no_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "\n").unwrap();
        assert_eq!(FileStore::at(&path).load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "a lot of money").unwrap();

        match FileStore::at(&path).load() {
            Err(StoreError::Corrupt { contents, .. }) => assert_eq!(contents, "a lot of money"),
            other => panic!("expected corrupt record, got {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        // A directory exists at the path, so reading is not a "missing" case
        let dir = tempdir().unwrap();
        let store = FileStore::at(dir.path());
        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_write_failure_is_surfaced() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::at(dir.path().join("missing").join("highscore.txt"));
        assert!(matches!(store.save(1.0), Err(StoreError::Write { .. })));
    }
}
