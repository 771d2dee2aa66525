use super::EntryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A plain file somewhere below the scanned root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    root: PathBuf,
    /// Path relative to `root` (e.g., "photos/2016/a.jpg")
    file: PathBuf,
}

impl FileEntry {
    pub fn new(root: impl Into<PathBuf>, file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file: file.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Location on disk
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.file)
    }

    /// The relative path, which is also what the user edits
    pub fn name(&self) -> String {
        self.file.to_string_lossy().into_owned()
    }

    /// Delete the file
    pub fn remove(self) -> Result<(), EntryError> {
        let path = self.path();
        debug!(path = %path.display(), "removing file");

        fs::remove_file(&path).map_err(|source| EntryError::Remove { path, source })
    }

    /// Atomically move the file to `target`
    pub fn rename(self, target: &Path) -> Result<(), EntryError> {
        let from = self.path();
        debug!(from = %from.display(), to = %target.display(), "moving file");

        fs::rename(&from, target).map_err(|source| EntryError::Move {
            from,
            to: target.to_path_buf(),
            source,
        })
    }
}
