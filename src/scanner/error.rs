use crate::archive::ArchiveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to walk source tree")]
    Walk(#[from] walkdir::Error),

    #[error("Path escapes the scanned root: {}", .0.display())]
    OutsideRoot(PathBuf),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}
