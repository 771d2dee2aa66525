use crate::archive::ArchiveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Failed to remove {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move {} to {}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to extract {name} to {}", .target.display())]
    Extract {
        name: String,
        target: PathBuf,
        #[source]
        source: ArchiveError,
    },
}
