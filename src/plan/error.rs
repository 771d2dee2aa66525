use crate::entry::EntryError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Number of lines mismatch: listing had {expected} lines, edited listing has {actual}")]
    ListingMismatch { expected: usize, actual: usize },

    #[error(
        "Line {line}: failed to create directory {} ({applied} operations already applied)",
        .path.display()
    )]
    CreateDir {
        line: usize,
        path: PathBuf,
        applied: usize,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: {name} ({applied} operations already applied)")]
    Operation {
        line: usize,
        name: String,
        applied: usize,
        #[source]
        source: EntryError,
    },
}
