mod error;


pub use error::EditorError;

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// Anything that can turn a listing into an edited listing
///
/// Blocks until the edit is finished.
pub trait ListingEditor {
    fn edit(&self, listing: &str) -> Result<String, EditorError>;
}

/// Runs an external program on a temporary copy of the listing
///
/// The program gets the file path as its only argument; the file is removed
/// again on every exit path.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    program: OsString,
}

impl ExternalEditor {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl ListingEditor for ExternalEditor {
    fn edit(&self, listing: &str) -> Result<String, EditorError> {
        let mut file = tempfile::Builder::new()
            .prefix("umv-")
            .suffix(".txt")
            .tempfile()
            .map_err(EditorError::Listing)?;

        file.write_all(listing.as_bytes())
            .and_then(|()| file.flush())
            .map_err(EditorError::Listing)?;

        debug!(
            editor = %self.program_name(),
            listing = %file.path().display(),
            "starting editor"
        );

        let status = Command::new(&self.program)
            .arg(file.path())
            .status()
            .map_err(|source| EditorError::Spawn {
                program: self.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                program: self.program_name(),
                status,
            });
        }

        // Re-read by path: many editors replace the file instead of writing in place
        fs::read_to_string(file.path()).map_err(EditorError::Listing)
    }
}
