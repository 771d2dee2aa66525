use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to prepare the listing file")]
    Listing(#[source] io::Error),

    #[error("Failed to start editor {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Editor {program} did not exit gracefully ({status})")]
    Failed { program: String, status: ExitStatus },
}
