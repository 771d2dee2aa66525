use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to read archive {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse ZIP archive {}", .path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Failed to read RAR archive {}: {reason}", .path.display())]
    Rar { path: PathBuf, reason: String },

    #[error("Support for {kind} archives is not compiled in: {}", .path.display())]
    Unsupported { kind: &'static str, path: PathBuf },

    #[error("Member {} not found in {}", .member.display(), .path.display())]
    MemberNotFound { path: PathBuf, member: PathBuf },

    #[error("Refusing to extract over its own container {}", .path.display())]
    TargetIsContainer { path: PathBuf },

    #[error("Failed to write {}", .target.display())]
    Write {
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ArchiveError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn zip(path: &Path, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(target: &Path, source: io::Error) -> Self {
        Self::Write {
            target: target.to_path_buf(),
            source,
        }
    }

    pub(crate) fn member_not_found(path: &Path, member: &Path) -> Self {
        Self::MemberNotFound {
            path: path.to_path_buf(),
            member: member.to_path_buf(),
        }
    }
}
