mod error;
mod rarfile;
mod registry;
mod tarball;
mod zipfile;


pub use error::ArchiveError;
pub use rarfile::RarFormat;
pub use registry::FormatRegistry;
pub use tarball::TarFormat;
pub use zipfile::ZipFormat;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Core trait that every archive adapter implements
pub trait ArchiveFormat: Send + Sync {
    /// Filename suffixes this format claims (e.g. ".tar.gz")
    fn extensions(&self) -> &'static [&'static str];

    /// Test whether a file belongs to this format, by name only
    ///
    /// No content sniffing takes place, so a misnamed file is misclassified.
    fn test(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let file_name = file_name.as_encoded_bytes();

        self.extensions()
            .iter()
            .any(|ext| file_name.ends_with(ext.as_bytes()))
    }

    /// List the regular-file members of an archive, in archive order
    ///
    /// Directory entries are skipped and no member data is decoded.
    fn members(&self, path: &Path) -> Result<Vec<PathBuf>, ArchiveError>;

    /// Stream a single member out to `target`, creating or truncating it
    ///
    /// # Returns
    /// Number of bytes written
    fn extract(&self, path: &Path, member: &Path, target: &Path) -> Result<u64, ArchiveError>;
}

/// Fail when `target` resolves to the container being read
///
/// Creating the target truncates it, so extracting a member onto its own
/// container would destroy the container mid-copy. A target that does not
/// exist yet cannot be the container.
pub(crate) fn ensure_not_container(path: &Path, target: &Path) -> Result<(), ArchiveError> {
    let Ok(target) = fs::canonicalize(target) else {
        return Ok(());
    };
    let container = fs::canonicalize(path).map_err(|e| ArchiveError::io(path, e))?;

    if target == container {
        return Err(ArchiveError::TargetIsContainer {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// The closed set of supported container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Tar,
    Zip,
    Rar,
}

impl ArchiveKind {
    /// All kinds in classification priority order
    pub const ALL: [ArchiveKind; 3] = [ArchiveKind::Tar, ArchiveKind::Zip, ArchiveKind::Rar];

    /// The adapter implementing this kind
    pub fn format(self) -> &'static dyn ArchiveFormat {
        match self {
            ArchiveKind::Tar => &TarFormat,
            ArchiveKind::Zip => &ZipFormat,
            ArchiveKind::Rar => &RarFormat,
        }
    }

    /// Whether the adapter for this kind can actually open archives in this build
    pub fn is_available(self) -> bool {
        match self {
            ArchiveKind::Tar | ArchiveKind::Zip => true,
            ArchiveKind::Rar => cfg!(feature = "rar"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArchiveKind::Tar => "tar",
            ArchiveKind::Zip => "zip",
            ArchiveKind::Rar => "rar",
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
