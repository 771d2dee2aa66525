use super::{ArchiveError, ArchiveFormat};
use std::path::{Path, PathBuf};

/// RAR adapter, backed by the native unrar library when the `rar` feature is on
pub struct RarFormat;

#[cfg(feature = "rar")]
fn rar_error(path: &Path, error: impl std::fmt::Display) -> ArchiveError {
    ArchiveError::Rar {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

#[cfg(feature = "rar")]
impl ArchiveFormat for RarFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &[".rar"]
    }

    fn members(&self, path: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
        let listing = unrar::Archive::new(path)
            .open_for_listing()
            .map_err(|e| rar_error(path, e))?;

        let mut members = Vec::new();
        for header in listing {
            let header = header.map_err(|e| rar_error(path, e))?;
            if header.is_directory() {
                continue;
            }
            members.push(header.filename);
        }

        Ok(members)
    }

    fn extract(&self, path: &Path, member: &Path, target: &Path) -> Result<u64, ArchiveError> {
        super::ensure_not_container(path, target)?;

        let mut archive = unrar::Archive::new(path)
            .open_for_processing()
            .map_err(|e| rar_error(path, e))?;

        while let Some(header) = archive.read_header().map_err(|e| rar_error(path, e))? {
            let entry = header.entry();
            if !entry.is_directory() && entry.filename.as_path() == member {
                header.extract_to(target).map_err(|e| rar_error(path, e))?;
                let written = std::fs::metadata(target)
                    .map_err(|e| ArchiveError::write(target, e))?
                    .len();
                return Ok(written);
            }
            archive = header.skip().map_err(|e| rar_error(path, e))?;
        }

        Err(ArchiveError::member_not_found(path, member))
    }
}

#[cfg(not(feature = "rar"))]
impl ArchiveFormat for RarFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &[".rar"]
    }

    fn members(&self, path: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
        Err(ArchiveError::Unsupported {
            kind: "rar",
            path: path.to_path_buf(),
        })
    }

    fn extract(&self, path: &Path, _member: &Path, _target: &Path) -> Result<u64, ArchiveError> {
        Err(ArchiveError::Unsupported {
            kind: "rar",
            path: path.to_path_buf(),
        })
    }
}
