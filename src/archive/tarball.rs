use super::{ensure_not_container, ArchiveError, ArchiveFormat};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use xz2::read::XzDecoder;

/// Tar family adapter: plain, gzip, bzip2 and xz compressed tarballs
pub struct TarFormat;

/// Stream compression wrapped around the tar data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
}

impl Compression {
    /// Pick the decompressor from the filename suffix
    pub(crate) fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.as_encoded_bytes())
            .unwrap_or_default();

        if name.ends_with(b".tar.gz") {
            Compression::Gzip
        } else if name.ends_with(b".tar.bz2") {
            Compression::Bzip2
        } else if name.ends_with(b".tar.xz") {
            Compression::Xz
        } else {
            Compression::None
        }
    }
}

impl TarFormat {
    fn open(path: &Path) -> Result<tar::Archive<Box<dyn Read>>, ArchiveError> {
        let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
        let reader = BufReader::new(file);

        let stream: Box<dyn Read> = match Compression::detect(path) {
            Compression::None => Box::new(reader),
            Compression::Gzip => Box::new(GzDecoder::new(reader)),
            Compression::Bzip2 => Box::new(BzDecoder::new(reader)),
            Compression::Xz => Box::new(XzDecoder::new(reader)),
        };

        Ok(tar::Archive::new(stream))
    }
}

impl ArchiveFormat for TarFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &[".tar", ".tar.gz", ".tar.bz2", ".tar.xz"]
    }

    fn members(&self, path: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
        let mut archive = Self::open(path)?;
        let entries = archive.entries().map_err(|e| ArchiveError::io(path, e))?;

        let mut members = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ArchiveError::io(path, e))?;

            // Directories, links and extension headers are not members
            if !entry.header().entry_type().is_file() {
                continue;
            }

            let member = entry.path().map_err(|e| ArchiveError::io(path, e))?;
            members.push(member.into_owned());
        }

        Ok(members)
    }

    fn extract(&self, path: &Path, member: &Path, target: &Path) -> Result<u64, ArchiveError> {
        ensure_not_container(path, target)?;

        let mut archive = Self::open(path)?;
        let entries = archive.entries().map_err(|e| ArchiveError::io(path, e))?;

        for entry in entries {
            let mut entry = entry.map_err(|e| ArchiveError::io(path, e))?;
            if !entry.header().entry_type().is_file() {
                continue;
            }
            if entry.path().map_err(|e| ArchiveError::io(path, e))? != member {
                continue;
            }

            let mut output = File::create(target).map_err(|e| ArchiveError::write(target, e))?;
            return io::copy(&mut entry, &mut output).map_err(|e| ArchiveError::write(target, e));
        }

        Err(ArchiveError::member_not_found(path, member))
    }
}
