use super::{ensure_not_container, ArchiveError, ArchiveFormat};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

/// ZIP adapter
pub struct ZipFormat;

impl ZipFormat {
    fn open(path: &Path) -> Result<ZipArchive<BufReader<File>>, ArchiveError> {
        let file = File::open(path).map_err(|e| ArchiveError::io(path, e))?;
        ZipArchive::new(BufReader::new(file)).map_err(|e| ArchiveError::zip(path, e))
    }
}

impl ArchiveFormat for ZipFormat {
    fn extensions(&self) -> &'static [&'static str] {
        &[".zip"]
    }

    fn members(&self, path: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
        let mut archive = Self::open(path)?;

        let mut members = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            // Raw access reads the central directory record without setting up a decompressor
            let file = archive
                .by_index_raw(i)
                .map_err(|e| ArchiveError::zip(path, e))?;

            // Skip directories
            if file.is_dir() {
                continue;
            }

            members.push(PathBuf::from(file.name()));
        }

        Ok(members)
    }

    fn extract(&self, path: &Path, member: &Path, target: &Path) -> Result<u64, ArchiveError> {
        let name = member
            .to_str()
            .ok_or_else(|| ArchiveError::member_not_found(path, member))?;

        ensure_not_container(path, target)?;

        let mut archive = Self::open(path)?;
        let mut file = match archive.by_name(name) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => {
                return Err(ArchiveError::member_not_found(path, member));
            }
            Err(e) => return Err(ArchiveError::zip(path, e)),
        };

        let mut output = File::create(target).map_err(|e| ArchiveError::write(target, e))?;
        io::copy(&mut file, &mut output).map_err(|e| ArchiveError::write(target, e))
    }
}
