mod error;


pub use error::ScanError;

use crate::archive::FormatRegistry;
use crate::entry::{ArchiveEntry, Entry, FileEntry, MEMBER_SEPARATOR};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursive walker that turns a directory tree into entries
///
/// Files claimed by an archive format expand into one entry per member,
/// every other file becomes a single plain file entry. Symlinks are followed.
pub struct Scanner {
    root: PathBuf,
    registry: FormatRegistry,
}

impl Scanner {
    /// Create a scanner recognizing every archive format available in this build
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry: FormatRegistry::new(),
        }
    }

    /// Replace the archive format table
    pub fn with_registry(mut self, registry: FormatRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree depth-first and collect every entry
    ///
    /// Children are visited in the order the filesystem reports them. The
    /// result is fully materialized because the listing relies on stable
    /// positions.
    pub fn scan(&self) -> Result<Vec<Entry>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        let mut entries = Vec::new();

        for item in WalkDir::new(&self.root).follow_links(true) {
            let item = match item {
                Ok(item) => item,
                Err(err) => match dangling_symlink(&err) {
                    Some(link) => {
                        warn!(path = %link.display(), "skipping dangling symlink");
                        continue;
                    }
                    None => return Err(err.into()),
                },
            };

            // Directories only contribute their children
            if !item.file_type().is_file() {
                continue;
            }

            let relative = item
                .path()
                .strip_prefix(&self.root)
                .map_err(|_| ScanError::OutsideRoot(item.path().to_path_buf()))?;

            match self.registry.select(item.path()) {
                Some(kind) => {
                    let members = kind.format().members(item.path())?;
                    debug!(
                        archive = %relative.display(),
                        %kind,
                        members = members.len(),
                        "listed archive"
                    );

                    for member in members {
                        let entry = ArchiveEntry::new(&self.root, relative, member, kind);
                        warn_if_ambiguous(&entry.name(), relative, entry.member());
                        entries.push(Entry::Archive(entry));
                    }
                }
                None => entries.push(Entry::File(FileEntry::new(&self.root, relative))),
            }
        }

        debug!(root = %self.root.display(), entries = entries.len(), "scan complete");
        Ok(entries)
    }
}

/// A separator inside either half makes the displayed line misleading to read.
/// Alignment is positional, so the entry itself stays usable.
fn warn_if_ambiguous(name: &str, archive: &Path, member: &Path) {
    let contains_separator =
        |path: &Path| path.to_string_lossy().contains(MEMBER_SEPARATOR);

    if contains_separator(archive) || contains_separator(member) {
        warn!(entry = name, "archive entry name contains the member separator");
    }
}

/// The link path, when a walk error comes from following a symlink whose
/// target does not exist. Loops and permission errors return `None`.
fn dangling_symlink(err: &walkdir::Error) -> Option<&Path> {
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);
    let path = err.path()?;

    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);

    (not_found && is_symlink).then_some(path)
}
