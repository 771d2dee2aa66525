mod error;
mod file;
mod member;


pub use error::EntryError;
pub use file::FileEntry;
pub use member::{ArchiveEntry, MEMBER_SEPARATOR};

use std::fmt;
use std::path::{Path, PathBuf};

/// A renamable/removable unit discovered by scanning
///
/// The variant set is closed: a plain file, or a member of one of the
/// supported container kinds. Renaming and removing consume the entry, since
/// the filesystem no longer matches it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    File(FileEntry),
    Archive(ArchiveEntry),
}

impl Entry {
    /// The scanned root this entry is relative to
    pub fn root(&self) -> &Path {
        match self {
            Entry::File(file) => file.root(),
            Entry::Archive(member) => member.root(),
        }
    }

    /// The on-disk file backing this entry (the container, for archive members)
    pub fn path(&self) -> PathBuf {
        match self {
            Entry::File(file) => file.path(),
            Entry::Archive(member) => member.path(),
        }
    }

    /// The line shown to the user in the listing
    pub fn name(&self) -> String {
        match self {
            Entry::File(file) => file.name(),
            Entry::Archive(member) => member.name(),
        }
    }

    pub fn is_archive_member(&self) -> bool {
        matches!(self, Entry::Archive(_))
    }

    /// Delete the entry (a no-op for archive members)
    pub fn remove(self) -> Result<(), EntryError> {
        match self {
            Entry::File(file) => file.remove(),
            Entry::Archive(member) => member.remove(),
        }
    }

    /// Move a file, or extract a member, to `target`
    pub fn rename(self, target: &Path) -> Result<(), EntryError> {
        match self {
            Entry::File(file) => file.rename(target),
            Entry::Archive(member) => member.rename(target),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<FileEntry> for Entry {
    fn from(file: FileEntry) -> Self {
        Entry::File(file)
    }
}

impl From<ArchiveEntry> for Entry {
    fn from(member: ArchiveEntry) -> Self {
        Entry::Archive(member)
    }
}
