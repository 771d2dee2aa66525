use super::EntryError;
use crate::archive::ArchiveKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Separator between container and member in a displayed name
///
/// Display only: names are never parsed back into entries.
pub const MEMBER_SEPARATOR: &str = "!/";

/// A regular file stored inside a tar, zip or rar container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveEntry {
    root: PathBuf,
    /// Container path relative to `root`
    archive: PathBuf,
    /// Member path inside the container, exactly as recorded there
    member: PathBuf,
    kind: ArchiveKind,
}

impl ArchiveEntry {
    pub fn new(
        root: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
        member: impl Into<PathBuf>,
        kind: ArchiveKind,
    ) -> Self {
        Self {
            root: root.into(),
            archive: archive.into(),
            member: member.into(),
            kind,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn member(&self) -> &Path {
        &self.member
    }

    pub fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// Location of the container on disk
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.archive)
    }

    /// "<archive>!/<member>"
    pub fn name(&self) -> String {
        format!(
            "{}{}{}",
            self.archive.to_string_lossy(),
            MEMBER_SEPARATOR,
            self.member.to_string_lossy()
        )
    }

    /// Members are never deleted from their container
    pub fn remove(self) -> Result<(), EntryError> {
        debug!(name = %self.name(), "ignoring removal of archive member");
        Ok(())
    }

    /// Copy the member out of its container into `target`
    ///
    /// The container itself is only ever opened for reading.
    pub fn rename(self, target: &Path) -> Result<(), EntryError> {
        let container = self.path();
        let written = self
            .kind
            .format()
            .extract(&container, &self.member, target)
            .map_err(|source| EntryError::Extract {
                name: self.name(),
                target: target.to_path_buf(),
                source,
            })?;

        debug!(
            kind = %self.kind,
            name = %self.name(),
            to = %target.display(),
            bytes = written,
            "extracted archive member"
        );
        Ok(())
    }
}
