use super::ArchiveKind;
use std::path::Path;

/// Ordered dispatch table for archive formats
///
/// Formats are tried first-match-wins, so registration order is priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRegistry {
    kinds: Vec<ArchiveKind>,
}

impl FormatRegistry {
    /// Create a registry with every format available in this build (tar, zip, rar)
    pub fn new() -> Self {
        Self {
            kinds: ArchiveKind::ALL
                .into_iter()
                .filter(|kind| kind.is_available())
                .collect(),
        }
    }

    /// Create a registry that recognizes no archives at all
    ///
    /// Every file scanned with it becomes a plain file entry.
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Register a format at the lowest priority
    ///
    /// Registering a kind twice is a no-op.
    pub fn register(&mut self, kind: ArchiveKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Select the format that claims a given file, if any
    pub fn select(&self, path: &Path) -> Option<ArchiveKind> {
        self.kinds
            .iter()
            .copied()
            .find(|kind| kind.format().test(path))
    }

    /// Get the number of registered formats
    pub fn format_count(&self) -> usize {
        self.kinds.len()
    }

    /// List registered formats in priority order
    pub fn registered_kinds(&self) -> &[ArchiveKind] {
        &self.kinds
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
