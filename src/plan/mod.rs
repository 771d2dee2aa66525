mod error;


pub use error::PlanError;

use crate::entry::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happens to one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete the entry (ignored for archive members)
    Remove,
    /// Move or extract the entry to this path, relative to the target root
    Rename(PathBuf),
    /// Leave the entry alone
    Keep,
}

/// One entry paired with the line that was edited for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub entry: Entry,
    pub action: Action,
}

/// Counts of what an executed plan did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Plain files moved
    pub moved: usize,
    /// Archive members copied out of their container
    pub extracted: usize,
    /// Plain files deleted
    pub removed: usize,
    /// Archive members whose line was blanked (containers are never modified)
    pub ignored: usize,
    /// Archive members whose line was left unchanged
    pub kept: usize,
}

impl Summary {
    /// Number of operations that changed the filesystem
    pub fn applied(&self) -> usize {
        self.moved + self.extracted + self.removed
    }
}

/// Ordered set of filesystem operations reconciled from an edited listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Pair each scanned entry with the edited line at the same position
    ///
    /// Lines are never parsed back into entries. Line `i` always belongs to
    /// `sources[i]`, whatever its text says. Fails without touching anything
    /// when the line counts differ.
    pub fn reconcile(sources: Vec<Entry>, targets: Vec<String>) -> Result<Self, PlanError> {
        if sources.len() != targets.len() {
            return Err(PlanError::ListingMismatch {
                expected: sources.len(),
                actual: targets.len(),
            });
        }

        let steps = sources
            .into_iter()
            .zip(targets)
            .map(|(entry, target)| {
                let action = action_for(&entry, target);
                Step { entry, action }
            })
            .collect();

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in listing order against `target_root`
    ///
    /// Stops at the first failure. Steps already applied stay applied and
    /// nothing is rolled back.
    pub fn execute(self, target_root: &Path) -> Result<Summary, PlanError> {
        let mut summary = Summary::default();

        for (index, Step { entry, action }) in self.steps.into_iter().enumerate() {
            let line = index + 1;
            let name = entry.name();
            let is_member = entry.is_archive_member();

            match action {
                Action::Keep => {
                    debug!(line, name = %name, "keeping entry");
                    summary.kept += 1;
                }
                Action::Remove => {
                    entry.remove().map_err(|source| PlanError::Operation {
                        line,
                        name,
                        applied: summary.applied(),
                        source,
                    })?;

                    if is_member {
                        summary.ignored += 1;
                    } else {
                        summary.removed += 1;
                    }
                }
                Action::Rename(target) => {
                    let destination = target_root.join(&target);

                    if let Some(parent) = destination.parent() {
                        fs::create_dir_all(parent).map_err(|source| PlanError::CreateDir {
                            line,
                            path: parent.to_path_buf(),
                            applied: summary.applied(),
                            source,
                        })?;
                    }

                    entry
                        .rename(&destination)
                        .map_err(|source| PlanError::Operation {
                            line,
                            name,
                            applied: summary.applied(),
                            source,
                        })?;

                    if is_member {
                        summary.extracted += 1;
                    } else {
                        summary.moved += 1;
                    }
                }
            }
        }

        info!(
            moved = summary.moved,
            extracted = summary.extracted,
            removed = summary.removed,
            ignored = summary.ignored,
            kept = summary.kept,
            "plan executed"
        );
        Ok(summary)
    }
}

/// Decide the action for one entry from its edited line
///
/// An archive member whose line still reads exactly as it was listed is kept
/// rather than extracted to a path containing the member separator.
fn action_for(entry: &Entry, target: String) -> Action {
    if target.is_empty() {
        Action::Remove
    } else if entry.is_archive_member() && target == entry.name() {
        Action::Keep
    } else {
        Action::Rename(PathBuf::from(target))
    }
}
