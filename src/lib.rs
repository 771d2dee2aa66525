// Public API exports
pub mod archive;
pub mod config;
pub mod editor;
pub mod entry;
pub mod error;
pub mod listing;
pub mod plan;
pub mod scanner;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use archive::{
    ArchiveError, ArchiveFormat, ArchiveKind, FormatRegistry, RarFormat, TarFormat, ZipFormat,
};
pub use config::{Config, ConfigError};
pub use editor::{EditorError, ExternalEditor, ListingEditor};
pub use entry::{ArchiveEntry, Entry, EntryError, FileEntry, MEMBER_SEPARATOR};
pub use error::Error;
pub use listing::ListingError;
pub use plan::{Action, Plan, PlanError, Step, Summary};
pub use scanner::{ScanError, Scanner};

use tracing::info;

/// Scan the source tree, let the user edit the listing, apply the result
///
/// Nothing on disk changes before the edited listing has been checked
/// against the scan.
pub fn run(config: &Config, editor: &dyn ListingEditor) -> Result<Summary, Error> {
    let sources = Scanner::new(config.source()).scan()?;
    info!(
        source = %config.source().display(),
        entries = sources.len(),
        "scanned source tree"
    );

    let listing = listing::render(&sources)?;
    let edited = editor.edit(&listing)?;
    let targets = listing::parse(&edited);

    let plan = Plan::reconcile(sources, targets)?;
    let summary = plan.execute(config.target())?;

    Ok(summary)
}
