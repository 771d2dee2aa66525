//! The line-oriented text the user edits
//!
//! One entry name per line, newline terminated. Line `i` of the edited text
//! always refers to entry `i` of the scan; an empty line means "delete".


use crate::entry::Entry;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListingError {
    #[error("Entry name cannot be listed on a single line: {name:?}")]
    MultilineName { name: String },
}

/// Render entries into listing text
pub fn render(entries: &[Entry]) -> Result<String, ListingError> {
    let mut listing = String::new();

    for entry in entries {
        let name = entry.name();

        // A line break in a name would shift every following line
        if name.contains(['\n', '\r']) {
            return Err(ListingError::MultilineName { name });
        }

        listing.push_str(&name);
        listing.push('\n');
    }

    Ok(listing)
}

/// Split edited listing text back into target lines
///
/// Accepts `\n` and `\r\n` terminators, and a missing terminator on the
/// final line. Blank lines are kept as empty targets.
pub fn parse(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
