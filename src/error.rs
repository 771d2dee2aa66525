use crate::config::ConfigError;
use crate::editor::EditorError;
use crate::listing::ListingError;
use crate::plan::PlanError;
use crate::scanner::ScanError;
use thiserror::Error;

/// Any failure that ends a run
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}
