use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EDITOR environment variable must be set or -e must be used")]
    NoEditor,
}

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    source: PathBuf,
    target: PathBuf,
    editor: OsString,
}

impl Config {
    /// Build the run configuration
    ///
    /// The editor flag wins over the environment default. An empty value
    /// counts as unset.
    pub fn resolve(
        source: PathBuf,
        target: PathBuf,
        editor_flag: Option<OsString>,
        editor_env: Option<OsString>,
    ) -> Result<Self, ConfigError> {
        let editor = editor_flag
            .filter(|e| !e.is_empty())
            .or_else(|| editor_env.filter(|e| !e.is_empty()))
            .ok_or(ConfigError::NoEditor)?;

        Ok(Self {
            source,
            target,
            editor,
        })
    }

    /// Root of the tree to scan
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Root the edited lines are relative to
    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn editor(&self) -> &OsStr {
        &self.editor
    }
}
