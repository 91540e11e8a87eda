use std::path::PathBuf;

use thiserror::Error;

use crate::core::Strategy;

/// Failures of a single rename attempt.
///
/// None of these abort the process: the engine logs them and carries on,
/// since a later terminal event is the natural retry.
#[derive(Debug, Error)]
pub(crate) enum RenameError {
    #[error("No active terminal to rename")]
    NoActiveTerminal,

    #[error("No candidate directory produced a usable folder name (strategy: {strategy})")]
    NotFound { strategy: Strategy },

    #[error("Unexpected failure while renaming: {0}")]
    Unexpected(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid log level \"{input}\" (expected ERROR, WARN, INFO, DEBUG, or TRACE)")]
    InvalidLogLevel { input: String },

    #[error("Invalid strategy \"{input}\" (expected terminal, workspace, or editor)")]
    InvalidStrategy { input: String },

    #[error("No writable config location found")]
    NoConfigDir,

    #[error("Failed to write config to {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
