//! Host capability abstraction layer
//!
//! The engine only sees these narrow traits, so any environment that can
//! answer them (a real terminal, a scripted session, a test fake) can drive
//! a rename.

pub(crate) mod local;

#[cfg(test)]
pub(crate) mod fake;

use std::path::PathBuf;

use crate::core::CwdHint;

/// Read access to the active terminal
pub(crate) trait TerminalProvider {
    /// Display name of the active terminal, `None` when there is none
    fn active_name(&self) -> Option<String>;

    /// Directory the active terminal was launched in, if the host knows it
    fn launch_cwd(&self) -> Option<CwdHint>;

    /// Shell process id of the active terminal, if available
    fn process_id(&self) -> Option<u32> {
        None
    }
}

/// Read access to the active editor
pub(crate) trait EditorProvider {
    /// Path of the file open in the active editor, if any
    fn active_file(&self) -> Option<PathBuf>;
}

/// Read access to workspace roots
pub(crate) trait WorkspaceProvider {
    /// Root folders in registration order; empty when no workspace is open
    fn roots(&self) -> Vec<PathBuf>;
}

/// Read access to this process's environment
pub(crate) trait ProcessEnv {
    /// Current working directory of the process
    fn cwd(&self) -> PathBuf;
}

/// Write access: apply a new display name to the active terminal
pub(crate) trait RenameSink {
    fn apply(&self, name: &str) -> std::io::Result<()>;
}

pub(crate) use local::{DryRunSink, LocalHost, LocalOverrides, TitleSink};
