//! Resolution strategies and candidate source kinds
//!
//! A strategy is a fixed priority order over the four directory sources.
//! Every order ends in the process working directory so resolution always
//! has a last resort.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::AppError;

/// Which directory source to prefer when several are available
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Strategy {
    /// Prefer the terminal's own launch directory (default)
    #[default]
    Terminal,
    /// Prefer the first workspace root
    Workspace,
    /// Prefer the active editor file's directory
    Editor,
}

/// One of the four candidate directory sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SourceKind {
    TerminalCwd,
    WorkspaceDir,
    EditorDir,
    ProcessCwd,
}

impl Strategy {
    /// Candidate sources in the order this strategy tries them
    pub(crate) fn order(self) -> [SourceKind; 4] {
        use SourceKind::*;
        match self {
            Strategy::Terminal => [TerminalCwd, WorkspaceDir, EditorDir, ProcessCwd],
            Strategy::Workspace => [WorkspaceDir, EditorDir, TerminalCwd, ProcessCwd],
            Strategy::Editor => [EditorDir, TerminalCwd, WorkspaceDir, ProcessCwd],
        }
    }

    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_lowercase().as_str() {
            "terminal" => Ok(Strategy::Terminal),
            "workspace" => Ok(Strategy::Workspace),
            "editor" => Ok(Strategy::Editor),
            _ => Err(AppError::InvalidStrategy {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Terminal => "terminal",
            Strategy::Workspace => "workspace",
            Strategy::Editor => "editor",
        };
        write!(f, "{name}")
    }
}

impl SourceKind {
    /// Stable label used in resolution results and probe output
    pub(crate) fn label(self) -> &'static str {
        match self {
            SourceKind::TerminalCwd => "terminal-cwd",
            SourceKind::WorkspaceDir => "workspace-dir",
            SourceKind::EditorDir => "editor-dir",
            SourceKind::ProcessCwd => "process-cwd",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
