//! Local environment host
//!
//! Answers the capability traits from the process environment, with CLI
//! overrides standing in for the pieces a bare shell cannot report
//! (terminal launch directory, editor file, workspace roots).

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use crossterm::{execute, terminal::SetTitle};

use crate::core::CwdHint;

use super::{EditorProvider, ProcessEnv, RenameSink, TerminalProvider, WorkspaceProvider};

/// Context pieces supplied on the command line
#[derive(Debug, Default, Clone)]
pub(crate) struct LocalOverrides {
    pub(crate) terminal_cwd: Option<String>,
    pub(crate) editor_file: Option<PathBuf>,
    pub(crate) workspace_roots: Vec<PathBuf>,
}

pub(crate) struct LocalHost {
    terminal_name: Option<String>,
    terminal_cwd: Option<CwdHint>,
    editor_file: Option<PathBuf>,
    workspace_roots: Vec<PathBuf>,
    process_cwd: PathBuf,
}

impl LocalHost {
    /// Probe the environment once. A terminal is assumed when stderr is a
    /// TTY or when the caller supplied a launch directory.
    pub(crate) fn detect(overrides: LocalOverrides) -> Self {
        let has_terminal = overrides.terminal_cwd.is_some() || io::stderr().is_terminal();
        LocalHost {
            terminal_name: has_terminal.then(shell_name),
            terminal_cwd: overrides.terminal_cwd.map(cwd_hint),
            editor_file: overrides.editor_file,
            workspace_roots: overrides.workspace_roots,
            process_cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// URI-style hints keep their string form; plain paths become structured
fn cwd_hint(raw: String) -> CwdHint {
    if raw.starts_with("file://") {
        CwdHint::Text(raw)
    } else {
        CwdHint::Path(PathBuf::from(raw))
    }
}

/// Name the terminal after the login shell, the way hosts label shell tabs
fn shell_name() -> String {
    std::env::var("SHELL")
        .ok()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shell".to_string())
}

impl TerminalProvider for LocalHost {
    fn active_name(&self) -> Option<String> {
        self.terminal_name.clone()
    }

    fn launch_cwd(&self) -> Option<CwdHint> {
        self.terminal_cwd.clone()
    }

    #[cfg(unix)]
    fn process_id(&self) -> Option<u32> {
        // the shell that launched us is the closest thing to the tab's process
        Some(std::os::unix::process::parent_id())
    }
}

impl EditorProvider for LocalHost {
    fn active_file(&self) -> Option<PathBuf> {
        self.editor_file.clone()
    }
}

impl WorkspaceProvider for LocalHost {
    fn roots(&self) -> Vec<PathBuf> {
        self.workspace_roots.clone()
    }
}

impl ProcessEnv for LocalHost {
    fn cwd(&self) -> PathBuf {
        self.process_cwd.clone()
    }
}

/// Renames the controlling terminal by emitting the title escape on stderr
pub(crate) struct TitleSink;

impl RenameSink for TitleSink {
    fn apply(&self, name: &str) -> io::Result<()> {
        execute!(io::stderr(), SetTitle(name))
    }
}

/// Prints the would-be rename instead of changing anything
pub(crate) struct DryRunSink;

impl RenameSink for DryRunSink {
    fn apply(&self, name: &str) -> io::Result<()> {
        println!("dry-run: rename to \"{name}\"");
        Ok(())
    }
}
