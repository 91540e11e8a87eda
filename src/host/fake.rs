//! Scripted hosts and sinks for unit tests

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::core::CwdHint;

use super::{EditorProvider, ProcessEnv, RenameSink, TerminalProvider, WorkspaceProvider};

#[derive(Debug, Clone)]
pub(crate) struct FakeHost {
    pub(crate) terminal_name: Option<String>,
    pub(crate) terminal_cwd: Option<CwdHint>,
    pub(crate) terminal_pid: Option<u32>,
    pub(crate) editor_file: Option<PathBuf>,
    pub(crate) workspace_roots: Vec<PathBuf>,
    pub(crate) process_cwd: PathBuf,
}

impl FakeHost {
    /// Bare session: an active terminal named "zsh" and a process cwd
    pub(crate) fn new(process_cwd: &str) -> Self {
        FakeHost {
            terminal_name: Some("zsh".to_string()),
            terminal_cwd: None,
            terminal_pid: Some(4242),
            editor_file: None,
            workspace_roots: Vec::new(),
            process_cwd: PathBuf::from(process_cwd),
        }
    }

    pub(crate) fn without_terminal(mut self) -> Self {
        self.terminal_name = None;
        self.terminal_cwd = None;
        self.terminal_pid = None;
        self
    }

    pub(crate) fn with_terminal_cwd(mut self, hint: CwdHint) -> Self {
        self.terminal_cwd = Some(hint);
        self
    }

    pub(crate) fn with_editor_file(mut self, path: &str) -> Self {
        self.editor_file = Some(PathBuf::from(path));
        self
    }

    pub(crate) fn with_roots(mut self, roots: &[&str]) -> Self {
        self.workspace_roots = roots.iter().map(PathBuf::from).collect();
        self
    }
}

impl TerminalProvider for FakeHost {
    fn active_name(&self) -> Option<String> {
        self.terminal_name.clone()
    }

    fn launch_cwd(&self) -> Option<CwdHint> {
        self.terminal_cwd.clone()
    }

    fn process_id(&self) -> Option<u32> {
        self.terminal_pid
    }
}

impl EditorProvider for FakeHost {
    fn active_file(&self) -> Option<PathBuf> {
        self.editor_file.clone()
    }
}

impl WorkspaceProvider for FakeHost {
    fn roots(&self) -> Vec<PathBuf> {
        self.workspace_roots.clone()
    }
}

impl ProcessEnv for FakeHost {
    fn cwd(&self) -> PathBuf {
        self.process_cwd.clone()
    }
}

/// Records every applied name. Clones share the same record.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    applied: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn applied(&self) -> Vec<String> {
        self.applied.lock().unwrap().clone()
    }
}

impl RenameSink for RecordingSink {
    fn apply(&self, name: &str) -> std::io::Result<()> {
        self.applied.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

/// Always fails, for exercising the unexpected-failure path
pub(crate) struct FailingSink;

impl RenameSink for FailingSink {
    fn apply(&self, _name: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("terminal went away"))
    }
}
