//! Context snapshot taken at resolution time
//!
//! The snapshot is captured immediately before resolving so a debounced
//! attempt sees the directories as they are when it fires, not as they were
//! when the event arrived.

use std::path::{Path, PathBuf};

use super::strategy::SourceKind;

/// Where a terminal was launched, as reported by the host.
///
/// Hosts report this either as a structured location or as a plain string
/// (possibly a `file://` URI). Both normalize to the same path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CwdHint {
    Path(PathBuf),
    Text(String),
}

impl CwdHint {
    pub(crate) fn to_path(&self) -> PathBuf {
        match self {
            CwdHint::Path(p) => p.clone(),
            CwdHint::Text(s) => {
                let trimmed = s.trim();
                let stripped = trimmed.strip_prefix("file://").unwrap_or(trimmed);
                PathBuf::from(stripped)
            }
        }
    }
}

/// Everything the resolver may look at, captured once per attempt
#[derive(Debug, Clone, Default)]
pub(crate) struct ContextSnapshot {
    /// Launch directory of the active terminal, if the host knows it
    pub(crate) terminal_cwd: Option<CwdHint>,
    /// File open in the active editor, if any
    pub(crate) editor_file: Option<PathBuf>,
    /// Workspace roots in registration order
    pub(crate) workspace_roots: Vec<PathBuf>,
    /// Working directory of this process
    pub(crate) process_cwd: PathBuf,
}

impl ContextSnapshot {
    /// Directory this source would contribute, before name validation
    pub(crate) fn candidate_path(&self, kind: SourceKind) -> Option<PathBuf> {
        match kind {
            SourceKind::TerminalCwd => self.terminal_cwd.as_ref().map(CwdHint::to_path),
            SourceKind::WorkspaceDir => self.workspace_roots.first().cloned(),
            SourceKind::EditorDir => self
                .editor_file
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf),
            SourceKind::ProcessCwd => Some(self.process_cwd.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cwd_hint_forms_normalize_to_same_path() {
        let structured = CwdHint::Path(PathBuf::from("/home/alice/project-x"));
        let plain = CwdHint::Text("/home/alice/project-x".to_string());
        assert_eq!(structured.to_path(), plain.to_path());
    }

    #[test]
    fn cwd_hint_strips_file_uri_scheme() {
        let hint = CwdHint::Text("file:///home/alice/project-x".to_string());
        assert_eq!(hint.to_path(), PathBuf::from("/home/alice/project-x"));
    }

    #[test]
    fn cwd_hint_trims_text_form() {
        let hint = CwdHint::Text("  /tmp/work \n".to_string());
        assert_eq!(hint.to_path(), PathBuf::from("/tmp/work"));
    }

    #[test]
    fn candidate_path_editor_uses_containing_dir() {
        let ctx = ContextSnapshot {
            editor_file: Some(PathBuf::from("/repo/src/main.ext")),
            ..Default::default()
        };
        assert_eq!(
            ctx.candidate_path(SourceKind::EditorDir),
            Some(PathBuf::from("/repo/src"))
        );
    }

    #[test]
    fn candidate_path_workspace_takes_first_root() {
        let ctx = ContextSnapshot {
            workspace_roots: vec![PathBuf::from("/w/one"), PathBuf::from("/w/two")],
            ..Default::default()
        };
        assert_eq!(
            ctx.candidate_path(SourceKind::WorkspaceDir),
            Some(PathBuf::from("/w/one"))
        );
    }

    #[test]
    fn candidate_path_process_always_present() {
        let ctx = ContextSnapshot {
            process_cwd: PathBuf::from("/var/tmp/build7"),
            ..Default::default()
        };
        assert_eq!(
            ctx.candidate_path(SourceKind::ProcessCwd),
            Some(PathBuf::from("/var/tmp/build7"))
        );
    }

    #[test]
    fn candidate_path_absent_sources_yield_none() {
        let ctx = ContextSnapshot::default();
        assert_eq!(ctx.candidate_path(SourceKind::TerminalCwd), None);
        assert_eq!(ctx.candidate_path(SourceKind::WorkspaceDir), None);
        assert_eq!(ctx.candidate_path(SourceKind::EditorDir), None);
    }
}
