//! Directory resolution
//!
//! Walks the strategy's source order and picks the first candidate whose
//! final path segment survives name validation. Pure over the snapshot:
//! no host access, no logging, no side effects.

use std::path::PathBuf;

use crate::utils::folder_name;

use super::context::ContextSnapshot;
use super::strategy::{SourceKind, Strategy};

/// One evaluated source: where it pointed and whether a usable name came out
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) source: SourceKind,
    /// `None` when the source had nothing to offer
    pub(crate) path: Option<PathBuf>,
    /// `None` when the path was absent or its folder name was empty
    pub(crate) folder: Option<String>,
}

impl Candidate {
    fn evaluate(source: SourceKind, ctx: &ContextSnapshot) -> Self {
        let path = ctx.candidate_path(source);
        let folder = path.as_deref().and_then(folder_name);
        Candidate {
            source,
            path,
            folder,
        }
    }
}

/// The winning candidate of a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolutionResult {
    pub(crate) path: PathBuf,
    pub(crate) source: SourceKind,
    /// Validated folder name: non-empty, trimmed
    pub(crate) folder: String,
}

/// Evaluate the strategy's sources lazily, in priority order
pub(crate) fn candidates(
    strategy: Strategy,
    ctx: &ContextSnapshot,
) -> impl Iterator<Item = Candidate> + '_ {
    strategy
        .order()
        .into_iter()
        .map(|source| Candidate::evaluate(source, ctx))
}

/// First candidate with a usable folder name wins; an empty or
/// whitespace-only name disqualifies that candidate only, and resolution
/// moves on to the next source.
pub(crate) fn resolve(strategy: Strategy, ctx: &ContextSnapshot) -> Option<ResolutionResult> {
    candidates(strategy, ctx).find_map(|candidate| {
        let path = candidate.path?;
        let folder = candidate.folder?;
        Some(ResolutionResult {
            path,
            source: candidate.source,
            folder,
        })
    })
}

/// Evaluate every source for diagnostic output, ignoring first-match-wins
pub(crate) fn survey(strategy: Strategy, ctx: &ContextSnapshot) -> Vec<Candidate> {
    candidates(strategy, ctx).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::CwdHint;

    fn snapshot() -> ContextSnapshot {
        ContextSnapshot {
            process_cwd: PathBuf::from("/var/tmp/build7"),
            ..Default::default()
        }
    }

    // --- resolve ---

    #[test]
    fn terminal_strategy_prefers_terminal_cwd() {
        let mut ctx = snapshot();
        ctx.terminal_cwd = Some(CwdHint::Text("/home/alice/project-x".to_string()));
        ctx.workspace_roots = vec![PathBuf::from("/w/other")];
        ctx.editor_file = Some(PathBuf::from("/repo/src/main.ext"));

        let result = resolve(Strategy::Terminal, &ctx).unwrap();
        assert_eq!(result.path, PathBuf::from("/home/alice/project-x"));
        assert_eq!(result.source, SourceKind::TerminalCwd);
        assert_eq!(result.folder, "project-x");
    }

    #[test]
    fn terminal_strategy_falls_through_to_editor() {
        // no terminal cwd, no workspace: terminal -> workspace -> editor
        let mut ctx = snapshot();
        ctx.editor_file = Some(PathBuf::from("/repo/src/main.ext"));

        let result = resolve(Strategy::Terminal, &ctx).unwrap();
        assert_eq!(result.source, SourceKind::EditorDir);
        assert_eq!(result.folder, "src");
    }

    #[test]
    fn bare_process_cwd_wins_under_every_strategy() {
        let ctx = snapshot();
        for strategy in [Strategy::Terminal, Strategy::Workspace, Strategy::Editor] {
            let result = resolve(strategy, &ctx).unwrap();
            assert_eq!(result.source, SourceKind::ProcessCwd);
            assert_eq!(result.folder, "build7");
        }
    }

    #[test]
    fn workspace_strategy_prefers_workspace_root() {
        let mut ctx = snapshot();
        ctx.terminal_cwd = Some(CwdHint::Path(PathBuf::from("/home/alice/project-x")));
        ctx.workspace_roots = vec![PathBuf::from("/w/site")];

        let result = resolve(Strategy::Workspace, &ctx).unwrap();
        assert_eq!(result.source, SourceKind::WorkspaceDir);
        assert_eq!(result.folder, "site");
    }

    #[test]
    fn editor_strategy_prefers_editor_dir() {
        let mut ctx = snapshot();
        ctx.terminal_cwd = Some(CwdHint::Path(PathBuf::from("/home/alice/project-x")));
        ctx.editor_file = Some(PathBuf::from("/repo/docs/notes.md"));

        let result = resolve(Strategy::Editor, &ctx).unwrap();
        assert_eq!(result.source, SourceKind::EditorDir);
        assert_eq!(result.folder, "docs");
    }

    #[test]
    fn root_workspace_is_skipped_not_fatal() {
        // "/" has no folder name; resolution must continue down the chain
        let mut ctx = snapshot();
        ctx.workspace_roots = vec![PathBuf::from("/")];

        let result = resolve(Strategy::Workspace, &ctx).unwrap();
        assert_eq!(result.source, SourceKind::ProcessCwd);
        assert_eq!(result.folder, "build7");
    }

    #[test]
    fn whitespace_terminal_cwd_is_skipped() {
        let mut ctx = snapshot();
        ctx.terminal_cwd = Some(CwdHint::Text("   ".to_string()));
        ctx.workspace_roots = vec![PathBuf::from("/w/site")];

        let result = resolve(Strategy::Terminal, &ctx).unwrap();
        assert_eq!(result.source, SourceKind::WorkspaceDir);
    }

    #[test]
    fn hint_forms_resolve_identically() {
        let mut a = snapshot();
        a.terminal_cwd = Some(CwdHint::Path(PathBuf::from("/home/alice/project-x")));
        let mut b = snapshot();
        b.terminal_cwd = Some(CwdHint::Text("/home/alice/project-x".to_string()));

        assert_eq!(
            resolve(Strategy::Terminal, &a),
            resolve(Strategy::Terminal, &b)
        );
    }

    #[test]
    fn resolve_never_returns_empty_folder() {
        // every source except process cwd points at an unusable path
        let ctx = ContextSnapshot {
            terminal_cwd: Some(CwdHint::Text(String::new())),
            editor_file: Some(PathBuf::from("/lone")),
            workspace_roots: vec![PathBuf::from("/")],
            process_cwd: PathBuf::from("/opt/tool"),
        };
        for strategy in [Strategy::Terminal, Strategy::Workspace, Strategy::Editor] {
            let result = resolve(strategy, &ctx).unwrap();
            assert!(!result.folder.trim().is_empty());
        }
    }

    #[test]
    fn resolve_none_when_even_process_cwd_unusable() {
        let ctx = ContextSnapshot {
            process_cwd: PathBuf::from("/"),
            ..Default::default()
        };
        assert!(resolve(Strategy::Terminal, &ctx).is_none());
    }

    // --- survey ---

    #[test]
    fn survey_reports_all_four_sources() {
        let mut ctx = snapshot();
        ctx.terminal_cwd = Some(CwdHint::Path(PathBuf::from("/home/alice/project-x")));

        let report = survey(Strategy::Terminal, &ctx);
        assert_eq!(report.len(), 4);
        assert_eq!(report[0].source, SourceKind::TerminalCwd);
        assert!(report[0].folder.is_some());
        assert!(report[1].folder.is_none()); // no workspace
        assert!(report[3].folder.is_some()); // process cwd
    }

    #[test]
    fn survey_distinguishes_absent_from_rejected() {
        let mut ctx = snapshot();
        ctx.workspace_roots = vec![PathBuf::from("/")];

        let report = survey(Strategy::Workspace, &ctx);
        // workspace present but rejected
        assert!(report[0].path.is_some());
        assert!(report[0].folder.is_none());
        // editor absent entirely
        assert!(report[1].path.is_none());
    }
}
