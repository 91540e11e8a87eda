//! Resolve-and-apply engine
//!
//! Captures a context snapshot from the host, resolves the target
//! directory, and pushes the folder name through the rename sink. Every
//! step is logged; every failure is logged and handed back as a value, so
//! nothing here can take down an event loop.

use serde_json::json;

use crate::core::{ContextSnapshot, ResolutionResult, SourceKind, Strategy, candidates};
use crate::error::RenameError;
use crate::host::{EditorProvider, ProcessEnv, RenameSink, TerminalProvider, WorkspaceProvider};
use crate::logger::{DiagLogger, LogCategory, LogLevel};

pub(crate) struct Engine<'a> {
    pub(crate) strategy: Strategy,
    pub(crate) terminal: &'a dyn TerminalProvider,
    pub(crate) editor: &'a dyn EditorProvider,
    pub(crate) workspace: &'a dyn WorkspaceProvider,
    pub(crate) process: &'a dyn ProcessEnv,
    pub(crate) sink: &'a dyn RenameSink,
}

fn source_category(kind: SourceKind) -> LogCategory {
    match kind {
        SourceKind::TerminalCwd => LogCategory::Terminal,
        SourceKind::WorkspaceDir => LogCategory::Workspace,
        SourceKind::EditorDir => LogCategory::Editor,
        SourceKind::ProcessCwd => LogCategory::Env,
    }
}

impl Engine<'_> {
    /// Read the providers once, right before resolving
    pub(crate) fn capture(&self, logger: &DiagLogger) -> ContextSnapshot {
        let process_cwd = self.process.cwd();
        logger.trace(
            LogCategory::Env,
            &format!("process cwd: {}", process_cwd.display()),
        );

        let workspace_roots = self.workspace.roots();
        match workspace_roots.first() {
            Some(first) => logger.debug(
                LogCategory::Workspace,
                &format!(
                    "{} workspace folder(s), first: {}",
                    workspace_roots.len(),
                    first.display()
                ),
            ),
            None => logger.warn(LogCategory::Workspace, "no workspace folder open"),
        }

        let editor_file = self.editor.active_file();
        match &editor_file {
            Some(file) => logger.debug(
                LogCategory::Editor,
                &format!(
                    "active editor file: {}, dir: {}",
                    file.display(),
                    file.parent().unwrap_or(file).display()
                ),
            ),
            None => logger.debug(LogCategory::Editor, "no active editor"),
        }

        let terminal_cwd = self.terminal.launch_cwd();
        match &terminal_cwd {
            Some(hint) => logger.debug(
                LogCategory::Terminal,
                &format!("terminal launch dir: {}", hint.to_path().display()),
            ),
            None => logger.debug(LogCategory::Terminal, "terminal launch dir unknown"),
        }
        if let Some(pid) = self.terminal.process_id() {
            logger.trace(LogCategory::Terminal, &format!("terminal shell pid: {pid}"));
        }

        ContextSnapshot {
            terminal_cwd,
            editor_file,
            workspace_roots,
            process_cwd,
        }
    }

    fn try_rename(&self, logger: &DiagLogger) -> Result<ResolutionResult, RenameError> {
        let old_name = self
            .terminal
            .active_name()
            .ok_or(RenameError::NoActiveTerminal)?;
        logger.trace(
            LogCategory::Terminal,
            &format!("active terminal: {old_name}"),
        );
        let ctx = self.capture(logger);
        logger.debug(LogCategory::Config, &format!("strategy: {}", self.strategy));

        let mut attempted = Vec::new();
        let mut resolved = None;
        for candidate in candidates(self.strategy, &ctx) {
            let category = source_category(candidate.source);
            match (candidate.path, candidate.folder) {
                (None, _) => {
                    logger.debug(category, &format!("{}: not available", candidate.source));
                    attempted.push(json!({
                        "source": candidate.source.label(),
                        "path": null,
                    }));
                }
                (Some(path), None) => {
                    logger.debug(
                        category,
                        &format!(
                            "{}: empty folder name at {}, skipping",
                            candidate.source,
                            path.display()
                        ),
                    );
                    attempted.push(json!({
                        "source": candidate.source.label(),
                        "path": path.display().to_string(),
                    }));
                }
                (Some(path), Some(folder)) => {
                    resolved = Some(ResolutionResult {
                        path,
                        source: candidate.source,
                        folder,
                    });
                    break;
                }
            }
        }

        let Some(result) = resolved else {
            let err = RenameError::NotFound {
                strategy: self.strategy,
            };
            logger.log(
                LogLevel::Error,
                LogCategory::Rename,
                &err.to_string(),
                Some(&json!({ "attempted": attempted })),
            );
            return Err(err);
        };
        logger.log(
            LogLevel::Info,
            LogCategory::Rename,
            &format!("resolved \"{}\" from {}", result.folder, result.source),
            Some(&json!({
                "path": result.path.display().to_string(),
                "source": result.source.label(),
                "folder": result.folder,
            })),
        );

        self.sink.apply(&result.folder)?;
        logger.log(
            LogLevel::Info,
            LogCategory::Rename,
            &format!("renamed terminal \"{old_name}\" -> \"{}\"", result.folder),
            Some(&json!({
                "from": old_name,
                "to": result.folder,
                "source": result.source.label(),
            })),
        );
        Ok(result)
    }

    /// One rename attempt. Failures come back as values with the logging
    /// already done, so callers are free to ignore them.
    pub(crate) fn rename_to_dir(&self, logger: &DiagLogger) -> Result<ResolutionResult, RenameError> {
        self.try_rename(logger).inspect_err(|e| match e {
            RenameError::NoActiveTerminal => logger.warn(LogCategory::Terminal, &e.to_string()),
            // NotFound is logged at the resolution site, with the attempted paths
            RenameError::NotFound { .. } => {}
            RenameError::Unexpected(_) => logger.error(LogCategory::Rename, &e.to_string()),
        })
    }
}
