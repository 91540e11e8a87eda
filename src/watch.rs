//! Debounced event loop
//!
//! `tabname watch` consumes line events from stdin and renames after the
//! debounce window settles. A reader thread pumps stdin into a channel;
//! the loop itself owns every piece of mutable state, so there is no
//! locking anywhere.
//!
//! Event grammar, one event per line:
//!
//! ```text
//! open [NAME] [CWD]     terminal opened; schedules a debounced rename
//! switch [NAME]         active terminal changed; logged only
//! rename                rename immediately
//! set-level LEVEL       change diagnostic level for this session
//! set-categories A,B    change diagnostic categories for this session
//! tip                   print the log filter tip
//! quit                  stop watching
//! ```

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::{CwdHint, DebounceState, Strategy};
use crate::engine::Engine;
use crate::host::{
    EditorProvider, LocalHost, ProcessEnv, RenameSink, TerminalProvider, WorkspaceProvider,
};
use crate::logger::{DiagLogger, LogCategory};

struct ActiveTerminal {
    name: String,
    cwd: Option<CwdHint>,
}

/// Base host plus the terminal state driven by the event stream
struct WatchSession<H> {
    base: H,
    active: Option<ActiveTerminal>,
}

impl<H: TerminalProvider> TerminalProvider for WatchSession<H> {
    fn active_name(&self) -> Option<String> {
        self.active.as_ref().map(|t| t.name.clone())
    }

    fn launch_cwd(&self) -> Option<CwdHint> {
        self.active
            .as_ref()
            .and_then(|t| t.cwd.clone())
            .or_else(|| self.base.launch_cwd())
    }

    fn process_id(&self) -> Option<u32> {
        self.base.process_id()
    }
}

impl<H: EditorProvider> EditorProvider for WatchSession<H> {
    fn active_file(&self) -> Option<std::path::PathBuf> {
        self.base.active_file()
    }
}

impl<H: WorkspaceProvider> WorkspaceProvider for WatchSession<H> {
    fn roots(&self) -> Vec<std::path::PathBuf> {
        self.base.roots()
    }
}

impl<H: ProcessEnv> ProcessEnv for WatchSession<H> {
    fn cwd(&self) -> std::path::PathBuf {
        self.base.cwd()
    }
}

/// Watch stdin until EOF or a `quit` event
pub(crate) fn run(
    base: LocalHost,
    strategy: Strategy,
    window: Duration,
    logger: &mut DiagLogger,
    sink: &dyn RenameSink,
) {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    run_loop(base, strategy, window, logger, sink, rx);
}

fn engine<'a, H>(session: &'a WatchSession<H>, strategy: Strategy, sink: &'a dyn RenameSink) -> Engine<'a>
where
    H: TerminalProvider + EditorProvider + WorkspaceProvider + ProcessEnv,
{
    Engine {
        strategy,
        terminal: session,
        editor: session,
        workspace: session,
        process: session,
        sink,
    }
}

fn run_loop<H>(
    base: H,
    strategy: Strategy,
    window: Duration,
    logger: &mut DiagLogger,
    sink: &dyn RenameSink,
    rx: Receiver<String>,
) where
    H: TerminalProvider + EditorProvider + WorkspaceProvider + ProcessEnv,
{
    let mut session = WatchSession {
        active: base
            .active_name()
            .map(|name| ActiveTerminal { name, cwd: None }),
        base,
    };
    let mut debounce = DebounceState::new(window);

    logger.show_filter_tip();
    logger.info(LogCategory::Startup, "watching terminal events on stdin");
    if session.active.is_some() {
        logger.info(LogCategory::Startup, "terminal already active, renaming now");
        let _ = engine(&session, strategy, sink).rename_to_dir(logger);
    }

    loop {
        let line = match debounce.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(line) => Some(line),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(line) => Some(line),
                Err(_) => break,
            },
        };

        match line {
            // debounce window elapsed; context is captured now, at fire time
            None => {
                if debounce.fire_due(Instant::now()) {
                    let _ = engine(&session, strategy, sink).rename_to_dir(logger);
                }
            }
            Some(line) => {
                if !handle_line(&line, &mut session, &mut debounce, strategy, sink, logger) {
                    break;
                }
            }
        }
    }
}

/// Apply one event line; false means stop watching
fn handle_line<H>(
    line: &str,
    session: &mut WatchSession<H>,
    debounce: &mut DebounceState,
    strategy: Strategy,
    sink: &dyn RenameSink,
    logger: &mut DiagLogger,
) -> bool
where
    H: TerminalProvider + EditorProvider + WorkspaceProvider + ProcessEnv,
{
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return true;
    };
    match word {
        "open" => {
            let name = parts.next().unwrap_or("terminal").to_string();
            let cwd = parts.next().map(|s| CwdHint::Text(s.to_string()));
            logger.info(LogCategory::Terminal, &format!("terminal opened: {name}"));
            session.active = Some(ActiveTerminal { name, cwd });
            debounce.schedule(Instant::now());
        }
        "switch" => match parts.next() {
            Some(name) => {
                logger.info(
                    LogCategory::Terminal,
                    &format!("active terminal changed: {name}"),
                );
                session.active = Some(ActiveTerminal {
                    name: name.to_string(),
                    cwd: None,
                });
            }
            None => {
                logger.info(LogCategory::Terminal, "active terminal changed: none");
                session.active = None;
            }
        },
        "rename" => {
            let _ = engine(session, strategy, sink).rename_to_dir(logger);
        }
        "set-level" => match parts.next() {
            Some(name) => match logger.set_level_name(name) {
                Ok(level) => {
                    logger.info(LogCategory::Config, &format!("log level set to {level}"));
                }
                Err(e) => logger.error(LogCategory::Config, &e.to_string()),
            },
            None => logger.error(LogCategory::Config, "set-level needs a level name"),
        },
        "set-categories" => {
            let names: Vec<String> = parts
                .flat_map(|token| token.split(','))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                logger.error(LogCategory::Config, "set-categories needs at least one name");
            } else {
                logger.set_categories(&names);
                logger.info(
                    LogCategory::Config,
                    &format!("log categories: {}", logger.categories().join(", ")),
                );
            }
        }
        "tip" => logger.show_filter_tip(),
        "quit" | "exit" => return false,
        other => {
            logger.warn(LogCategory::Terminal, &format!("unknown event \"{other}\""));
        }
    }
    true
}
