/// Greppable token prefixed to every diagnostic line: "🔄 TABNAME ..."
pub(crate) const LOG_PREFIX: &str = "🔄 TABNAME";

/// Delay between a terminal-opened event and the rename attempt, in milliseconds
pub(crate) const DEFAULT_DEBOUNCE_MS: u64 = 400;
