//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rename the terminal tab once and exit (default)
    Rename,
    /// Evaluate every candidate directory in strategy order
    Probe,
    /// Watch stdin for terminal events and rename with debouncing
    Watch,
    /// Set the diagnostic level and save it to the config file
    SetLevel {
        /// Level name (any case); prompts interactively when omitted
        level: Option<String>,
    },
    /// Set the diagnostic category allow-list and save it to the config file
    SetCategories {
        /// Category names; prompts interactively when omitted
        categories: Vec<String>,
    },
    /// Show how to isolate this tool's log lines in a shared stream
    FilterTip,
}

impl Commands {
    /// True for commands whose stdout must stay machine-clean
    pub(crate) fn wants_quiet_config(&self) -> bool {
        matches!(self, Commands::Probe | Commands::Watch)
    }
}
