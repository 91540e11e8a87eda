//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::consts::DEFAULT_DEBOUNCE_MS;
use crate::core::Strategy;
use crate::error::AppError;
use crate::host::LocalOverrides;
use crate::logger::LogLevel;

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "tabname")]
#[command(about = "Rename the terminal tab after the directory you are working in", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory source preference
    #[arg(short, long, global = true, value_enum, ignore_case = true)]
    pub(crate) strategy: Option<Strategy>,

    /// Diagnostic verbosity
    #[arg(short = 'l', long, global = true, value_enum, ignore_case = true)]
    pub(crate) log_level: Option<LogLevel>,

    /// Diagnostic categories to keep, comma separated (ALL disables filtering)
    #[arg(long, global = true, value_delimiter = ',', value_name = "NAMES")]
    pub(crate) log_categories: Option<Vec<String>>,

    /// Debounce window for watch mode, in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub(crate) debounce_ms: Option<u64>,

    /// Launch directory of the terminal (plain path or file:// URI)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) terminal_cwd: Option<String>,

    /// File open in the active editor
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) editor_file: Option<PathBuf>,

    /// Workspace root folder (repeatable; the first one counts)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) workspace_root: Vec<PathBuf>,

    /// Print the would-be rename instead of changing the terminal title
    #[arg(short = 'n', long, global = true)]
    pub(crate) dry_run: bool,

    /// Only emit ERROR diagnostics
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Output as JSON (probe)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Result<Self, AppError> {
        if self.strategy.is_none()
            && let Some(name) = &config.strategy
        {
            self.strategy = Some(Strategy::parse(name)?);
        }
        if self.log_level.is_none()
            && let Some(name) = &config.log_level
        {
            self.log_level = Some(LogLevel::parse(name)?);
        }
        if self.log_categories.is_none() {
            self.log_categories = config.log_categories.clone();
        }
        if self.debounce_ms.is_none() {
            self.debounce_ms = config.debounce_ms;
        }
        Ok(self)
    }

    pub(crate) fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or_default()
    }

    /// Level after applying --quiet
    pub(crate) fn effective_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else {
            self.log_level.unwrap_or_default()
        }
    }

    pub(crate) fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS))
    }

    /// Context pieces handed to the local host
    pub(crate) fn overrides(&self) -> LocalOverrides {
        LocalOverrides {
            terminal_cwd: self.terminal_cwd.clone(),
            editor_file: self.editor_file.clone(),
            workspace_roots: self.workspace_root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn config_fills_unset_flags() {
        let cli = parse(&["tabname"]);
        let config = Config {
            strategy: Some("workspace".to_string()),
            log_level: Some("debug".to_string()),
            log_categories: Some(vec!["RENAME".to_string()]),
            debounce_ms: Some(250),
        };
        let merged = cli.with_config(&config).unwrap();
        assert_eq!(merged.strategy(), Strategy::Workspace);
        assert_eq!(merged.effective_level(), LogLevel::Debug);
        assert_eq!(merged.log_categories, Some(vec!["RENAME".to_string()]));
        assert_eq!(merged.debounce_window(), Duration::from_millis(250));
    }

    #[test]
    fn cli_flags_beat_config_values() {
        let cli = parse(&["tabname", "--strategy", "editor", "--log-level", "trace"]);
        let config = Config {
            strategy: Some("workspace".to_string()),
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        let merged = cli.with_config(&config).unwrap();
        assert_eq!(merged.strategy(), Strategy::Editor);
        assert_eq!(merged.effective_level(), LogLevel::Trace);
    }

    #[test]
    fn bad_config_strategy_is_an_error() {
        let cli = parse(&["tabname"]);
        let config = Config {
            strategy: Some("git".to_string()),
            ..Default::default()
        };
        assert!(cli.with_config(&config).is_err());
    }

    #[test]
    fn quiet_forces_error_level() {
        let cli = parse(&["tabname", "--quiet", "--log-level", "trace"]);
        assert_eq!(cli.effective_level(), LogLevel::Error);
    }

    #[test]
    fn defaults_without_flags_or_config() {
        let cli = parse(&["tabname"]);
        assert_eq!(cli.strategy(), Strategy::Terminal);
        assert_eq!(cli.effective_level(), LogLevel::Info);
        assert_eq!(
            cli.debounce_window(),
            Duration::from_millis(DEFAULT_DEBOUNCE_MS)
        );
    }

    #[test]
    fn category_list_splits_on_commas() {
        let cli = parse(&["tabname", "--log-categories", "RENAME,TERMINAL"]);
        assert_eq!(
            cli.log_categories,
            Some(vec!["RENAME".to_string(), "TERMINAL".to_string()])
        );
    }
}
