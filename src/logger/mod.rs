//! Diagnostics logger
//!
//! Leveled, category-filtered logging for every resolution decision. Each
//! line starts with a fixed greppable token so the output survives being
//! mixed into a busy stream. Filtering is observability only and never
//! changes what the engine does.

mod level;
mod sink;

use std::fmt;

use chrono::Local;
use serde_json::Value;

use crate::consts::LOG_PREFIX;
use crate::error::AppError;

pub(crate) use level::LogLevel;
#[cfg(test)]
pub(crate) use sink::BufferSink;
pub(crate) use sink::{LogSink, StderrSink};

const DATA_ICON: &str = "📊";
const TIP_ICON: &str = "💡";

/// Marker that disables category filtering
pub(crate) const CATEGORY_ALL: &str = "ALL";

/// Categories a record can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogCategory {
    Startup,
    Rename,
    Terminal,
    Workspace,
    Editor,
    Env,
    Config,
    Probe,
}

impl LogCategory {
    pub(crate) const KNOWN: [LogCategory; 8] = [
        LogCategory::Startup,
        LogCategory::Rename,
        LogCategory::Terminal,
        LogCategory::Workspace,
        LogCategory::Editor,
        LogCategory::Env,
        LogCategory::Config,
        LogCategory::Probe,
    ];

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LogCategory::Startup => "STARTUP",
            LogCategory::Rename => "RENAME",
            LogCategory::Terminal => "TERMINAL",
            LogCategory::Workspace => "WORKSPACE",
            LogCategory::Editor => "EDITOR",
            LogCategory::Env => "ENV",
            LogCategory::Config => "CONFIG",
            LogCategory::Probe => "PROBE",
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter settings owned by the logger instance
#[derive(Debug, Clone)]
pub(crate) struct LoggerConfig {
    pub(crate) level: LogLevel,
    /// Upper-cased category names; contains [`CATEGORY_ALL`] by default
    pub(crate) categories: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            level: LogLevel::Info,
            categories: vec![CATEGORY_ALL.to_string()],
        }
    }
}

/// One emitted diagnostic
#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub(crate) level: LogLevel,
    pub(crate) category: String,
    pub(crate) message: String,
    /// Local wall-clock time, `HH:MM:SS.mmm`
    pub(crate) timestamp: String,
    pub(crate) data: Option<Value>,
}

impl LogRecord {
    fn format(&self) -> String {
        format!(
            "{LOG_PREFIX} {} [{}] [{}] [{}] {}",
            self.level.icon(),
            self.timestamp,
            self.level.label(),
            self.category,
            self.message
        )
    }

    fn format_data(data: &Value) -> String {
        let pretty =
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
        format!("{LOG_PREFIX} {DATA_ICON} data: {pretty}")
    }
}

pub(crate) struct DiagLogger {
    config: LoggerConfig,
    sink: Box<dyn LogSink>,
}

impl DiagLogger {
    pub(crate) fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, Box::new(StderrSink))
    }

    pub(crate) fn with_sink(config: LoggerConfig, sink: Box<dyn LogSink>) -> Self {
        DiagLogger { config, sink }
    }

    pub(crate) fn level(&self) -> LogLevel {
        self.config.level
    }

    pub(crate) fn categories(&self) -> &[String] {
        &self.config.categories
    }

    pub(crate) fn set_level(&mut self, level: LogLevel) {
        self.config.level = level;
    }

    /// Textual variant of [`set_level`], case-insensitive
    pub(crate) fn set_level_name(&mut self, name: &str) -> Result<LogLevel, AppError> {
        let level = LogLevel::parse(name)?;
        self.set_level(level);
        Ok(level)
    }

    /// Replace the category allow-list. Names are upper-cased on entry;
    /// a list containing [`CATEGORY_ALL`] passes every category.
    pub(crate) fn set_categories<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.categories = categories
            .into_iter()
            .map(|c| c.as_ref().trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .collect();
    }

    fn enabled(&self, level: LogLevel, category: LogCategory) -> bool {
        if level > self.config.level {
            return false;
        }
        self.config
            .categories
            .iter()
            .any(|c| c == CATEGORY_ALL || c == category.as_str())
    }

    pub(crate) fn log(
        &self,
        level: LogLevel,
        category: LogCategory,
        message: &str,
        data: Option<&Value>,
    ) {
        if !self.enabled(level, category) {
            return;
        }
        let record = LogRecord {
            level,
            category: category.as_str().to_string(),
            message: message.to_string(),
            timestamp: Local::now().format("%H:%M:%S%.3f").to_string(),
            data: data.cloned(),
        };
        self.sink.write(&record.format());
        if let Some(data) = &record.data {
            self.sink.write(&LogRecord::format_data(data));
        }
    }

    pub(crate) fn error(&self, category: LogCategory, message: &str) {
        self.log(LogLevel::Error, category, message, None);
    }

    pub(crate) fn warn(&self, category: LogCategory, message: &str) {
        self.log(LogLevel::Warn, category, message, None);
    }

    pub(crate) fn info(&self, category: LogCategory, message: &str) {
        self.log(LogLevel::Info, category, message, None);
    }

    pub(crate) fn debug(&self, category: LogCategory, message: &str) {
        self.log(LogLevel::Debug, category, message, None);
    }

    pub(crate) fn trace(&self, category: LogCategory, message: &str) {
        self.log(LogLevel::Trace, category, message, None);
    }

    /// Static guidance for isolating this tool's lines in a shared stream.
    /// Bypasses level and category filters.
    pub(crate) fn show_filter_tip(&self) {
        self.sink.write(&format!("{LOG_PREFIX} {TIP_ICON} log filter tips:"));
        self.sink.write(&format!(
            "{LOG_PREFIX} {TIP_ICON} every diagnostic line carries the \"{LOG_PREFIX}\" prefix"
        ));
        self.sink.write(&format!(
            "{LOG_PREFIX} {TIP_ICON} isolate them with: grep TABNAME"
        ));
        self.sink.write(&format!(
            "{LOG_PREFIX} {TIP_ICON} narrow by tag: grep \"\\[ERROR]\" or grep \"\\[RENAME]\""
        ));
        self.sink.write(&format!("{LOG_PREFIX} ═════════════════════════════"));
    }
}
