//! Diagnostic severities
//!
//! Five ordered levels, most severe first. A configured level admits
//! itself and everything more severe, so `Warn` keeps errors and warnings
//! and mutes the rest.

use std::fmt;

use clap::ValueEnum;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    /// Failures only
    Error,
    /// Failures and warnings
    Warn,
    /// Normal operation (default)
    #[default]
    Info,
    /// Resolution internals
    Debug,
    /// Everything, including environment dumps
    Trace,
}

impl LogLevel {
    pub(crate) const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Icon shown between the prefix and the timestamp
    pub(crate) fn icon(self) -> &'static str {
        match self {
            LogLevel::Error => "❌",
            LogLevel::Warn => "⚠️",
            LogLevel::Info => "ℹ️",
            LogLevel::Debug => "🐛",
            LogLevel::Trace => "🔍",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim().to_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(AppError::InvalidLogLevel {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
