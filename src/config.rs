use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// On-disk configuration. Every key is optional; CLI flags win over
/// whatever is found here.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Config {
    /// "terminal" | "workspace" | "editor"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) strategy: Option<String>,
    /// "ERROR" | "WARN" | "INFO" | "DEBUG" | "TRACE", any case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) log_level: Option<String>,
    /// Category allow-list; ["ALL"] disables category filtering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) log_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) debounce_ms: Option<u64>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/tabname/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tabname").join("config.toml"));
        }

        // 2. macOS Application Support: ~/Library/Application Support/tabname/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("tabname").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 3. Home directory: ~/.tabname.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tabname.toml"));
        }

        paths
    }

    /// Persist to the primary config location, creating directories as
    /// needed. Used by the level and category pickers.
    pub(crate) fn save(&self) -> Result<PathBuf, AppError> {
        let path = Self::get_config_paths()
            .into_iter()
            .next()
            .ok_or(AppError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::ConfigWrite {
                path: path.clone(),
                source: e,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).map_err(|e| AppError::ConfigWrite {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}
