pub mod theme;

use crate::{constants::APP_NAME, constants::DEFAULT_DEBOUNCE_MS, paths::expand_tilde, platform};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub use theme::{NamedColor, ThemeColor, ThemeConfig};

pub fn config_dir() -> PathBuf {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config_home.is_empty()
        {
            return PathBuf::from(xdg_config_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".config")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .expect("Unable to find config directory")
            .join(APP_NAME)
    }
}

pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

pub const DEFAULT_SEARCH_DEPTH: u16 = 3;
pub const DEFAULT_EDITOR: &str = "nvim";
pub const DEFAULT_SEARCH_DIRS: &[&str] = &["~/dev", "~/projects", "~/repos", "~/workspaces"];

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum SearchDirEntry {
    Simple(String),
    Rich {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        depth: Option<u16>,
    },
}

impl SearchDirEntry {
    pub fn path(&self) -> &str {
        match self {
            Self::Simple(path) | Self::Rich { path, .. } => path,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Command used to open the chosen repository. May include arguments,
    /// e.g. `"code -n"`. Defaults to `$EDITOR`, then `nvim`.
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Directories to scan for git repositories, each to an optional depth
    /// (default 3). Supports `~` for the home directory:
    /// ```toml
    /// search_dirs = ["~/dev", { path = "~/work", depth = 1 }]
    /// ```
    pub search_dirs: Vec<SearchDirEntry>,

    /// File manager command. Detected per platform when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_manager: Option<String>,

    /// Terminal command. Detected per platform when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,

    #[serde(default)]
    pub status: StatusConfig,

    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct StatusConfig {
    /// Delay between highlighting a repository and fetching its status.
    #[serde(default = "StatusConfig::default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Self::default_debounce_ms(),
        }
    }
}

impl StatusConfig {
    fn default_debounce_ms() -> u64 {
        DEFAULT_DEBOUNCE_MS
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            search_dirs: DEFAULT_SEARCH_DIRS
                .iter()
                .map(|dir| SearchDirEntry::Simple((*dir).to_string()))
                .collect(),
            file_manager: None,
            terminal: None,
            status: StatusConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Search dirs with `~` expanded; entries that are not directories are dropped
    pub fn resolved_search_dirs(&self) -> Vec<(PathBuf, u16)> {
        self.search_dirs
            .iter()
            .filter_map(|entry| {
                let depth = match entry {
                    SearchDirEntry::Simple(_) => DEFAULT_SEARCH_DEPTH,
                    SearchDirEntry::Rich { depth, .. } => depth.unwrap_or(DEFAULT_SEARCH_DEPTH),
                };
                let resolved = expand_tilde(entry.path())?;
                if resolved.is_dir() {
                    Some((resolved, depth))
                } else {
                    log::debug!("search dir {} does not exist", resolved.display());
                    None
                }
            })
            .collect()
    }

    pub fn file_manager_command(&self) -> Option<String> {
        self.file_manager
            .clone()
            .filter(|cmd| !cmd.trim().is_empty())
            .or_else(platform::detect_file_manager)
    }

    pub fn terminal_command(&self) -> Option<String> {
        self.terminal
            .clone()
            .filter(|cmd| !cmd.trim().is_empty())
            .or_else(platform::detect_terminal)
    }
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let config_file = match config_override {
        Some(path) => path.to_path_buf(),
        None => config_file(),
    };
    if !config_file.exists() {
        anyhow::bail!("Config file not found at {}", config_file.display());
    }
    let contents = fs::read_to_string(&config_file)?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("invalid config at {}", config_file.display()))?;
    Ok(config)
}

pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string(config)?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    Ok(())
}
