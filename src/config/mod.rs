//! Configuration management

use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::charts::ChartConfig;
use crate::page::PageConfig;
use crate::theme::{Theme, ThemeToggleConfig};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the JSON payloads; platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// wasm-bindgen output served under /pkg
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: PathBuf,

    /// Theme the page is served with before the user picks one
    #[serde(default)]
    pub default_theme: Theme,

    #[serde(default)]
    pub theme: ThemeToggleConfig,

    #[serde(default)]
    pub charts: ChartConfig,
}

fn default_port() -> u16 {
    8090
}

fn default_pkg_dir() -> PathBuf {
    PathBuf::from("pkg")
}

impl Config {
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(get_data_dir)
    }

    /// Subset of the config the browser needs
    pub fn page_config(&self) -> PageConfig {
        PageConfig {
            theme: self.theme.clone(),
            charts: self.charts.clone(),
        }
    }
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CGA_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/caregiving-analytics");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("caregiving-analytics");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/caregiving-analytics");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("caregiving-analytics");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Get data directory (XDG_DATA_HOME or platform default)
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CGA_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/caregiving-analytics");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("caregiving-analytics");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/caregiving-analytics");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("LOCALAPPDATA") {
            return PathBuf::from(appdata).join("caregiving-analytics");
        }
    }

    // Fallback to ./data
    PathBuf::from("./data")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (CGA_DEFAULT_THEME, CGA_CHARTS__CALENDAR_YEAR, etc.)
        .add_source(
            ::config::Environment::with_prefix("CGA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: CGA_PORT > PORT > config > default
    if let Ok(port) = std::env::var("CGA_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    config.theme.validate()?;

    Ok(config)
}
