//! Display preferences read from `hoptrace.ron`.
//!
//! The file only affects presentation; it never changes how links are traced.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use engine_logging::{engine_debug, engine_info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "hoptrace.ron";
pub const DEFAULT_WIDTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_json: bool,
    pub always_terse: bool,
    pub always_verbose: bool,
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_json: false,
            always_terse: false,
            always_verbose: false,
            width: DEFAULT_WIDTH,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Load from the default location, falling back to defaults when no file exists.
pub fn load_default() -> Result<DisplayConfig, ConfigError> {
    let Some(path) = config_path(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir()) else {
        engine_debug!("No config directory available, using default display settings");
        return Ok(DisplayConfig::default());
    };
    if !path.exists() {
        engine_debug!("No config file at {:?}, using default display settings", path);
        return Ok(DisplayConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<DisplayConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: DisplayConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if config.width == 0 {
        config.width = DEFAULT_WIDTH;
    }
    engine_info!("Loaded display settings from {:?}", path);
    Ok(config)
}

/// `$XDG_CONFIG_HOME/hoptrace.ron`, else `~/.config/hoptrace.ron`.
pub fn config_path(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let dir = match xdg_config_home.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home?.join(".config"),
    };
    Some(dir.join(CONFIG_FILENAME))
}
