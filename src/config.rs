//! Host configuration: an optional TOML file selected by the environment.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV: &str = "GAMEHOST_CONFIG";

/// Fallback config file looked up in the working directory.
pub const CONFIG_FILE: &str = "gamehost.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the walk. Fixed seed, fixed walk.
    pub seed: u64,
    /// Simulation ticks per second.
    pub tick_hz: u32,
    /// The run ends after this many steps if the skeleton has not escaped.
    pub max_steps: u64,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            seed: 0,
            tick_hz: 30,
            max_steps: 600,
        }
    }
}

impl HostConfig {
    /// Loads the file named by `GAMEHOST_CONFIG`, else `gamehost.toml` in
    /// the working directory if present, else the built-in defaults.
    ///
    /// A file named explicitly through the environment must exist; a
    /// missing fallback file is not an error.
    pub fn load() -> Result<HostConfig, ConfigError> {
        HostConfig::select(
            std::env::var_os(CONFIG_ENV).as_deref(),
            Path::new(CONFIG_FILE),
        )
    }

    fn select(named: Option<&OsStr>, fallback: &Path) -> Result<HostConfig, ConfigError> {
        if let Some(path) = named {
            return HostConfig::from_path(Path::new(path));
        }

        if fallback.exists() {
            return HostConfig::from_path(fallback);
        }

        Ok(HostConfig::default())
    }

    pub fn from_path(path: &Path) -> Result<HostConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}
