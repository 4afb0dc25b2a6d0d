use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    provider::openweather::DEFAULT_BASE_URL,
};

const SETTINGS_FILE: &str = "settings.toml";
const KEY_FILE: &str = "key.txt";

/// Application configuration read from `config.toml`.
///
/// Example TOML:
/// api_base_url = "http://api.openweathermap.org"
/// data_dir = "/home/me/.skycast"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,

    /// Directory holding the settings store and key file. Defaults to the
    /// platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|err| {
            Error::Config(format!("failed to read {}: {err}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|err| Error::Config(format!("failed to parse {}: {err}", path.display())))
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(project_dirs()?.data_dir().to_path_buf()),
        }
    }

    pub fn settings_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(SETTINGS_FILE))
    }

    pub fn key_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(KEY_FILE))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "skycast", "skycast")
        .ok_or_else(|| Error::Config("could not determine platform directories".to_string()))
}
