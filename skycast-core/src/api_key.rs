use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    error::{Error, Result},
    prompt::Prompter,
};

/// Where new users can sign up for a key.
pub const SIGNUP_URL: &str = "http://openweathermap.org/appid";

/// Environment variable that takes precedence over the key file.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Reads the OpenWeather key from a plaintext file, asking the user for one
/// when the file can't be used.
#[derive(Debug, Clone)]
pub struct ApiKeyFile {
    path: PathBuf,
}

impl ApiKeyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        let key = fs::read_to_string(&self.path).map_err(|source| Error::KeyFile {
            path: self.path.clone(),
            source,
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(key.to_string())
    }

    /// Write `key` verbatim, creating parent directories as needed.
    pub fn save(&self, key: &str) -> Result<()> {
        let io_err = |source| Error::KeyFile {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&self.path, key).map_err(io_err)?;

        info!(path = %self.path.display(), "saved API key");
        Ok(())
    }

    /// Key from `env_key` if set, else the file, else the prompt.
    pub fn obtain(&self, env_key: Option<String>, prompter: &dyn Prompter) -> Result<String> {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            return Ok(key.trim().to_string());
        }

        match self.read() {
            Ok(key) => Ok(key),
            Err(err) => {
                warn!(error = %err, "could not read API key file");
                self.prompt_initial_key(prompter)
            }
        }
    }

    fn prompt_initial_key(&self, prompter: &dyn Prompter) -> Result<String> {
        let key = prompter.ask(
            "Please enter your OpenWeather API key\nIf you don't have a key, hit ENTER",
        )?;

        if !key.is_empty() {
            self.save(&key)?;
            return Ok(key);
        }

        prompter.say("An API key is required to fetch weather data");
        if prompter.confirm("Go to website to obtain key?")? {
            prompter.open_url(SIGNUP_URL)?;
        }

        Err(Error::MissingApiKey)
    }
}
