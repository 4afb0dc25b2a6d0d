use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::settings::MAX_FORECAST_DAYS;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the core library can report.
///
/// Nothing in this crate terminates the process; the binary decides how each
/// variant maps to an exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of positional arguments.
    #[error("expected no arguments or exactly three (location, mode, days), got {0}")]
    Usage(usize),

    #[error("'{0}' is not a valid query mode. Supported modes: current, forecast.")]
    InvalidMode(String),

    #[error("'{0}' is not a valid number of forecast days (expected 1..={max})", max = MAX_FORECAST_DAYS)]
    InvalidDays(String),

    /// A stored setting is missing or has the wrong shape.
    #[error("setting '{key}' is invalid: {reason}")]
    InvalidSetting { key: String, reason: String },

    #[error("an OpenWeather API key is required to fetch weather data")]
    MissingApiKey,

    #[error("request to the weather provider failed")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider returned {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("malformed weather response: {0}")]
    MalformedResponse(String),

    #[error("failed to access settings store {}", path.display())]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings store {}", path.display())]
    StoreParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize setting '{key}'")]
    StoreSerialize {
        key: String,
        #[source]
        source: toml::ser::Error,
    },

    #[error("settings store {} was opened read-only", path.display())]
    ReadOnlyStore { path: PathBuf },

    #[error("failed to access API key file {}", path.display())]
    KeyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}
