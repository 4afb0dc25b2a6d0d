//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - The persisted settings store and first-run seeding
//! - Resolution of a run's settings from arguments or stored defaults
//! - API key handling and the OpenWeather provider
//! - Typed views over provider responses
//! - The interactive settings editor
//!
//! Nothing here exits the process; callers get a [`Error`] and decide.

pub mod api_key;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod prompt;
pub mod provider;
pub mod resolver;
pub mod settings;
pub mod store;

pub use api_key::ApiKeyFile;
pub use config::Config;
pub use editor::SettingsEditor;
pub use error::{Error, Result};
pub use model::{CurrentConditions, DailyEntry, DailyForecast, WeatherReport, WeatherRequest};
pub use prompt::Prompter;
pub use provider::{WeatherProvider, provider_from_config};
pub use resolver::{Invocation, SettingsResolver};
pub use settings::{ForecastDays, QueryMode, Settings};
pub use store::{OpenMode, SettingsStore};
