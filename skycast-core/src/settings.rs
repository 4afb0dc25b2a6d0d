use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Store key holding the number of days to forecast.
pub const DAYS_KEY: &str = "daysInForecast";
/// Store key holding the query location.
pub const LOCATION_KEY: &str = "location";
/// Store key holding the query mode and its options.
pub const QUERY_MODE_KEY: &str = "queryMode";

/// The daily forecast endpoint serves at most this many days.
pub const MAX_FORECAST_DAYS: u8 = 16;

pub const DEFAULT_FORECAST_DAYS: u8 = 7;
pub const DEFAULT_LOCATION: &str = "Martin, TN";
pub const DEFAULT_QUERY_MODE: QueryMode = QueryMode::Forecast;

/// Which report the provider is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Current,
    Forecast,
}

impl QueryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Current => "current",
            QueryMode::Forecast => "forecast",
        }
    }

    /// Options in the order they are offered to the user.
    pub const fn all() -> &'static [QueryMode] {
        &[QueryMode::Forecast, QueryMode::Current]
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "current" => Ok(QueryMode::Current),
            "forecast" => Ok(QueryMode::Forecast),
            _ => Err(Error::InvalidMode(value.to_string())),
        }
    }
}

/// Number of forecast days, always within `1..=MAX_FORECAST_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastDays(u8);

impl ForecastDays {
    pub fn new(days: i64) -> Result<Self> {
        match u8::try_from(days) {
            Ok(d) if (1..=MAX_FORECAST_DAYS).contains(&d) => Ok(Self(d)),
            _ => Err(Error::InvalidDays(days.to_string())),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ForecastDays {
    fn default() -> Self {
        Self(DEFAULT_FORECAST_DAYS)
    }
}

impl fmt::Display for ForecastDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ForecastDays {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let days: i64 = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDays(value.to_string()))?;
        Self::new(days).map_err(|_| Error::InvalidDays(value.to_string()))
    }
}

/// Stored shape of the `queryMode` entry.
///
/// `value` is kept as a raw string so a hand-edited store still loads and the
/// bad value can be reported by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryModeSetting {
    pub value: String,
    pub options: Vec<String>,
}

impl QueryModeSetting {
    pub fn new(mode: QueryMode) -> Self {
        Self {
            value: mode.as_str().to_string(),
            options: QueryMode::all().iter().map(|m| m.as_str().to_string()).collect(),
        }
    }

    pub fn mode(&self) -> Result<QueryMode> {
        self.value.parse()
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        self.options.iter().any(|o| o == candidate)
    }
}

impl Default for QueryModeSetting {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_MODE)
    }
}

/// The effective configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub location: String,
    pub mode: QueryMode,
    pub forecast_days: ForecastDays,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            mode: DEFAULT_QUERY_MODE,
            forecast_days: ForecastDays::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_mode_as_str_roundtrip() {
        for mode in QueryMode::all() {
            let parsed: QueryMode = mode.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*mode, parsed);
        }
    }

    #[test]
    fn unknown_query_mode_names_the_value() {
        let err = "hourly".parse::<QueryMode>().unwrap_err();
        assert!(matches!(err, Error::InvalidMode(ref m) if m == "hourly"));
        assert!(err.to_string().contains("'hourly'"));
    }

    #[test]
    fn query_mode_is_case_sensitive() {
        assert!("Current".parse::<QueryMode>().is_err());
    }

    #[test]
    fn forecast_days_bounds() {
        assert!(ForecastDays::new(0).is_err());
        assert!(ForecastDays::new(-3).is_err());
        assert!(ForecastDays::new(17).is_err());
        assert_eq!(ForecastDays::new(1).unwrap().get(), 1);
        assert_eq!(ForecastDays::new(16).unwrap().get(), 16);
    }

    #[test]
    fn forecast_days_from_str() {
        assert_eq!("5".parse::<ForecastDays>().unwrap().get(), 5);
        assert_eq!(" 12 ".parse::<ForecastDays>().unwrap().get(), 12);

        let err = "five".parse::<ForecastDays>().unwrap_err();
        assert!(matches!(err, Error::InvalidDays(ref v) if v == "five"));

        let err = "40".parse::<ForecastDays>().unwrap_err();
        assert!(err.to_string().contains("'40'"));
    }

    #[test]
    fn default_query_mode_setting_lists_both_options() {
        let setting = QueryModeSetting::default();
        assert_eq!(setting.value, "forecast");
        assert_eq!(setting.options, vec!["forecast".to_string(), "current".to_string()]);
        assert!(setting.accepts("current"));
        assert!(!setting.accepts("cancel"));
    }
}
