use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::settings::QueryMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub location: String,
    pub mode: QueryMode,
}

/// A single observation from the current-weather endpoint, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub station_name: Option<String>,
    pub observed_at: DateTime<Utc>,
    pub temp: f64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub description: String,
}

/// One day of the daily forecast, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub observed_at: DateTime<Utc>,
    pub day: f64,
    pub max: f64,
    pub min: f64,
    pub sky: String,
}

impl DailyEntry {
    pub fn date(&self) -> NaiveDate {
        self.observed_at.date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub days: Vec<DailyEntry>,
}

impl DailyForecast {
    /// The first `requested` days, or all of them if fewer were returned.
    pub fn first_days(&self, requested: usize) -> &[DailyEntry] {
        &self.days[..requested.min(self.days.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeatherReport {
    Current(CurrentConditions),
    Forecast(DailyForecast),
}
