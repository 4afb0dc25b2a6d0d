use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Request};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{Error, Result},
    model::{CurrentConditions, DailyEntry, DailyForecast, WeatherReport, WeatherRequest},
    settings::QueryMode,
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self, mode: QueryMode) -> String {
        let path = match mode {
            QueryMode::Current => "/data/2.5/weather",
            QueryMode::Forecast => "/data/2.5/forecast/daily",
        };
        format!("{}{}", self.base_url, path)
    }

    /// The GET request for `request`, without sending it.
    pub fn build_request(&self, request: &WeatherRequest) -> Result<Request> {
        let built = self
            .http
            .get(self.endpoint(request.mode))
            .query(&[
                ("q", request.location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .build()?;
        Ok(built)
    }

    async fn fetch_body(&self, request: &WeatherRequest) -> Result<String> {
        let built = self.build_request(request)?;
        debug!(
            endpoint = %self.endpoint(request.mode),
            location = %request.location,
            "requesting weather"
        );

        let res = self.http.execute(built).await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                body: truncate_body(&body),
            });
        }

        debug!(bytes = body.len(), "received weather response");
        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwDescription {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: i64,
    main: OwMain,
    weather: Vec<OwDescription>,
}

#[derive(Debug, Deserialize)]
struct OwTemp {
    day: f64,
    max: f64,
    min: f64,
}

#[derive(Debug, Deserialize)]
struct OwSky {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwDailyEntry {
    dt: i64,
    temp: OwTemp,
    weather: Vec<OwSky>,
}

#[derive(Debug, Deserialize)]
struct OwDailyResponse {
    list: Vec<OwDailyEntry>,
}

/// Parse a current-weather body into its typed view.
pub fn parse_current(body: &str) -> Result<CurrentConditions> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    let description = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| Error::MalformedResponse("`weather` is empty".to_string()))?;

    Ok(CurrentConditions {
        station_name: parsed.name.filter(|n| !n.is_empty()),
        observed_at: unix_to_utc(parsed.dt)?,
        temp: parsed.main.temp,
        temp_max: parsed.main.temp_max,
        temp_min: parsed.main.temp_min,
        description,
    })
}

/// Parse a daily-forecast body into its typed view.
pub fn parse_forecast(body: &str) -> Result<DailyForecast> {
    let parsed: OwDailyResponse = serde_json::from_str(body)?;

    let days = parsed
        .list
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let sky = entry
                .weather
                .into_iter()
                .next()
                .map(|w| w.main)
                .ok_or_else(|| Error::MalformedResponse(format!("`list[{i}].weather` is empty")))?;

            Ok(DailyEntry {
                observed_at: unix_to_utc(entry.dt)?,
                day: entry.temp.day,
                max: entry.temp.max,
                min: entry.temp.min,
                sky,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DailyForecast { days })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let body = self.fetch_body(request).await?;

        match request.mode {
            QueryMode::Current => parse_current(&body).map(WeatherReport::Current),
            QueryMode::Forecast => parse_forecast(&body).map(WeatherReport::Forecast),
        }
    }
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| Error::MalformedResponse(format!("timestamp {ts} is out of range")))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
