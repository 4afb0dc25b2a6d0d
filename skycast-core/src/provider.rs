use crate::{
    Config, WeatherReport, WeatherRequest, error::Result,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherReport>;
}

/// Construct the OpenWeather provider against the configured endpoint.
pub fn provider_from_config(config: &Config, api_key: String) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(api_key).with_base_url(config.api_base_url.clone()))
}
