use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::{LookupError, WeatherQuery, WeatherResult, provider::openweather::OpenWeatherClient};

pub mod openweather;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Anything that can turn a city name into current weather.
#[async_trait]
pub trait WeatherLookup: Send + Sync + Debug {
    async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError>;
}

/// HTTP settings for a lookup client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Scheme and host of the provider, without a trailing path.
    pub base_url: String,
    /// `None` keeps the HTTP client's default (no overall timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout: None }
    }
}

/// One-shot lookup against the public OpenWeather endpoint.
pub async fn lookup(city: &str, api_key: &str) -> Result<WeatherResult, LookupError> {
    lookup_with(city, api_key, ClientOptions::default()).await
}

/// One-shot lookup against the host and timeout in `options`.
pub async fn lookup_with(
    city: &str,
    api_key: &str,
    options: ClientOptions,
) -> Result<WeatherResult, LookupError> {
    let client = OpenWeatherClient::new(api_key.to_owned(), options)?;
    client.lookup(&WeatherQuery::new(city)).await
}
