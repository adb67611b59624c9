use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    error::{LookupError, truncate_body},
    model::{WeatherQuery, WeatherResult},
};

use super::{ClientOptions, WeatherLookup};

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// OpenWeather "current weather" client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    pub fn new(api_key: String, options: ClientOptions) -> Result<Self, LookupError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LookupError::Unknown(format!("Failed to build HTTP client: {e}")))?;

        let endpoint = format!("{}{CURRENT_WEATHER_PATH}", options.base_url.trim_end_matches('/'));

        Ok(Self { api_key, endpoint, http })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherResult, LookupError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let err = LookupError::from_transport(&e);
                warn!(error = %e, "OpenWeather request failed before a response");
                err
            })?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        if !status.is_success() {
            let err = match LookupError::from_known_status(status) {
                Some(err) => err,
                None => {
                    // Body only feeds the message; a broken body still classifies by status.
                    let body = res.text().await.unwrap_or_default();
                    LookupError::from_status(status, &body)
                }
            };
            warn!(%status, error = %err, "OpenWeather returned an error status");
            return Err(err);
        }

        let body = res.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read OpenWeather response body");
            LookupError::from_transport(&e)
        })?;

        parse_current(&body)
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    #[instrument(skip(self, query), fields(city = %query.city))]
    async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherResult, LookupError> {
        self.fetch_current(&query.city).await
    }
}

/// The provider echoes its own status as `cod`: a number on success, often a string on errors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCode {
    Number(i64),
    Text(String),
}

impl OwCode {
    fn is_ok(&self) -> bool {
        match self {
            OwCode::Number(n) => *n == 200,
            OwCode::Text(s) => s.trim() == "200",
        }
    }
}

impl std::fmt::Display for OwCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwCode::Number(n) => write!(f, "{n}"),
            OwCode::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: Option<OwCode>,
    message: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str) -> Result<WeatherResult, LookupError> {
    let envelope: OwEnvelope = serde_json::from_str(body).map_err(|e| {
        LookupError::Unknown(format!(
            "Failed to parse OpenWeather JSON: {e} (body: {})",
            truncate_body(body)
        ))
    })?;

    match &envelope.cod {
        Some(cod) if cod.is_ok() => {}
        Some(cod) => {
            let detail = envelope
                .message
                .as_ref()
                .map(message_text)
                .unwrap_or_else(|| "no message".to_string());
            return Err(LookupError::Unknown(format!(
                "OpenWeather reported status {cod}: {detail}"
            )));
        }
        None => {
            return Err(LookupError::Unknown(
                "OpenWeather response is missing its status code".to_string(),
            ));
        }
    }

    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|e| {
        LookupError::Unknown(format!("Unexpected OpenWeather response shape: {e}"))
    })?;

    let weather = parsed.weather.first().ok_or_else(|| {
        LookupError::Unknown("OpenWeather response contained no weather conditions".to_string())
    })?;

    Ok(WeatherResult::from_reading(parsed.main.temp, weather.id, &weather.description))
}

fn message_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
