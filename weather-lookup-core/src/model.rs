use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{glyph, units};

/// A single city lookup. The name is forwarded to the provider as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Display-ready current weather for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub temperature_f: i64,
    pub condition_code: i64,
    pub description: String,
    pub emoji: String,
}

impl WeatherResult {
    /// Build a result from raw provider readings (Kelvin, condition code, description).
    pub fn from_reading(kelvin: f64, condition_code: i64, description: &str) -> Self {
        Self {
            temperature_f: units::display_fahrenheit(kelvin),
            condition_code,
            description: units::capitalize(description),
            emoji: glyph::emoji_for(condition_code).to_string(),
        }
    }
}

impl fmt::Display for WeatherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °F", self.temperature_f)?;
        if !self.emoji.is_empty() {
            write!(f, " {}", self.emoji)?;
        }
        write!(f, " {}", self.description)
    }
}
