//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Current-weather lookups against OpenWeather
//! - The lookup error taxonomy (transport, HTTP status, provider-reported)
//! - Condition code → emoji glyph mapping and unit helpers
//! - Configuration & credentials handling
//!
//! It is used by `weather-lookup-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod glyph;
pub mod model;
pub mod provider;
pub mod units;

pub use config::Config;
pub use error::LookupError;
pub use glyph::emoji_for;
pub use model::{WeatherQuery, WeatherResult};
pub use provider::{
    ClientOptions, WeatherLookup, lookup, lookup_with, openweather::OpenWeatherClient,
};
