use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::provider::{ClientOptions, DEFAULT_BASE_URL};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const CONFIG_FILE_NAME: &str = "config.toml";

/// OpenWeather credentials and endpoint settings for the `weather` CLI.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "https://api.openweathermap.org"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Key sent as `appid`. `OPENWEATHER_API_KEY` takes precedence when set.
    pub api_key: Option<String>,

    /// Provider host; defaults to the public OpenWeather API.
    pub base_url: Option<String>,

    /// Overall request timeout. Absent means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Read `config.toml` from the platform config dir (see [`Config::config_file_path`]).
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Parse the API key and endpoint settings at `path`.
    ///
    /// A missing file is not an error: lookups then rely on `OPENWEATHER_API_KEY`
    /// and the public OpenWeather host.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file: {}", path.display()));
            }
        };

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Persist the API key and endpoint settings written by `weather configure`.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Write to `path`, creating the config directory on first use.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| anyhow!("Config path has no parent directory: {}", path.display()))?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let rendered =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// `<platform config dir>/weather-lookup-cli/config.toml`, shared by `configure` and `show`.
    pub fn config_file_path() -> Result<PathBuf> {
        ProjectDirs::from("dev", "weather-lookup", "weather-lookup-cli")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }

    /// API key from `OPENWEATHER_API_KEY`, falling back to the stored one.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.api_key_with_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Same as [`Config::resolve_api_key`] with the environment value passed in.
    pub fn api_key_with_override(&self, env_value: Option<String>) -> Result<String> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
            .ok_or_else(|| {
                anyhow!(
                    "No API key configured.\n\
                     Hint: run `weather configure` or set {API_KEY_ENV}."
                )
            })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
