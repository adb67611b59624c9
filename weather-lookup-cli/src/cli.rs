use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use weather_lookup_core::{
    Config, LookupError, OpenWeatherClient, WeatherLookup, WeatherQuery, WeatherResult,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city, with an emoji")]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optional endpoint settings).
    Configure {
        /// Override the provider host, e.g. for a proxy.
        #[arg(long)]
        base_url: Option<String>,

        /// Overall request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Show current weather for a city.
    Show {
        /// City name, passed to the provider as typed.
        city: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { base_url, timeout_secs } => configure(base_url, timeout_secs),
            Command::Show { city, json } => show(&city, json).await,
        }
    }
}

fn configure(base_url: Option<String>, timeout_secs: Option<u64>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    if base_url.is_some() {
        config.base_url = base_url;
    }
    if timeout_secs.is_some() {
        config.timeout_secs = timeout_secs;
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    let options = config.client_options();
    debug!(base_url = %options.base_url, "Using provider");

    let client = OpenWeatherClient::new(api_key, options)?;
    let outcome = client.lookup(&WeatherQuery::new(city)).await;

    match outcome {
        Ok(result) => {
            println!("{}", render_result(&result, json)?);
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(render_error(&err))),
    }
}

fn render_result(result: &WeatherResult, json: bool) -> anyhow::Result<String> {
    if json {
        serde_json::to_string_pretty(result).context("Failed to serialize result")
    } else {
        Ok(result.to_string())
    }
}

fn render_error(err: &LookupError) -> String {
    if err.is_transport() {
        format!("{err}\n(no response was received from the weather provider)")
    } else {
        err.to_string()
    }
}
