use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::Text;
use log::debug;
use skycast_core::{Config, ForecastSource, WeatherApiClient, parse};

use crate::render;
use crate::session::Session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Three-day city forecasts in the terminal")]
pub struct Cli {
    /// City to open with (defaults to the configured city).
    #[arg(long, short)]
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and an optional default city.
    Configure,

    /// Print the forecast for a city once and exit.
    Show {
        /// City name; falls back to the configured default.
        city: Option<String>,

        /// Also print the hourly breakdown of the current day.
        #[arg(long)]
        hours: bool,
    },
}

impl Cli {
    /// Without a subcommand the tool opens the interactive session.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, hours }) => show(city.or(self.city), hours).await,
            None => interactive(self.city).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let prompt = if config.has_api_key() {
        "WeatherAPI.com API key (leave empty to keep the current one):"
    } else {
        "WeatherAPI.com API key:"
    };
    let api_key = Text::new(prompt)
        .with_help_message("Create one for free at https://www.weatherapi.com")
        .prompt()?;
    let api_key = api_key.trim();
    if !api_key.is_empty() {
        config.set_api_key(api_key.to_string());
    }

    let default_city = Text::new("Default city:")
        .with_placeholder(config.city())
        .with_help_message("Leave empty to keep the current default")
        .prompt()?;
    if !default_city.trim().is_empty() {
        config.set_default_city(default_city);
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );

    Ok(())
}

async fn show(city: Option<String>, hours: bool) -> Result<()> {
    let config = Config::load()?;
    let client = WeatherApiClient::new(config.api_key()?.to_string());
    let city = city.unwrap_or_else(|| config.city().to_string());

    let records = client.forecast(&city).await?;
    let current = records.first();

    print!("{}", render::card(current));

    if !records.is_empty() {
        println!();
        for record in &records {
            println!("{}", render::day_line(record));
        }
    }

    if hours && let Some(day) = current {
        let hour_records = parse::hourly_records(&day.hours)?;
        println!();
        for record in &hour_records {
            println!("{}", render::hour_line(record));
        }
    }

    Ok(())
}

async fn interactive(city: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let client = WeatherApiClient::new(config.api_key()?.to_string());
    let city = city.unwrap_or_else(|| config.city().to_string());

    debug!("starting session for '{city}'");
    Session::new(client, city).run().await
}
