use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, Select, Text};
use weather_core::{
    CityCatalog, Config, ForecastInfo, ForecastService, Locator, MalformedEntryPolicy, UnitSystem,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Choose the default unit system and catalog strictness.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City ID or name; prompted for when absent.
        location: Option<String>,

        /// Unit system: kelvin, metric or imperial.
        #[arg(long)]
        unit: Option<UnitSystem>,

        /// OpenWeatherMap API key; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// List known cities from the bulk catalog.
    Cities {
        /// Only print cities whose name contains this text (case-insensitive).
        #[arg(long)]
        search: Option<String>,

        /// Stop after this many rows.
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Configure => configure(config),
            Command::Show { location, unit, api_key } => {
                let location = match location {
                    Some(location) => location,
                    None => Text::new("Enter city ID or name:").prompt()?,
                };
                let api_key = match api_key {
                    Some(key) => key,
                    None => Password::new("Enter API key:").without_confirmation().prompt()?,
                };
                let unit = unit.unwrap_or(config.default_unit);

                let service = ForecastService::new(&config)?;
                let info = service
                    .fetch_weather(&Locator::parse(&location), &api_key, unit)
                    .await
                    .with_context(|| format!("Failed to fetch weather for {location}"))?;

                print_forecast(&info);
                Ok(())
            }
            Command::Cities { search, limit } => {
                let service = ForecastService::new(&config)?;
                let catalog =
                    service.fetch_city_catalog().await.context("Failed to fetch city catalog")?;

                for (id, name) in filter_cities(&catalog, search.as_deref(), limit) {
                    println!("{id}\t{name}");
                }
                Ok(())
            }
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let units = UnitSystem::all().to_vec();
    let start = units.iter().position(|u| *u == config.default_unit).unwrap_or_default();
    config.default_unit =
        Select::new("Default unit system:", units).with_starting_cursor(start).prompt()?;

    let skip = Confirm::new("Skip malformed entries when downloading the city catalog?")
        .with_default(config.malformed_entries == MalformedEntryPolicy::Skip)
        .prompt()?;
    config.malformed_entries =
        if skip { MalformedEntryPolicy::Skip } else { MalformedEntryPolicy::Abort };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn print_forecast(info: &ForecastInfo) {
    let temp = info.unit.temperature_suffix();
    println!("City ID: {}", info.city_id);
    println!("City Name: {}", info.city_name);
    println!("Weather State: {}", info.weather);
    println!("Temperature: {} {temp}", info.temperature);
    println!("Feels Like: {} {temp}", info.feels_like);
    println!("Pressure: {} hPa", info.pressure);
    println!("Humidity: {} %", info.humidity);
    println!("Wind Speed: {} {}", info.wind_speed, info.unit.wind_speed_suffix());
    println!("Wind Direction: {}°", info.wind_direction);
}

fn filter_cities<'a>(
    catalog: &'a CityCatalog,
    search: Option<&str>,
    limit: Option<usize>,
) -> Vec<(&'a i64, &'a String)> {
    let needle = search.map(str::to_lowercase);
    catalog
        .iter()
        .filter(|(_, name)| needle.as_ref().is_none_or(|n| name.to_lowercase().contains(n)))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
