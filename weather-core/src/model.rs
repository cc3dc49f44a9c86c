use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::condition::WeatherCondition;

/// City identifier to city name, as published in the bulk catalog.
pub type CityCatalog = BTreeMap<i64, String>;

/// Selects the location a lookup is made for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    CityId(i64),
    CityName(String),
}

impl Locator {
    /// Numeric input is treated as a city id, anything else as a city name.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(id) => Locator::CityId(id),
            Err(_) => Locator::CityName(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::CityId(id) => write!(f, "city #{id}"),
            Locator::CityName(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Locator {
    fn from(id: i64) -> Self {
        Locator::CityId(id)
    }
}

impl From<&str> for Locator {
    fn from(name: &str) -> Self {
        Locator::CityName(name.to_string())
    }
}

/// Measurement system the numeric fields of a [`ForecastInfo`] are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Provider default when no `units` parameter is sent.
    Kelvin,
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Kelvin => "kelvin",
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Value of the `units` query parameter, `None` when it must be omitted.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            UnitSystem::Kelvin => None,
            UnitSystem::Metric => Some("metric"),
            UnitSystem::Imperial => Some("imperial"),
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Kelvin => "K",
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mph",
            UnitSystem::Kelvin | UnitSystem::Metric => "m/s",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Kelvin, UnitSystem::Metric, UnitSystem::Imperial]
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown unit system '{0}'. Supported: kelvin, metric, imperial.")]
pub struct ParseUnitError(String);

impl FromStr for UnitSystem {
    type Err = ParseUnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "kelvin" | "standard" => Ok(UnitSystem::Kelvin),
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(ParseUnitError(value.to_string())),
        }
    }
}

/// Current conditions for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInfo {
    pub city_id: i64,
    pub city_name: String,
    pub weather: WeatherCondition,
    /// The unit the lookup was requested in; the provider does not echo it back.
    pub unit: UnitSystem,
    pub temperature: f64,
    pub feels_like: f64,
    /// hPa
    pub pressure: f64,
    /// Percent.
    pub humidity: f64,
    /// m/s for Kelvin and Metric, mph for Imperial.
    pub wind_speed: f64,
    /// Degrees.
    pub wind_direction: f64,
}
