//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Current-conditions lookups against OpenWeatherMap, in async and blocking form
//! - Streaming download of the gzip-compressed city catalog
//! - Shared domain models and the error taxonomy
//! - Endpoint configuration
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod condition;
pub mod config;
pub mod error;
mod extract;
pub mod model;
pub mod provider;

pub use condition::{ConditionGroup, WeatherCondition};
pub use config::{Config, MalformedEntryPolicy};
pub use error::{ForecastError, TransportError};
pub use model::{CityCatalog, ForecastInfo, Locator, UnitSystem};
pub use provider::{ForecastService, blocking::BlockingForecastService};
