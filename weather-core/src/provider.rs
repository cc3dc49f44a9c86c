use anyhow::Context;
use reqwest::{Client, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    Config,
    config::MalformedEntryPolicy,
    error::{ForecastError, TransportError},
    model::{CityCatalog, ForecastInfo, Locator, UnitSystem},
};

pub mod blocking;
pub mod catalog;
pub mod request;
pub mod translate;

pub use catalog::{CatalogDecoder, parse_catalog};
pub use request::build_weather_url;
pub use translate::translate;

/// Client for the current-conditions endpoint and the bulk city catalog.
///
/// Cloning is cheap and every clone shares the same HTTP connection pool.
#[derive(Debug, Clone)]
pub struct ForecastService {
    http: Client,
    weather_url: Url,
    catalog_url: Url,
    malformed_entries: MalformedEntryPolicy,
}

impl ForecastService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Self::with_client(http, config)
    }

    /// Use a caller-supplied HTTP client instead of building one.
    pub fn with_client(http: Client, config: &Config) -> anyhow::Result<Self> {
        let weather_url = Url::parse(&config.weather_url)
            .with_context(|| format!("Invalid weather URL: {}", config.weather_url))?;
        let catalog_url = Url::parse(&config.catalog_url)
            .with_context(|| format!("Invalid city catalog URL: {}", config.catalog_url))?;

        Ok(Self { http, weather_url, catalog_url, malformed_entries: config.malformed_entries })
    }

    /// Fetch current conditions for `locator`, expressed in `unit`.
    #[instrument(skip(self, api_key))]
    pub async fn fetch_weather(
        &self,
        locator: &Locator,
        api_key: &str,
        unit: UnitSystem,
    ) -> Result<ForecastInfo, ForecastError> {
        let url = build_weather_url(&self.weather_url, locator, api_key, unit);
        debug!(endpoint = %self.weather_url, "Requesting current weather");

        let res = self.http.get(url).send().await.map_err(TransportError::from)?;

        let status = res.status();
        let body = res.text().await.map_err(TransportError::from)?;

        if !status.is_success() {
            return Err(TransportError::status(status, &body).into());
        }

        let document: Value = serde_json::from_str(&body).map_err(ForecastError::Parse)?;
        translate(&document, unit)
    }

    /// Download and decode the full city catalog.
    #[instrument(skip(self))]
    pub async fn fetch_city_catalog(&self) -> Result<CityCatalog, ForecastError> {
        debug!(url = %self.catalog_url, "Opening city catalog stream");

        let mut res =
            self.http.get(self.catalog_url.clone()).send().await.map_err(TransportError::from)?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.map_err(TransportError::from)?;
            return Err(TransportError::status(status, &body).into());
        }

        let mut decoder = CatalogDecoder::new(self.malformed_entries);
        let mut compressed = 0usize;
        while let Some(chunk) = res.chunk().await.map_err(TransportError::from)? {
            compressed += chunk.len();
            decoder.push(&chunk)?;
        }
        debug!(bytes = compressed, "City catalog stream drained");

        decoder.finish()
    }
}
