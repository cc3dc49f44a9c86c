//! Thread-blocking front end for [`ForecastService`].
//!
//! Each call drives the async implementation to completion on a private
//! current-thread runtime, so both forms return the same results.
//! Do not use or drop a [`BlockingForecastService`] from inside an async runtime.

use anyhow::Context;
use tokio::runtime::{Builder, Runtime};

use crate::{
    Config,
    error::ForecastError,
    model::{CityCatalog, ForecastInfo, Locator, UnitSystem},
};

use super::ForecastService;

#[derive(Debug)]
pub struct BlockingForecastService {
    inner: ForecastService,
    runtime: Runtime,
}

impl BlockingForecastService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::from_service(ForecastService::new(config)?)
    }

    /// Wrap an existing service, sharing its HTTP client.
    pub fn from_service(inner: ForecastService) -> anyhow::Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start runtime for blocking weather client")?;

        Ok(Self { inner, runtime })
    }

    pub fn fetch_weather(
        &self,
        locator: &Locator,
        api_key: &str,
        unit: UnitSystem,
    ) -> Result<ForecastInfo, ForecastError> {
        self.runtime.block_on(self.inner.fetch_weather(locator, api_key, unit))
    }

    pub fn fetch_city_catalog(&self) -> Result<CityCatalog, ForecastError> {
        self.runtime.block_on(self.inner.fetch_city_catalog())
    }

    pub fn service(&self) -> &ForecastService {
        &self.inner
    }
}
