use serde_json::Value;

use crate::{
    condition::WeatherCondition,
    error::ForecastError,
    extract,
    model::{ForecastInfo, UnitSystem},
};

/// Maps a current-conditions document onto [`ForecastInfo`].
///
/// Only the first entry of `weather` is used. `unit` is recorded as given,
/// no conversion happens here.
pub fn translate(document: &Value, unit: UnitSystem) -> Result<ForecastInfo, ForecastError> {
    extract::array(document, "/weather")?;
    let weather = WeatherCondition::from_code(extract::integer(document, "/weather/0/id")?)?;

    Ok(ForecastInfo {
        city_id: extract::integer(document, "/id")?,
        city_name: extract::text(document, "/name")?.to_string(),
        weather,
        unit,
        temperature: extract::float(document, "/main/temp")?,
        feels_like: extract::float(document, "/main/feels_like")?,
        pressure: extract::float(document, "/main/pressure")?,
        humidity: extract::float(document, "/main/humidity")?,
        wind_speed: extract::float(document, "/wind/speed")?,
        wind_direction: extract::float(document, "/wind/deg")?,
    })
}
