use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Coarse family a condition code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionGroup {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

macro_rules! weather_conditions {
    ($($variant:ident = $code:literal => $description:literal,)+) => {
        /// Provider weather condition codes.
        ///
        /// The set is closed: codes outside it are rejected by [`WeatherCondition::from_code`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum WeatherCondition {
            $($variant = $code,)+
        }

        impl WeatherCondition {
            pub const ALL: &'static [WeatherCondition] = &[$(WeatherCondition::$variant,)+];

            pub fn from_code(code: i64) -> Result<Self, ForecastError> {
                match code {
                    $($code => Ok(WeatherCondition::$variant),)+
                    other => Err(ForecastError::UnknownCondition(other)),
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    $(WeatherCondition::$variant => $description,)+
                }
            }
        }
    };
}

weather_conditions! {
    ThunderstormLightRain = 200 => "thunderstorm with light rain",
    ThunderstormRain = 201 => "thunderstorm with rain",
    ThunderstormHeavyRain = 202 => "thunderstorm with heavy rain",
    LightThunderstorm = 210 => "light thunderstorm",
    Thunderstorm = 211 => "thunderstorm",
    HeavyThunderstorm = 212 => "heavy thunderstorm",
    RaggedThunderstorm = 221 => "ragged thunderstorm",
    ThunderstormLightDrizzle = 230 => "thunderstorm with light drizzle",
    ThunderstormDrizzle = 231 => "thunderstorm with drizzle",
    ThunderstormHeavyDrizzle = 232 => "thunderstorm with heavy drizzle",
    LightDrizzle = 300 => "light intensity drizzle",
    Drizzle = 301 => "drizzle",
    HeavyDrizzle = 302 => "heavy intensity drizzle",
    LightDrizzleRain = 310 => "light intensity drizzle rain",
    DrizzleRain = 311 => "drizzle rain",
    HeavyDrizzleRain = 312 => "heavy intensity drizzle rain",
    DrizzleShowerRain = 313 => "shower rain and drizzle",
    DrizzleHeavyShowerRain = 314 => "heavy shower rain and drizzle",
    ShowerDrizzle = 321 => "shower drizzle",
    LightRain = 500 => "light rain",
    ModerateRain = 501 => "moderate rain",
    HeavyRain = 502 => "heavy intensity rain",
    VeryHeavyRain = 503 => "very heavy rain",
    ExtremeRain = 504 => "extreme rain",
    FreezingRain = 511 => "freezing rain",
    LightShowerRain = 520 => "light intensity shower rain",
    ShowerRain = 521 => "shower rain",
    HeavyShowerRain = 522 => "heavy intensity shower rain",
    RaggedShowerRain = 531 => "ragged shower rain",
    LightSnow = 600 => "light snow",
    Snow = 601 => "snow",
    HeavySnow = 602 => "heavy snow",
    Sleet = 611 => "sleet",
    LightShowerSleet = 612 => "light shower sleet",
    ShowerSleet = 613 => "shower sleet",
    LightRainAndSnow = 615 => "light rain and snow",
    RainAndSnow = 616 => "rain and snow",
    LightShowerSnow = 620 => "light shower snow",
    ShowerSnow = 621 => "shower snow",
    HeavyShowerSnow = 622 => "heavy shower snow",
    Mist = 701 => "mist",
    Smoke = 711 => "smoke",
    Haze = 721 => "haze",
    DustWhirls = 731 => "sand/dust whirls",
    Fog = 741 => "fog",
    Sand = 751 => "sand",
    Dust = 761 => "dust",
    Ash = 762 => "volcanic ash",
    Squall = 771 => "squalls",
    Tornado = 781 => "tornado",
    Clear = 800 => "clear sky",
    FewClouds = 801 => "few clouds",
    PartlyCloudy = 802 => "scattered clouds",
    BrokenClouds = 803 => "broken clouds",
    MostlyCloudy = 804 => "overcast clouds",
}

impl WeatherCondition {
    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn group(&self) -> ConditionGroup {
        match self.code() {
            200..=299 => ConditionGroup::Thunderstorm,
            300..=399 => ConditionGroup::Drizzle,
            500..=599 => ConditionGroup::Rain,
            600..=699 => ConditionGroup::Snow,
            700..=799 => ConditionGroup::Atmosphere,
            800 => ConditionGroup::Clear,
            _ => ConditionGroup::Clouds,
        }
    }
}

impl TryFrom<i64> for WeatherCondition {
    type Error = ForecastError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
