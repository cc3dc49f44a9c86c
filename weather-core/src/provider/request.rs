use reqwest::Url;

use crate::model::{Locator, UnitSystem};

/// Builds the current-conditions query for `locator`.
///
/// The key and locator are passed through as given; Kelvin sends no `units`
/// parameter because it is the provider's default.
pub fn build_weather_url(base: &Url, locator: &Locator, api_key: &str, unit: UnitSystem) -> Url {
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        match locator {
            Locator::CityId(id) => query.append_pair("id", &id.to_string()),
            Locator::CityName(name) => query.append_pair("q", name),
        };
        query.append_pair("appid", api_key);
        if let Some(units) = unit.query_value() {
            query.append_pair("units", units);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_WEATHER_URL;

    fn base() -> Url {
        Url::parse(DEFAULT_WEATHER_URL).unwrap()
    }

    fn units_params(url: &Url) -> Vec<String> {
        url.query_pairs().filter(|(k, _)| k == "units").map(|(_, v)| v.into_owned()).collect()
    }

    #[test]
    fn city_id_selects_by_id() {
        let url = build_weather_url(&base(), &Locator::CityId(2643743), "KEY", UnitSystem::Metric);
        assert_eq!(
            url.as_str(),
            "https://api.openweathermap.org/data/2.5/weather?id=2643743&appid=KEY&units=metric"
        );
    }

    #[test]
    fn city_name_selects_by_query_and_is_encoded() {
        let locator = Locator::CityName("St Petersburg".into());
        let url = build_weather_url(&base(), &locator, "KEY", UnitSystem::Imperial);

        let pairs: Vec<_> = url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "St Petersburg".to_string()),
                ("appid".to_string(), "KEY".to_string()),
                ("units".to_string(), "imperial".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn exactly_one_units_parameter_for_metric_and_imperial() {
        for (unit, expected) in [(UnitSystem::Metric, "metric"), (UnitSystem::Imperial, "imperial")] {
            let url = build_weather_url(&base(), &Locator::CityId(1), "KEY", unit);
            assert_eq!(units_params(&url), vec![expected.to_string()]);
        }
    }

    #[test]
    fn kelvin_omits_units() {
        let url = build_weather_url(&base(), &Locator::CityId(1), "KEY", UnitSystem::Kelvin);
        assert!(units_params(&url).is_empty());
    }

    #[test]
    fn empty_key_and_name_pass_through() {
        let url = build_weather_url(&base(), &Locator::CityName(String::new()), "", UnitSystem::Metric);
        assert_eq!(url.query(), Some("q=&appid=&units=metric"));
    }
}
