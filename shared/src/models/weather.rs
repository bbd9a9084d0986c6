//! Daily weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather inputs for the simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyWeather {
    pub date: NaiveDate,
    /// Rain over the day (mm, >= 0)
    pub precipitation_mm: f64,
    /// Daily mean temperature (deg C)
    pub temperature_celsius: f64,
    /// Daily mean relative humidity (0-100)
    pub humidity_percent: f64,
    /// Daily mean wind speed (m/s, >= 0)
    pub wind_speed_mps: f64,
    /// Derived reference evapotranspiration (mm, 0-15)
    pub evaporation_mm: f64,
    /// Provider condition label for the day (e.g. "Clear", "Rain")
    pub condition: String,
}

/// Human-facing form of a provider condition label. Unknown labels pass
/// through unchanged.
pub fn display_condition(raw: &str) -> &str {
    match raw {
        "Clear" => "Sunny",
        "Clouds" => "Cloudy",
        "Rain" => "Rain",
        "Drizzle" => "Light Rain",
        "Thunderstorm" => "Thunderstorm",
        "Snow" => "Snow",
        "Mist" | "Fog" => "Foggy",
        other => other,
    }
}

/// Whether a condition label counts as a dry day (clear or sunny, either the
/// raw provider label or the display form)
pub fn is_dry_condition(condition: &str) -> bool {
    condition.eq_ignore_ascii_case("clear") || condition.eq_ignore_ascii_case("sunny")
}
