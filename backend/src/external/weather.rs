//! Weather API client for fetching forecast data
//!
//! Integrates with the OpenWeatherMap 5-day / 3-hour forecast API

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

/// Weather forecast for a specific 3-hour slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastItem {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub wind_speed_mps: f64,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_3h_mm: Option<f64>,
}

/// Forecast series as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub location_name: String,
    pub forecasts: Vec<ForecastItem>,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    wind: OWMWind,
    rain: Option<OWMForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the default OpenWeatherMap endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(
            api_key,
            "https://api.openweathermap.org/data/2.5".to_string(),
        )
    }

    /// Create a new WeatherClient with custom base URL (configuration or testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            timeout: Duration::from_secs(10),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an API key has been configured
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch the 5-day / 3-hour forecast by GPS coordinates
    pub async fn get_forecast(&self, location: GpsCoordinates) -> AppResult<WeatherForecast> {
        let url = format!(
            "{}/forecast?lat={}&lon={}&appid={}&units=metric",
            self.base_url, location.latitude, location.longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                AppError::WeatherServiceUnavailable(format!("Weather API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherServiceUnavailable(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        Ok(convert_forecast_response(data))
    }
}

/// Convert an OpenWeatherMap forecast response to our format
fn convert_forecast_response(data: OWMForecastResponse) -> WeatherForecast {
    let forecasts = data
        .list
        .into_iter()
        .map(|item| {
            // The provider occasionally sends an empty weather array
            let condition = item
                .weather
                .first()
                .map(|w| w.main.clone())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| "Clear".to_string());

            ForecastItem {
                timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                temperature_celsius: item.main.temp,
                humidity_percent: item.main.humidity,
                wind_speed_mps: item.wind.speed,
                condition,
                rain_3h_mm: item.rain.and_then(|r| r.three_hour),
            }
        })
        .collect();

    WeatherForecast {
        location_name: data.city.name,
        forecasts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_fills_missing_condition() {
        let data = OWMForecastResponse {
            city: OWMCity {
                name: "Test".to_string(),
            },
            list: vec![OWMForecastItem {
                dt: 1_700_000_000,
                main: OWMMain {
                    temp: 21.5,
                    humidity: 60.0,
                },
                weather: vec![],
                wind: OWMWind { speed: 3.0 },
                rain: None,
            }],
        };

        let forecast = convert_forecast_response(data);
        assert_eq!(forecast.forecasts.len(), 1);
        assert_eq!(forecast.forecasts[0].condition, "Clear");
        assert_eq!(forecast.forecasts[0].rain_3h_mm, None);
    }

    #[test]
    fn test_convert_keeps_rain_volume() {
        let data = OWMForecastResponse {
            city: OWMCity {
                name: "Test".to_string(),
            },
            list: vec![OWMForecastItem {
                dt: 1_700_000_000,
                main: OWMMain {
                    temp: 18.0,
                    humidity: 85.0,
                },
                weather: vec![OWMWeather {
                    main: "Rain".to_string(),
                }],
                wind: OWMWind { speed: 5.2 },
                rain: Some(OWMForecastRain {
                    three_hour: Some(2.4),
                }),
            }],
        };

        let forecast = convert_forecast_response(data);
        assert_eq!(forecast.forecasts[0].condition, "Rain");
        assert_eq!(forecast.forecasts[0].rain_3h_mm, Some(2.4));
    }
}
