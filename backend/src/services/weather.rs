//! Weather acquisition service
//!
//! Fetches the provider forecast and reduces the 3-hour slots to one
//! aggregated entry per calendar day for the irrigation planner.

use std::collections::HashMap;

use chrono::NaiveDate;
use shared::engine::estimate_evapotranspiration;
use shared::models::{display_condition, DailyWeather};
use shared::GpsCoordinates;

use crate::error::{AppError, AppResult};
use crate::external::weather::{ForecastItem, WeatherClient};

/// Weather service for producing daily forecast series
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch and aggregate a daily weather series for the requested horizon
    pub async fn daily_series(
        &self,
        location: GpsCoordinates,
        days: u32,
    ) -> AppResult<Vec<DailyWeather>> {
        if !self.client.is_configured() {
            return Err(AppError::WeatherServiceUnavailable(
                "weather API key not configured".to_string(),
            ));
        }

        let forecast = self.client.get_forecast(location).await?;
        tracing::debug!(
            "Weather provider returned {} forecast slots for {}",
            forecast.forecasts.len(),
            forecast.location_name
        );

        aggregate_daily(&forecast.forecasts, days)
    }
}

/// Reduce 3-hour forecast slots to daily aggregates
///
/// Groups slots by UTC calendar date, averages temperature, humidity and
/// wind, sums rain volumes, labels the day with its first slot's condition
/// in display form, and derives evaporation from the day's averages. Fails
/// when the provider covers fewer distinct days than requested; the planner
/// must never run on a truncated series.
pub fn aggregate_daily(items: &[ForecastItem], days: u32) -> AppResult<Vec<DailyWeather>> {
    let days = days as usize;

    let mut by_date: HashMap<NaiveDate, Vec<&ForecastItem>> = HashMap::new();
    for item in items {
        by_date
            .entry(item.timestamp.date_naive())
            .or_default()
            .push(item);
    }

    let mut dates: Vec<NaiveDate> = by_date.keys().copied().collect();
    dates.sort();

    if dates.len() < days {
        return Err(AppError::ExternalService(format!(
            "weather provider covered {} days, {} requested",
            dates.len(),
            days
        )));
    }

    let series = dates
        .into_iter()
        .take(days)
        .map(|date| {
            let slots = &by_date[&date];
            let count = slots.len() as f64;

            let temperature = slots.iter().map(|s| s.temperature_celsius).sum::<f64>() / count;
            let humidity = slots.iter().map(|s| s.humidity_percent).sum::<f64>() / count;
            let wind = slots.iter().map(|s| s.wind_speed_mps).sum::<f64>() / count;
            let precipitation = slots.iter().filter_map(|s| s.rain_3h_mm).sum::<f64>();

            DailyWeather {
                date,
                precipitation_mm: precipitation,
                temperature_celsius: temperature,
                humidity_percent: humidity,
                wind_speed_mps: wind,
                evaporation_mm: estimate_evapotranspiration(temperature, humidity, wind),
                condition: display_condition(&slots[0].condition).to_string(),
            }
        })
        .collect();

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slot(
        y: i32,
        m: u32,
        d: u32,
        hour: u32,
        temp: f64,
        humidity: f64,
        wind: f64,
        condition: &str,
        rain: Option<f64>,
    ) -> ForecastItem {
        ForecastItem {
            timestamp: Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap(),
            temperature_celsius: temp,
            humidity_percent: humidity,
            wind_speed_mps: wind,
            condition: condition.to_string(),
            rain_3h_mm: rain,
        }
    }

    #[test]
    fn test_aggregates_means_and_rain_sum() {
        let items = vec![
            slot(2024, 6, 1, 0, 20.0, 40.0, 2.0, "Clouds", Some(1.2)),
            slot(2024, 6, 1, 3, 30.0, 60.0, 4.0, "Rain", None),
            slot(2024, 6, 1, 6, 25.0, 50.0, 3.0, "Rain", Some(0.8)),
        ];

        let series = aggregate_daily(&items, 1).unwrap();
        assert_eq!(series.len(), 1);

        let day = &series[0];
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!((day.temperature_celsius - 25.0).abs() < 1e-9);
        assert!((day.humidity_percent - 50.0).abs() < 1e-9);
        assert!((day.wind_speed_mps - 3.0).abs() < 1e-9);
        assert!((day.precipitation_mm - 2.0).abs() < 1e-9);
        // Day label comes from the first slot, in display form
        assert_eq!(day.condition, "Cloudy");
        assert_eq!(
            day.evaporation_mm,
            estimate_evapotranspiration(25.0, 50.0, 3.0)
        );
    }

    #[test]
    fn test_days_come_back_in_ascending_date_order() {
        let items = vec![
            slot(2024, 6, 3, 9, 22.0, 55.0, 2.0, "Clear", None),
            slot(2024, 6, 1, 9, 20.0, 50.0, 2.0, "Clear", None),
            slot(2024, 6, 2, 9, 21.0, 52.0, 2.0, "Clouds", None),
        ];

        let series = aggregate_daily(&items, 3).unwrap();
        let dates: Vec<NaiveDate> = series.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_takes_only_the_requested_horizon() {
        let items = vec![
            slot(2024, 6, 1, 9, 20.0, 50.0, 2.0, "Clear", None),
            slot(2024, 6, 2, 9, 21.0, 52.0, 2.0, "Clouds", None),
            slot(2024, 6, 3, 9, 22.0, 55.0, 2.0, "Rain", Some(3.0)),
        ];

        let series = aggregate_daily(&items, 2).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].condition, "Sunny");
        assert_eq!(series[1].condition, "Cloudy");
    }

    #[test]
    fn test_short_series_fails_instead_of_truncating() {
        let items = vec![
            slot(2024, 6, 1, 9, 20.0, 50.0, 2.0, "Clear", None),
            slot(2024, 6, 2, 9, 21.0, 52.0, 2.0, "Clear", None),
        ];

        let result = aggregate_daily(&items, 5);
        assert!(matches!(result, Err(AppError::ExternalService(_))));
    }

    #[test]
    fn test_empty_slots_fail_for_any_horizon() {
        let result = aggregate_daily(&[], 1);
        assert!(result.is_err());
    }
}
