//! In-memory persistence for forecasts, weather series, and schedules
//!
//! Keeps the storage seam behind a trait so a database-backed store can
//! replace [`MemoryStore`] without touching the services.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use shared::models::{DailyWeather, ScheduleEntry};
use shared::SoilType;

use crate::error::AppResult;
use crate::models::{NewForecast, ScheduleRecord, StoredForecast, WeatherRecord};

/// Persistence operations used by the forecast services
pub trait ForecastStore: Send + Sync {
    /// Insert a forecast request and assign its id
    fn create_forecast(&self, new: NewForecast) -> AppResult<StoredForecast>;

    /// Fetch a forecast by id
    fn forecast(&self, id: i64) -> AppResult<Option<StoredForecast>>;

    /// Record the classified soil type and carried-out moisture
    fn set_forecast_outcome(
        &self,
        id: i64,
        soil_type: SoilType,
        final_moisture: f64,
    ) -> AppResult<Option<StoredForecast>>;

    /// Insert one aggregated weather day per element, in order
    fn insert_weather_series(
        &self,
        forecast_id: i64,
        days: &[DailyWeather],
    ) -> AppResult<Vec<WeatherRecord>>;

    /// Insert one schedule day per element, in order
    fn insert_schedule(
        &self,
        forecast_id: i64,
        entries: &[ScheduleEntry],
    ) -> AppResult<Vec<ScheduleRecord>>;

    /// Stored weather days for a forecast, ordered by date
    fn weather_series(&self, forecast_id: i64) -> AppResult<Vec<WeatherRecord>>;

    /// Stored schedule days for a forecast, ordered by date
    fn schedule(&self, forecast_id: i64) -> AppResult<Vec<ScheduleRecord>>;
}

#[derive(Default)]
struct StoreInner {
    forecasts: HashMap<i64, StoredForecast>,
    weather: HashMap<i64, Vec<WeatherRecord>>,
    schedules: HashMap<i64, Vec<ScheduleRecord>>,
    next_forecast_id: i64,
    next_weather_id: i64,
    next_schedule_id: i64,
}

/// Thread-safe in-memory store
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl ForecastStore for MemoryStore {
    fn create_forecast(&self, new: NewForecast) -> AppResult<StoredForecast> {
        let mut inner = self.write();
        inner.next_forecast_id += 1;
        let record = StoredForecast {
            id: inner.next_forecast_id,
            latitude: new.latitude,
            longitude: new.longitude,
            crop_type: new.crop_type,
            planting_date: new.planting_date,
            forecast_days: new.forecast_days,
            soil_type: None,
            current_soil_moisture: None,
            created_at: Utc::now(),
        };
        inner.forecasts.insert(record.id, record.clone());
        Ok(record)
    }

    fn forecast(&self, id: i64) -> AppResult<Option<StoredForecast>> {
        Ok(self.read().forecasts.get(&id).cloned())
    }

    fn set_forecast_outcome(
        &self,
        id: i64,
        soil_type: SoilType,
        final_moisture: f64,
    ) -> AppResult<Option<StoredForecast>> {
        let mut inner = self.write();
        Ok(inner.forecasts.get_mut(&id).map(|record| {
            record.soil_type = Some(soil_type);
            record.current_soil_moisture = Some(final_moisture);
            record.clone()
        }))
    }

    fn insert_weather_series(
        &self,
        forecast_id: i64,
        days: &[DailyWeather],
    ) -> AppResult<Vec<WeatherRecord>> {
        let mut inner = self.write();
        let mut records = Vec::with_capacity(days.len());
        for day in days {
            inner.next_weather_id += 1;
            records.push(WeatherRecord {
                id: inner.next_weather_id,
                forecast_id,
                date: day.date,
                temperature_celsius: day.temperature_celsius,
                humidity_percent: day.humidity_percent,
                wind_speed_mps: day.wind_speed_mps,
                precipitation_mm: day.precipitation_mm,
                evaporation_mm: day.evaporation_mm,
                condition: day.condition.clone(),
            });
        }
        inner
            .weather
            .entry(forecast_id)
            .or_default()
            .extend(records.iter().cloned());
        Ok(records)
    }

    fn insert_schedule(
        &self,
        forecast_id: i64,
        entries: &[ScheduleEntry],
    ) -> AppResult<Vec<ScheduleRecord>> {
        let mut inner = self.write();
        let mut records = Vec::with_capacity(entries.len());
        for entry in entries {
            inner.next_schedule_id += 1;
            records.push(ScheduleRecord {
                id: inner.next_schedule_id,
                forecast_id,
                date: entry.date,
                soil_moisture: entry.soil_moisture,
                irrigation_needed: entry.irrigation_needed,
                irrigation_volume_mm: entry.irrigation_volume_mm,
                condition: entry.condition.clone(),
            });
        }
        inner
            .schedules
            .entry(forecast_id)
            .or_default()
            .extend(records.iter().cloned());
        Ok(records)
    }

    fn weather_series(&self, forecast_id: i64) -> AppResult<Vec<WeatherRecord>> {
        let mut records = self
            .read()
            .weather
            .get(&forecast_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    fn schedule(&self, forecast_id: i64) -> AppResult<Vec<ScheduleRecord>> {
        let mut records = self
            .read()
            .schedules
            .get(&forecast_id)
            .cloned()
            .unwrap_or_default();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }
}
