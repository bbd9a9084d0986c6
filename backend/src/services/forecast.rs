//! Forecast orchestration service
//!
//! Runs the full pipeline for one request: persist, classify the soil,
//! acquire weather, simulate the irrigation schedule, persist the results.

use std::sync::Arc;

use serde::Serialize;
use shared::engine::{classify_soil, IrrigationPlanner};
use shared::models::{CropProfile, ScheduleSummary};
use shared::{GpsCoordinates, SoilType};

use crate::error::{AppError, AppResult};
use crate::models::{NewForecast, ScheduleRecord, StoredForecast, WeatherRecord};
use crate::services::WeatherService;
use crate::storage::ForecastStore;

/// Forecast service for creating and retrieving irrigation forecasts
#[derive(Clone)]
pub struct ForecastService {
    store: Arc<dyn ForecastStore>,
    weather: WeatherService,
    planner: IrrigationPlanner,
    default_initial_moisture: f64,
}

/// Response payload for a freshly created forecast
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastCreated {
    pub forecast: StoredForecast,
    pub soil_type: SoilType,
    pub crop_profile: CropProfile,
    pub weather: Vec<WeatherRecord>,
    pub schedule: Vec<ScheduleRecord>,
    pub summary: ScheduleSummary,
    pub retention_advice: String,
}

/// Response payload for a stored forecast
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDetails {
    pub forecast: StoredForecast,
    pub weather: Vec<WeatherRecord>,
    pub schedule: Vec<ScheduleRecord>,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(
        store: Arc<dyn ForecastStore>,
        weather: WeatherService,
        planner: IrrigationPlanner,
        default_initial_moisture: f64,
    ) -> Self {
        Self {
            store,
            weather,
            planner,
            default_initial_moisture,
        }
    }

    /// Lookup tables driving the simulation, exposed for the reference endpoints
    pub fn planner(&self) -> &IrrigationPlanner {
        &self.planner
    }

    /// Create a forecast: classify, acquire weather, simulate, persist
    pub async fn create(
        &self,
        new: NewForecast,
        initial_moisture: Option<f64>,
    ) -> AppResult<ForecastCreated> {
        let starting_moisture = initial_moisture.unwrap_or(self.default_initial_moisture);

        let forecast = self.store.create_forecast(new)?;
        let location = GpsCoordinates::new(forecast.latitude, forecast.longitude);
        let soil_type = classify_soil(location.latitude, location.longitude);

        let series = self
            .weather
            .daily_series(location, forecast.forecast_days)
            .await?;
        let weather = self.store.insert_weather_series(forecast.id, &series)?;

        let plan = self.planner.plan(
            starting_moisture,
            forecast.crop_type,
            soil_type,
            &series,
            forecast.planting_date,
        )?;
        let summary = ScheduleSummary::from_entries(&plan.entries);

        // One batch insert keeps the schedule all-or-nothing
        let schedule = self.store.insert_schedule(forecast.id, &plan.entries)?;
        let forecast = self
            .store
            .set_forecast_outcome(forecast.id, soil_type, plan.final_moisture)?
            .ok_or_else(|| {
                AppError::Internal("forecast record disappeared during creation".to_string())
            })?;

        let crop_profile = *self.planner.crops().profile(forecast.crop_type)?;

        tracing::info!(
            "Created forecast {} for {} at ({}, {}): {} irrigation days over {}",
            forecast.id,
            forecast.crop_type,
            forecast.latitude,
            forecast.longitude,
            summary.irrigation_days,
            forecast.forecast_days
        );

        Ok(ForecastCreated {
            forecast,
            soil_type,
            crop_profile,
            weather,
            schedule,
            summary,
            retention_advice: soil_type.retention_advice().to_string(),
        })
    }

    /// Fetch a stored forecast with its weather series and schedule
    pub async fn get(&self, id: i64) -> AppResult<ForecastDetails> {
        let forecast = self
            .store
            .forecast(id)?
            .ok_or_else(|| AppError::NotFound("Forecast".to_string()))?;
        let weather = self.store.weather_series(id)?;
        let schedule = self.store.schedule(id)?;

        Ok(ForecastDetails {
            forecast,
            weather,
            schedule,
        })
    }
}
