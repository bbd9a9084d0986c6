//! Chat assistant service
//!
//! Relays grower questions to the generative language API, optionally
//! grounding the conversation in a stored forecast.

use crate::error::{AppError, AppResult};
use crate::external::AssistantClient;
use crate::models::{ScheduleRecord, StoredForecast, WeatherRecord};
use crate::services::ForecastService;

const GENERAL_CONTEXT: &str = "You are an irrigation advisor helping growers plan \
    watering schedules. Give practical, concise answers about soil moisture, crop \
    water needs, and irrigation timing.";

/// Assistant service for forecast-aware chat
#[derive(Clone)]
pub struct AssistantService {
    client: AssistantClient,
    forecasts: ForecastService,
}

impl AssistantService {
    /// Create a new AssistantService instance
    pub fn new(client: AssistantClient, forecasts: ForecastService) -> Self {
        Self { client, forecasts }
    }

    /// Relay a message, grounding it in a stored forecast when one is named
    pub async fn chat(&self, message: &str, forecast_id: Option<i64>) -> AppResult<String> {
        if !self.client.is_configured() {
            return Err(AppError::AssistantUnavailable(
                "assistant API key not configured".to_string(),
            ));
        }

        let context = match forecast_id {
            Some(id) => {
                let details = self.forecasts.get(id).await?;
                build_context(&details.forecast, &details.weather, &details.schedule)
            }
            None => GENERAL_CONTEXT.to_string(),
        };

        self.client.generate_reply(&context, message).await
    }
}

/// Build the system preamble describing the grower's stored forecast
fn build_context(
    forecast: &StoredForecast,
    weather: &[WeatherRecord],
    schedule: &[ScheduleRecord],
) -> String {
    let mut context = String::from(GENERAL_CONTEXT);
    context.push_str("\n\nThe grower's current forecast:\n");
    context.push_str(&format!(
        "Crop: {}. Location: ({:.2}, {:.2}). Planting date: {}. Horizon: {} days.\n",
        forecast.crop_type,
        forecast.latitude,
        forecast.longitude,
        forecast.planting_date,
        forecast.forecast_days
    ));

    if let Some(soil) = forecast.soil_type {
        context.push_str(&format!(
            "Soil: {}, which has {}\n",
            soil,
            soil.retention_advice()
        ));
    }
    if let Some(moisture) = forecast.current_soil_moisture {
        context.push_str(&format!(
            "Soil moisture carried out of the schedule: {:.1}%.\n",
            moisture
        ));
    }

    if !weather.is_empty() {
        context.push_str("Daily outlook:\n");
        for day in weather {
            let irrigation = schedule
                .iter()
                .find(|entry| entry.date == day.date)
                .map(|entry| match entry.irrigation_volume_mm {
                    Some(volume) => format!("irrigate {:.0} mm", volume),
                    None => "no irrigation".to_string(),
                })
                .unwrap_or_else(|| "no schedule entry".to_string());

            context.push_str(&format!(
                "- {}: {}, {:.1}C, rain {:.1} mm, evaporation {:.1} mm, {}\n",
                day.date,
                day.condition,
                day.temperature_celsius,
                day.precipitation_mm,
                day.evaporation_mm,
                irrigation
            ));
        }
    }

    context
}
