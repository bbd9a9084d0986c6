//! HTTP handlers for irrigation forecast endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::validation::validate_forecast_days;
use shared::CropKind;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::NewForecast;
use crate::services::forecast::{ForecastCreated, ForecastDetails};
use crate::AppState;

/// Request body for creating a forecast
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateForecastRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,

    pub crop_type: String,

    pub planting_date: NaiveDate,

    pub forecast_days: u32,

    #[validate(range(
        min = 0.0,
        max = 100.0,
        message = "initial moisture must be between 0 and 100"
    ))]
    pub initial_moisture: Option<f64>,
}

/// Create an irrigation forecast
pub async fn create_forecast(
    State(state): State<AppState>,
    Json(request): Json<CreateForecastRequest>,
) -> AppResult<(StatusCode, Json<ForecastCreated>)> {
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    validate_forecast_days(request.forecast_days, state.config.forecast.max_horizon_days).map_err(
        |msg| AppError::Validation {
            field: "forecastDays".to_string(),
            message: msg.to_string(),
        },
    )?;

    // Unknown crop names fail the request, never fall back to a default
    let crop_type: CropKind = request.crop_type.parse()?;

    let new = NewForecast {
        latitude: request.latitude,
        longitude: request.longitude,
        crop_type,
        planting_date: request.planting_date,
        forecast_days: request.forecast_days,
    };

    let created = state.forecasts.create(new, request.initial_moisture).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a forecast with its weather series and schedule
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(forecast_id): Path<i64>,
) -> AppResult<Json<ForecastDetails>> {
    let details = state.forecasts.get(forecast_id).await?;
    Ok(Json(details))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateForecastRequest {
        CreateForecastRequest {
            latitude: 40.0,
            longitude: -95.0,
            crop_type: "corn".to_string(),
            planting_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            forecast_days: 7,
            initial_moisture: None,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_latitude_fails() {
        let mut request = valid_request();
        request.latitude = 91.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_out_of_range_initial_moisture_fails() {
        let mut request = valid_request();
        request.initial_moisture = Some(120.0);
        assert!(request.validate().is_err());

        request.initial_moisture = Some(65.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_unknown_crop_name_does_not_parse() {
        let request = CreateForecastRequest {
            crop_type: "bananas".to_string(),
            ..valid_request()
        };
        assert!(request.crop_type.parse::<CropKind>().is_err());
    }
}
