//! Persistence models for the Irrigation Forecast Platform
//!
//! Re-exports models from the shared crate and adds backend-specific records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use shared::models::*;
use shared::{CropKind, SoilType};

/// A stored forecast request together with its derived outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredForecast {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub crop_type: CropKind,
    pub planting_date: NaiveDate,
    pub forecast_days: u32,
    /// Classified after creation, present once the forecast has been computed
    pub soil_type: Option<SoilType>,
    /// Soil moisture carried out of the last simulated day
    pub current_soil_moisture: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a forecast record
#[derive(Debug, Clone)]
pub struct NewForecast {
    pub latitude: f64,
    pub longitude: f64,
    pub crop_type: CropKind,
    pub planting_date: NaiveDate,
    pub forecast_days: u32,
}

/// One stored day of aggregated weather tied to a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub id: i64,
    pub forecast_id: i64,
    pub date: NaiveDate,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub wind_speed_mps: f64,
    pub precipitation_mm: f64,
    pub evaporation_mm: f64,
    pub condition: String,
}

/// One stored day of the irrigation schedule tied to a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: i64,
    pub forecast_id: i64,
    pub date: NaiveDate,
    pub soil_moisture: f64,
    pub irrigation_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_volume_mm: Option<f64>,
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_record_wire_shape() {
        let record = ScheduleRecord {
            id: 1,
            forecast_id: 7,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            soil_moisture: 33.0,
            irrigation_needed: true,
            irrigation_volume_mm: Some(19.0),
            condition: "Sunny".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["soilMoisture"], 33.0);
        assert_eq!(json["irrigationNeeded"], true);
        assert_eq!(json["irrigationVolumeMm"], 19.0);

        let rest = ScheduleRecord {
            irrigation_needed: false,
            irrigation_volume_mm: None,
            ..record
        };
        let json = serde_json::to_value(&rest).unwrap();
        assert!(json.get("irrigationVolumeMm").is_none());
    }

    #[test]
    fn test_stored_forecast_soil_type_wire_form() {
        let forecast = StoredForecast {
            id: 1,
            latitude: 40.0,
            longitude: -95.0,
            crop_type: CropKind::Corn,
            planting_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            forecast_days: 7,
            soil_type: Some(SoilType::ClayLoam),
            current_soil_moisture: Some(52.0),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["cropType"], "corn");
        assert_eq!(json["soilType"], "clayLoam");
        assert_eq!(json["currentSoilMoisture"], 52.0);
    }
}
