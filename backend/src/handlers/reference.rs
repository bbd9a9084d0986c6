//! HTTP handlers for crop and soil reference data

use axum::{extract::State, Json};
use serde::Serialize;
use shared::models::{CropProfile, SoilCharacteristics};
use shared::{CropKind, SoilType};

use crate::AppState;

/// One crop catalog entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropReference {
    pub crop_type: CropKind,
    #[serde(flatten)]
    pub profile: CropProfile,
}

/// One soil catalog entry with its retention narrative
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilReference {
    pub soil_type: SoilType,
    #[serde(flatten)]
    pub characteristics: SoilCharacteristics,
    pub retention_advice: String,
}

/// List the crop catalog used by the planner
pub async fn list_crops(State(state): State<AppState>) -> Json<Vec<CropReference>> {
    let crops = state
        .forecasts
        .planner()
        .crops()
        .iter()
        .map(|(crop_type, profile)| CropReference {
            crop_type,
            profile: *profile,
        })
        .collect();

    Json(crops)
}

/// List the soil catalog used by the simulator
pub async fn list_soils(State(state): State<AppState>) -> Json<Vec<SoilReference>> {
    let soils = state
        .forecasts
        .planner()
        .soils()
        .iter()
        .map(|(soil_type, characteristics)| SoilReference {
            soil_type,
            characteristics: *characteristics,
            retention_advice: soil_type.retention_advice().to_string(),
        })
        .collect();

    Json(soils)
}
