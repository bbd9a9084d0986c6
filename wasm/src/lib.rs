//! WebAssembly module for Irrigation Forecast Platform
//!
//! Provides client-side computation for:
//! - Evapotranspiration estimation
//! - Geographic soil classification
//! - Daily soil-moisture stepping
//! - Irrigation decisions and volume sizing
//! - Offline input validation

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"irrigation-forecast-wasm loaded".into());
}

/// Irrigation decision for a single moisture reading
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IrrigationRequirement {
    irrigation_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    irrigation_volume_mm: Option<f64>,
}

/// One crop catalog entry with its wire key
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CropCatalogEntry {
    crop_type: CropKind,
    #[serde(flatten)]
    profile: CropProfile,
}

/// One soil catalog entry with its wire key and watering guidance
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SoilCatalogEntry {
    soil_type: SoilType,
    #[serde(flatten)]
    characteristics: SoilCharacteristics,
    retention_advice: &'static str,
}

fn parse_soil(raw: &str) -> Result<SoilType, JsValue> {
    match raw {
        "sandy" => Ok(SoilType::Sandy),
        "loam" => Ok(SoilType::Loam),
        "clayLoam" => Ok(SoilType::ClayLoam),
        "clay" => Ok(SoilType::Clay),
        other => Err(JsValue::from_str(&format!("Unknown soil type: {}", other))),
    }
}

fn parse_crop(raw: &str) -> Result<CropKind, JsValue> {
    raw.parse::<CropKind>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Estimate daily reference evapotranspiration (mm) from mean temperature,
/// humidity and wind speed
#[wasm_bindgen]
pub fn estimate_evapotranspiration(temperature: f64, humidity: f64, wind_speed: f64) -> f64 {
    shared::engine::estimate_evapotranspiration(temperature, humidity, wind_speed)
}

/// Classify the soil type at a coordinate pair
#[wasm_bindgen]
pub fn classify_soil(latitude: f64, longitude: f64) -> String {
    shared::engine::classify_soil(latitude, longitude)
        .as_str()
        .to_string()
}

/// Advance a soil-moisture reading by one day of weather
#[wasm_bindgen]
pub fn advance_soil_moisture(
    current_moisture: f64,
    precipitation_mm: f64,
    evaporation_mm: f64,
    crop_water_use_mm: f64,
    soil_type: &str,
) -> Result<f64, JsValue> {
    let soil = parse_soil(soil_type)?;
    let soils = SoilCatalog::with_defaults();
    shared::engine::advance_soil_moisture(
        current_moisture,
        precipitation_mm,
        evaporation_mm,
        crop_water_use_mm,
        soil,
        &soils,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decide whether a moisture reading calls for irrigation and size the
/// volume, returned as JSON
#[wasm_bindgen]
pub fn irrigation_requirement(moisture: f64, crop_type: &str) -> Result<String, JsValue> {
    let crop = parse_crop(crop_type)?;
    let crops = CropCatalog::with_defaults();
    let profile = crops
        .profile(crop)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let volume = shared::engine::irrigation_volume(moisture, profile);
    let requirement = IrrigationRequirement {
        irrigation_needed: volume.is_some(),
        irrigation_volume_mm: volume,
    };
    serde_json::to_string(&requirement).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify a moisture reading against a crop's thresholds
#[wasm_bindgen]
pub fn moisture_band(moisture: f64, crop_type: &str) -> Result<String, JsValue> {
    let crop = parse_crop(crop_type)?;
    let crops = CropCatalog::with_defaults();
    let profile = crops
        .profile(crop)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(profile.moisture_band(moisture).to_string())
}

/// Human-facing label for a provider condition
#[wasm_bindgen]
pub fn condition_label(raw: &str) -> String {
    display_condition(raw).to_string()
}

/// The crop catalog as JSON, in fixed catalog order
#[wasm_bindgen]
pub fn crop_catalog_json() -> String {
    let crops = CropCatalog::with_defaults();
    let entries: Vec<CropCatalogEntry> = crops
        .iter()
        .map(|(crop_type, profile)| CropCatalogEntry {
            crop_type,
            profile: *profile,
        })
        .collect();
    serde_json::to_string(&entries).unwrap_or_default()
}

/// The soil catalog as JSON, in fixed catalog order
#[wasm_bindgen]
pub fn soil_catalog_json() -> String {
    let soils = SoilCatalog::with_defaults();
    let entries: Vec<SoilCatalogEntry> = soils
        .iter()
        .map(|(soil_type, characteristics)| SoilCatalogEntry {
            soil_type,
            characteristics: *characteristics,
            retention_advice: soil_type.retention_advice(),
        })
        .collect();
    serde_json::to_string(&entries).unwrap_or_default()
}

/// Validate a coordinate pair for offline form checks
#[wasm_bindgen]
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    validate_latitude(latitude).is_ok() && validate_longitude(longitude).is_ok()
}

/// Validate a soil-moisture percentage for offline form checks
#[wasm_bindgen]
pub fn validate_moisture(moisture: f64) -> bool {
    validate_moisture_percent(moisture).is_ok()
}
