//! Geographic soil classification
//!
//! A coarse latitude/longitude proxy used when no soil survey data is
//! available. No external soil database is consulted.

use crate::models::SoilType;

/// Derive a soil type from coordinates. Ordered rules, first match wins.
pub fn classify_soil(latitude: f64, longitude: f64) -> SoilType {
    let abs_lat = latitude.abs();
    let abs_lon = longitude.abs();

    if abs_lat > 60.0 {
        // Arctic regions
        SoilType::Sandy
    } else if abs_lat < 30.0 && abs_lon < 50.0 {
        // Tropical regions
        SoilType::Clay
    } else if (30.0..=50.0).contains(&abs_lat) {
        // Temperate regions
        SoilType::ClayLoam
    } else {
        SoilType::Loam
    }
}
