//! Crop profiles and the crop catalog

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Crops the platform can plan irrigation for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CropKind {
    Wheat,
    Corn,
    Soybeans,
    Tomatoes,
    Potatoes,
    Rice,
}

impl CropKind {
    /// All supported crops, in catalog order
    pub const ALL: [CropKind; 6] = [
        CropKind::Wheat,
        CropKind::Corn,
        CropKind::Soybeans,
        CropKind::Tomatoes,
        CropKind::Potatoes,
        CropKind::Rice,
    ];

    /// Wire/key form of the crop (matches the serialized representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            CropKind::Wheat => "wheat",
            CropKind::Corn => "corn",
            CropKind::Soybeans => "soybeans",
            CropKind::Tomatoes => "tomatoes",
            CropKind::Potatoes => "potatoes",
            CropKind::Rice => "rice",
        }
    }
}

impl std::fmt::Display for CropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CropKind {
    type Err = EngineError;

    /// Parse a crop name as supplied by a request. Unknown names are an
    /// error, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wheat" => Ok(CropKind::Wheat),
            "corn" => Ok(CropKind::Corn),
            "soybeans" => Ok(CropKind::Soybeans),
            "tomatoes" => Ok(CropKind::Tomatoes),
            "potatoes" => Ok(CropKind::Potatoes),
            "rice" => Ok(CropKind::Rice),
            other => Err(EngineError::UnknownCropType(other.to_string())),
        }
    }
}

/// Moisture thresholds and daily water demand of a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropProfile {
    /// Moisture floor (%) below which irrigation is triggered
    pub critical_moisture: f64,
    /// Moisture target (%) used to size irrigation volume
    pub optimal_moisture: f64,
    /// Water consumed by the crop per day (mm)
    pub daily_water_use: f64,
}

impl CropProfile {
    /// Classify a moisture reading against this crop's thresholds
    pub fn moisture_band(&self, moisture: f64) -> MoistureBand {
        if moisture < self.critical_moisture {
            MoistureBand::BelowCritical
        } else if moisture < self.optimal_moisture {
            MoistureBand::BelowOptimal
        } else {
            MoistureBand::AtOrAboveOptimal
        }
    }
}

/// Where a moisture reading sits relative to a crop's thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoistureBand {
    BelowCritical,
    BelowOptimal,
    AtOrAboveOptimal,
}

impl std::fmt::Display for MoistureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoistureBand::BelowCritical => write!(f, "below_critical"),
            MoistureBand::BelowOptimal => write!(f, "below_optimal"),
            MoistureBand::AtOrAboveOptimal => write!(f, "at_or_above_optimal"),
        }
    }
}

/// Immutable crop lookup table, constructed at startup and injected into the
/// engine. Never mutated at runtime.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    entries: HashMap<CropKind, CropProfile>,
}

impl CropCatalog {
    /// Catalog with the standard thresholds for all six crops
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            CropKind::Wheat,
            CropProfile {
                critical_moisture: 40.0,
                optimal_moisture: 70.0,
                daily_water_use: 5.0,
            },
        );
        entries.insert(
            CropKind::Corn,
            CropProfile {
                critical_moisture: 45.0,
                optimal_moisture: 75.0,
                daily_water_use: 6.0,
            },
        );
        entries.insert(
            CropKind::Soybeans,
            CropProfile {
                critical_moisture: 35.0,
                optimal_moisture: 65.0,
                daily_water_use: 4.5,
            },
        );
        entries.insert(
            CropKind::Tomatoes,
            CropProfile {
                critical_moisture: 50.0,
                optimal_moisture: 80.0,
                daily_water_use: 7.0,
            },
        );
        entries.insert(
            CropKind::Potatoes,
            CropProfile {
                critical_moisture: 45.0,
                optimal_moisture: 75.0,
                daily_water_use: 5.5,
            },
        );
        entries.insert(
            CropKind::Rice,
            CropProfile {
                critical_moisture: 60.0,
                optimal_moisture: 90.0,
                daily_water_use: 8.0,
            },
        );
        Self { entries }
    }

    /// Catalog with an explicit entry set (for tests and custom deployments)
    pub fn from_entries(entries: HashMap<CropKind, CropProfile>) -> Self {
        Self { entries }
    }

    /// Look up the profile for a crop
    pub fn profile(&self, crop: CropKind) -> Result<&CropProfile, EngineError> {
        self.entries
            .get(&crop)
            .ok_or_else(|| EngineError::UnknownCropType(crop.to_string()))
    }

    /// Iterate catalog entries in the fixed `CropKind::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (CropKind, &CropProfile)> {
        CropKind::ALL
            .iter()
            .filter_map(|crop| self.entries.get(crop).map(|p| (*crop, p)))
    }
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
