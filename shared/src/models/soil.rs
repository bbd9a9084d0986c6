//! Soil types and the soil catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Soil texture classes recognized by the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SoilType {
    Sandy,
    Loam,
    ClayLoam,
    Clay,
}

impl SoilType {
    /// All soil types, in catalog order
    pub const ALL: [SoilType; 4] = [
        SoilType::Sandy,
        SoilType::Loam,
        SoilType::ClayLoam,
        SoilType::Clay,
    ];

    /// Wire/key form of the soil type (matches the serialized representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loam => "loam",
            SoilType::ClayLoam => "clayLoam",
            SoilType::Clay => "clay",
        }
    }

    /// Water-retention guidance shown alongside a schedule
    pub fn retention_advice(&self) -> &'static str {
        match self {
            SoilType::ClayLoam | SoilType::Clay => {
                "good water retention. Consider deep watering less frequently."
            }
            SoilType::Sandy => {
                "low water retention. More frequent, lighter watering recommended."
            }
            SoilType::Loam => "moderate water retention. Standard watering schedule suitable.",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Sandy => write!(f, "sandy"),
            SoilType::Loam => write!(f, "loam"),
            SoilType::ClayLoam => write!(f, "clay loam"),
            SoilType::Clay => write!(f, "clay"),
        }
    }
}

/// Hydraulic characteristics of a soil type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilCharacteristics {
    /// Fraction of water the soil can hold (0-1). Carried in the model for
    /// display; the moisture math does not consume it.
    pub water_holding_capacity: f64,
    /// Fraction of above-field-capacity moisture lost per day (0-1)
    pub drainage_rate: f64,
}

/// Immutable soil lookup table, constructed at startup and injected into the
/// engine. Never mutated at runtime.
#[derive(Debug, Clone)]
pub struct SoilCatalog {
    entries: HashMap<SoilType, SoilCharacteristics>,
}

impl SoilCatalog {
    /// Catalog with the standard characteristics for all four soil types
    pub fn with_defaults() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            SoilType::Sandy,
            SoilCharacteristics {
                water_holding_capacity: 0.1,
                drainage_rate: 0.8,
            },
        );
        entries.insert(
            SoilType::Loam,
            SoilCharacteristics {
                water_holding_capacity: 0.2,
                drainage_rate: 0.5,
            },
        );
        entries.insert(
            SoilType::ClayLoam,
            SoilCharacteristics {
                water_holding_capacity: 0.3,
                drainage_rate: 0.3,
            },
        );
        entries.insert(
            SoilType::Clay,
            SoilCharacteristics {
                water_holding_capacity: 0.4,
                drainage_rate: 0.2,
            },
        );
        Self { entries }
    }

    /// Catalog with an explicit entry set (for tests and custom deployments)
    pub fn from_entries(entries: HashMap<SoilType, SoilCharacteristics>) -> Self {
        Self { entries }
    }

    /// Look up the characteristics for a soil type
    pub fn characteristics(&self, soil: SoilType) -> Result<&SoilCharacteristics, EngineError> {
        self.entries
            .get(&soil)
            .ok_or(EngineError::InvalidSoilType(soil))
    }

    /// Iterate catalog entries in the fixed `SoilType::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (SoilType, &SoilCharacteristics)> {
        SoilType::ALL
            .iter()
            .filter_map(|soil| self.entries.get(soil).map(|c| (*soil, c)))
    }
}

impl Default for SoilCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
