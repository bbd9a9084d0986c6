//! Engine error types

use thiserror::Error;

use crate::models::SoilType;

/// Errors produced by the water-balance engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested crop has no entry in the crop catalog. Fatal to the
    /// request; callers must surface this, never substitute a default crop.
    #[error("unknown crop type: {0}")]
    UnknownCropType(String),

    /// The soil type has no entry in the soil catalog. Unreachable with the
    /// default catalog; kept as a defensive check for injected catalogs.
    #[error("soil type '{0}' has no catalog entry")]
    InvalidSoilType(SoilType),
}
