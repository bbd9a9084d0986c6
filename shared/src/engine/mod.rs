//! The water-balance engine
//!
//! Pure, synchronous calculations: evapotranspiration estimation, geographic
//! soil classification, the daily moisture step, and the planning loop.

pub mod classifier;
pub mod evapotranspiration;
pub mod planner;
pub mod soil_moisture;

pub use classifier::*;
pub use evapotranspiration::*;
pub use planner::*;
pub use soil_moisture::*;
