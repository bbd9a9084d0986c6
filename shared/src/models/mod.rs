//! Domain models for the Irrigation Forecast Platform

mod crop;
mod schedule;
mod soil;
mod weather;

pub use crop::*;
pub use schedule::*;
pub use soil::*;
pub use weather::*;
