//! HTTP request handlers for the Irrigation Forecast Platform

pub mod chat;
pub mod forecast;
pub mod health;
pub mod reference;

pub use chat::chat;
pub use forecast::{create_forecast, get_forecast};
pub use health::health_check;
pub use reference::{list_crops, list_soils};
