//! Business logic services for the Irrigation Forecast Platform

pub mod assistant;
pub mod forecast;
pub mod weather;

pub use assistant::AssistantService;
pub use forecast::ForecastService;
pub use weather::WeatherService;
