//! External API integrations

pub mod assistant;
pub mod weather;

pub use assistant::AssistantClient;
pub use weather::WeatherClient;
