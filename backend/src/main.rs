//! Irrigation Forecast Platform - Backend Server
//!
//! Forecasts daily irrigation needs for a field from its location, crop,
//! and weather outlook, and serves the schedules over HTTP.

use axum::{routing::get, Router};
use shared::engine::{IrrigationPlanner, IrrigationPolicy};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod models;
mod routes;
mod services;
mod storage;

pub use config::Config;

use external::{AssistantClient, WeatherClient};
use services::{AssistantService, ForecastService, WeatherService};
use storage::{ForecastStore, MemoryStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forecasts: ForecastService,
    pub assistant: AssistantService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ifp_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Irrigation Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_empty() {
        tracing::warn!("No weather API key configured; forecast creation will fail");
    }
    if config.assistant.api_key.is_empty() {
        tracing::warn!("No assistant API key configured; chat endpoint will return 503");
    }

    // Build the store, engine, and services
    let store: Arc<dyn ForecastStore> = Arc::new(MemoryStore::new());

    let weather_client = WeatherClient::with_base_url(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
    )
    .with_timeout(Duration::from_secs(config.weather.timeout_seconds));
    let assistant_client = AssistantClient::with_base_url(
        config.assistant.api_key.clone(),
        config.assistant.api_endpoint.clone(),
        config.assistant.model.clone(),
    )
    .with_timeout(Duration::from_secs(config.assistant.timeout_seconds));

    let planner = IrrigationPlanner::with_policy(IrrigationPolicy {
        skip_when_rain_covers_demand: config.forecast.skip_when_rain_covers_demand,
    });

    let weather = WeatherService::new(weather_client);
    let forecasts = ForecastService::new(
        Arc::clone(&store),
        weather,
        planner,
        config.forecast.default_initial_moisture,
    );
    let assistant = AssistantService::new(assistant_client, forecasts.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        forecasts,
        assistant,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Irrigation Forecast Platform API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
