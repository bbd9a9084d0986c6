//! Shared types and calculations for the Irrigation Forecast Platform
//!
//! This crate contains the water-balance engine and the domain models shared
//! between the backend, the frontend (via WASM), and other components of the
//! system. It is framework-free: everything here is pure and synchronous.

pub mod engine;
pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
