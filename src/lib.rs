//! Temperature conversion HTTP service.
//!
//! A small axum service that converts temperatures between Celsius,
//! Fahrenheit, and Kelvin:
//!
//! ```text
//! GET /convert-temp?temp=100&scale=celsius&target_scale=fahrenheit
//!
//! {"converted_temp": 212.0, "target_scale": "fahrenheit"}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Request errors and their HTTP rendering
//! - [`conversion`]: Temperature scales and conversion math
//! - [`api`]: HTTP router and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::RequestError;
