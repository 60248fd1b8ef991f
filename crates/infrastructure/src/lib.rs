//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer with in-memory
//! adapters, and provides configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod telemetry;
#[cfg(test)]
pub mod testing;

pub use adapters::*;
pub use crate::config::{
    AppConfig, CompanyConfig, Environment, LogFormat, LoggingConfig, UserSeedConfig,
};
pub use persistence::InMemoryDatabase;
pub use telemetry::{TelemetryError, init_logging};
