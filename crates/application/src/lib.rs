//! Application layer - Use cases and orchestration
//!
//! Contains the user controller, the composite message renderer and the
//! port definitions adapters implement.

pub mod error;
pub mod locks;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use locks::CompanyLocks;
pub use ports::*;
pub use services::*;
