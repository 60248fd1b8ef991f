//! Domain layer for the user/company sandbox
//!
//! Contains the user classification rules, the company headcount they
//! affect, the message type consumed by renderers, and domain errors.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
