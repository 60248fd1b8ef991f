//! Persistence module
//!
//! In-memory storage for users and companies.

pub mod in_memory_database;

pub use in_memory_database::InMemoryDatabase;
