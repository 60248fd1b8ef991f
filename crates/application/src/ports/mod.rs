//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod database_port;
mod message_bus_port;

pub use database_port::DatabasePort;
#[cfg(test)]
pub use database_port::MockDatabasePort;
pub use message_bus_port::MessageBusPort;
#[cfg(test)]
pub use message_bus_port::MockMessageBusPort;
