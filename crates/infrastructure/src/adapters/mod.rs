//! Adapters implementing application ports

mod message_bus_adapter;

pub use message_bus_adapter::{EmailChangedNotification, InMemoryMessageBus, email_changed_message};
