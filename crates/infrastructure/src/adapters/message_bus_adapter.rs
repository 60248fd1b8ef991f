//! In-memory message bus adapter
//!
//! Implements the `MessageBusPort` trait by rendering each notification to
//! HTML and keeping it in an outbox that callers can inspect.

use std::sync::Arc;

use application::{ApplicationError, MessageRenderer, Renderer, ports::MessageBusPort};
use async_trait::async_trait;
use domain::{EmailAddress, Message, UserId};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::info;

/// A notification that was handed to the bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailChangedNotification {
    /// The user whose email changed
    pub user_id: UserId,
    /// The new address
    pub new_email: EmailAddress,
    /// Rendered HTML body
    pub html: String,
}

/// Build the message announcing an email change
#[must_use]
pub fn email_changed_message(user_id: &UserId, new_email: &EmailAddress) -> Message {
    Message::new(
        "Email address changed",
        format!("User {user_id} now receives mail at {new_email}."),
        "You are receiving this because an account was updated.",
    )
}

/// Message bus that records notifications instead of delivering them
///
/// Clones share the same outbox.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageBus {
    renderer: Arc<MessageRenderer>,
    outbox: Arc<RwLock<Vec<EmailChangedNotification>>>,
}

impl InMemoryMessageBus {
    /// Create a bus with an empty outbox and the default renderer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus that renders with a custom renderer
    #[must_use]
    pub fn with_renderer(renderer: MessageRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
            outbox: Arc::default(),
        }
    }

    /// Notifications sent so far, oldest first
    #[must_use]
    pub fn notifications(&self) -> Vec<EmailChangedNotification> {
        self.outbox.read().clone()
    }
}

#[async_trait]
impl MessageBusPort for InMemoryMessageBus {
    async fn send_email_changed_message(
        &self,
        user_id: &UserId,
        new_email: &EmailAddress,
    ) -> Result<(), ApplicationError> {
        let html = self
            .renderer
            .render(&email_changed_message(user_id, new_email));

        info!(user_id = %user_id, new_email = %new_email, "Email changed notification sent");

        self.outbox.write().push(EmailChangedNotification {
            user_id: *user_id,
            new_email: new_email.clone(),
            html,
        });
        Ok(())
    }
}
