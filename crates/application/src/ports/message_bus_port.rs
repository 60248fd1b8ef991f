//! Message bus port
//!
//! Fire-and-forget notifications about user changes. Delivery guarantees
//! belong to the adapter.

use async_trait::async_trait;
use domain::{EmailAddress, UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for publishing user notifications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageBusPort: Send + Sync {
    /// Announce that a user's email address changed
    async fn send_email_changed_message(
        &self,
        user_id: &UserId,
        new_email: &EmailAddress,
    ) -> Result<(), ApplicationError>;
}
