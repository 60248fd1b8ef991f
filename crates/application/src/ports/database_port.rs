//! Database port
//!
//! Defines how the application loads and stores users and companies.

use async_trait::async_trait;
use domain::{Company, CompanyId, User, UserId};
#[cfg(test)]
use mockall::automock;

use crate::{error::ApplicationError, locks::CompanyLocks};

/// Port for user and company persistence
///
/// Storage failures are reported as [`ApplicationError::Persistence`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabasePort: Send + Sync {
    /// The lock registry shared by every caller of this store
    ///
    /// Implementations must hand out clones of one registry, never a fresh
    /// one per call.
    fn company_locks(&self) -> CompanyLocks;

    /// Load a user by ID
    ///
    /// Returns `Ok(None)` if no such user exists.
    async fn get_user_by_id(&self, user_id: &UserId) -> Result<Option<User>, ApplicationError>;

    /// Insert or replace a user
    async fn save_user(&self, user: &User) -> Result<(), ApplicationError>;

    /// Load a company by ID
    ///
    /// Returns `Ok(None)` if no such company exists.
    async fn get_company(&self, company_id: &CompanyId)
    -> Result<Option<Company>, ApplicationError>;

    /// Store a company's employee count
    async fn save_company(
        &self,
        company_id: &CompanyId,
        number_of_employees: u32,
    ) -> Result<(), ApplicationError>;

    /// Store the result of an email change: the company count, then the user
    ///
    /// Adapters that can write both records atomically must override this so
    /// that no reader observes one write without the other. The default
    /// issues the two writes in sequence and is only safe for a single caller.
    async fn save_email_change(
        &self,
        company_id: &CompanyId,
        number_of_employees: u32,
        user: &User,
    ) -> Result<(), ApplicationError> {
        self.save_company(company_id, number_of_employees).await?;
        self.save_user(user).await
    }
}
