//! In-memory database adapter
//!
//! Implements the `DatabasePort` trait over hash maps guarded by a single
//! `RwLock`. Email changes write the company count and the user under one
//! write lock, so readers never see one without the other. Clones share one
//! [`CompanyLocks`] registry, so controllers built over any clone serialize
//! on the same company lock.

use std::collections::HashMap;
use std::sync::Arc;

use application::{ApplicationError, CompanyLocks, ports::DatabasePort};
use async_trait::async_trait;
use domain::{Company, CompanyId, User, UserId};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::config::AppConfig;

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    companies: HashMap<CompanyId, Company>,
}

/// In-memory user and company store
///
/// Clones share the same tables and lock registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    tables: Arc<RwLock<Tables>>,
    locks: CompanyLocks,
}

impl InMemoryDatabase {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the configured company and users
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] if the seed data is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        let (company, users) = config.seed()?;
        let db = Self::new();
        db.insert_company(company);
        for user in users {
            db.insert_user(user);
        }
        Ok(db)
    }

    /// Insert or replace a company
    pub fn insert_company(&self, company: Company) {
        self.tables.write().companies.insert(company.id(), company);
    }

    /// Insert or replace a user
    pub fn insert_user(&self, user: User) {
        self.tables.write().users.insert(user.id(), user);
    }

    /// All users, ordered by email
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.tables.read().users.values().cloned().collect();
        users.sort_by(|a, b| a.email().as_str().cmp(b.email().as_str()));
        users
    }

    /// Take a consistent copy of a company and all users
    #[must_use]
    pub fn snapshot(&self, company_id: &CompanyId) -> (Option<Company>, Vec<User>) {
        let tables = self.tables.read();
        let company = tables.companies.get(company_id).cloned();
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        drop(tables);
        users.sort_by(|a, b| a.email().as_str().cmp(b.email().as_str()));
        (company, users)
    }
}

fn unknown_company(company_id: &CompanyId) -> ApplicationError {
    ApplicationError::Persistence(format!("company {company_id} does not exist"))
}

#[async_trait]
impl DatabasePort for InMemoryDatabase {
    fn company_locks(&self) -> CompanyLocks {
        self.locks.clone()
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn get_user_by_id(&self, user_id: &UserId) -> Result<Option<User>, ApplicationError> {
        let user = self.tables.read().users.get(user_id).cloned();
        debug!(found = user.is_some(), "Retrieved user");
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id()))]
    async fn save_user(&self, user: &User) -> Result<(), ApplicationError> {
        self.insert_user(user.clone());
        debug!("Saved user");
        Ok(())
    }

    #[instrument(skip(self), fields(company_id = %company_id))]
    async fn get_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Option<Company>, ApplicationError> {
        Ok(self.tables.read().companies.get(company_id).cloned())
    }

    #[instrument(skip(self), fields(company_id = %company_id))]
    async fn save_company(
        &self,
        company_id: &CompanyId,
        number_of_employees: u32,
    ) -> Result<(), ApplicationError> {
        let mut tables = self.tables.write();
        let company = tables
            .companies
            .get_mut(company_id)
            .ok_or_else(|| unknown_company(company_id))?;
        company.set_number_of_employees(number_of_employees);
        debug!(number_of_employees, "Saved company");
        Ok(())
    }

    #[instrument(skip(self, user), fields(company_id = %company_id, user_id = %user.id()))]
    async fn save_email_change(
        &self,
        company_id: &CompanyId,
        number_of_employees: u32,
        user: &User,
    ) -> Result<(), ApplicationError> {
        let mut tables = self.tables.write();
        let company = tables
            .companies
            .get_mut(company_id)
            .ok_or_else(|| unknown_company(company_id))?;
        company.set_number_of_employees(number_of_employees);
        tables.users.insert(user.id(), user.clone());
        debug!(number_of_employees, "Saved email change");
        Ok(())
    }
}
