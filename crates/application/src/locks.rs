//! Per-company locks serializing headcount updates
//!
//! A registry is owned by the database adapter, so every controller working
//! on the same store waits on the same lock for a given company.

use std::{collections::HashMap, sync::Arc};

use domain::CompanyId;

/// Registry of per-company locks
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct CompanyLocks {
    locks: Arc<parking_lot::Mutex<HashMap<CompanyId, Arc<tokio::sync::Mutex<()>>>>>,
}

impl CompanyLocks {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the lock guarding a company and its users
    #[must_use]
    pub fn lock_for(&self, company_id: &CompanyId) -> Arc<tokio::sync::Mutex<()>> {
        Arc::clone(self.locks.lock().entry(*company_id).or_default())
    }
}
