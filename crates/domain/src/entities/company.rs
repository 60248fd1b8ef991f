//! Company entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{CompanyId, DomainName};

/// A company and its employee headcount
///
/// `number_of_employees` is maintained by the application layer: it is
/// updated whenever a user's classification flips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    domain_name: DomainName,
    number_of_employees: u32,
}

impl Company {
    /// Create a company
    #[must_use]
    pub const fn new(id: CompanyId, domain_name: DomainName, number_of_employees: u32) -> Self {
        Self {
            id,
            domain_name,
            number_of_employees,
        }
    }

    /// Get the company ID
    #[must_use]
    pub const fn id(&self) -> CompanyId {
        self.id
    }

    /// Get the registered email domain
    #[must_use]
    pub const fn domain_name(&self) -> &DomainName {
        &self.domain_name
    }

    /// Get the current employee count
    #[must_use]
    pub const fn number_of_employees(&self) -> u32 {
        self.number_of_employees
    }

    /// Replace the employee count
    pub fn set_number_of_employees(&mut self, number_of_employees: u32) {
        self.number_of_employees = number_of_employees;
    }
}
