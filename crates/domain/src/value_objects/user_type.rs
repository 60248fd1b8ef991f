//! Employee / customer classification

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{DomainName, EmailAddress};
use crate::errors::DomainError;

/// Whether a user works for the company or buys from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Email domain matches the company domain
    Employee,
    /// Anyone else
    Customer,
}

impl UserType {
    /// Classify an email against the company's domain
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::{DomainName, EmailAddress, UserType};
    ///
    /// let acme = DomainName::new("acme.com").unwrap();
    /// let joe = EmailAddress::new("joe@acme.com").unwrap();
    /// let ann = EmailAddress::new("ann@gmail.com").unwrap();
    ///
    /// assert_eq!(UserType::classify(&joe, &acme), UserType::Employee);
    /// assert_eq!(UserType::classify(&ann, &acme), UserType::Customer);
    /// ```
    #[must_use]
    pub fn classify(email: &EmailAddress, company_domain_name: &DomainName) -> Self {
        if company_domain_name.matches(email.domain()) {
            Self::Employee
        } else {
            Self::Customer
        }
    }

    /// Check if this is the employee classification
    #[must_use]
    pub const fn is_employee(self) -> bool {
        matches!(self, Self::Employee)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl FromStr for UserType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "customer" => Ok(Self::Customer),
            other => Err(DomainError::ValidationError(format!(
                "unknown user type '{other}', expected 'employee' or 'customer'"
            ))),
        }
    }
}
