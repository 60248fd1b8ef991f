//! Company email domain value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The email domain a company registers for its employees, e.g. `acme.com`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);

impl DomainName {
    /// Create a domain name from the exact input text
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDomainName`] for empty input, input
    /// containing whitespace, or input containing `@`.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into();

        if value.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }
        if value.contains('@') || value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDomainName(value));
        }

        Ok(Self(value))
    }

    /// Get the domain name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether an email domain matches this company domain
    ///
    /// The comparison is exact, including letter case.
    pub fn matches(&self, email_domain: &str) -> bool {
        self.0 == email_domain
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DomainName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for DomainName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DomainName> for String {
    fn from(name: DomainName) -> Self {
        name.0
    }
}
