//! Email address value object with validation
//!
//! The domain of an address is everything after its first `@`. Addresses
//! without an `@` are rejected up front instead of being split blindly.
//! Accepted input is stored exactly as given; equality is case-sensitive.
//!
//! # Examples
//!
//! ```
//! use domain::EmailAddress;
//!
//! let email = EmailAddress::new("Joe@Acme.COM").unwrap();
//! assert_eq!(email.as_str(), "Joe@Acme.COM");
//! assert_eq!(email.domain(), "Acme.COM");
//!
//! assert!(EmailAddress::new("joe-no-at-sign").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress {
    #[validate(email)]
    value: String,
}

impl EmailAddress {
    /// Create a new email address, validating the format
    ///
    /// The input is kept verbatim. Surrounding whitespace makes it invalid
    /// rather than being stripped.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidEmailAddress`] if the input has no `@`
    /// separator or is otherwise not a valid address.
    pub fn new(email: impl Into<String>) -> Result<Self, DomainError> {
        let value = email.into();

        if !value.contains('@') {
            return Err(DomainError::InvalidEmailAddress(format!(
                "missing '@' separator in '{value}'"
            )));
        }

        let candidate = Self { value };
        candidate
            .validate()
            .map_err(|e| DomainError::InvalidEmailAddress(e.to_string()))?;

        Ok(candidate)
    }

    /// Get the email address as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the local part (before the first @)
    pub fn local_part(&self) -> &str {
        self.value
            .split_once('@')
            .map_or(self.value.as_str(), |(local, _)| local)
    }

    /// Get the domain part (after the first @)
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::EmailAddress;
    ///
    /// let email = EmailAddress::new("user@mail.example.com").unwrap();
    /// assert_eq!(email.domain(), "mail.example.com");
    /// ```
    pub fn domain(&self) -> &str {
        self.value.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.value
    }
}
