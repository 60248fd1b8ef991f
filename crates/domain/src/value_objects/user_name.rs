//! User display name value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Longest display name kept, in characters
pub const MAX_USER_NAME_CHARS: usize = 50;

/// A normalized display name: surrounding whitespace stripped, capped at
/// [`MAX_USER_NAME_CHARS`] characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate a display name
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::UserName;
    ///
    /// let name = UserName::new("  Joe Smith \n").unwrap();
    /// assert_eq!(name.as_str(), "Joe Smith");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if nothing is left after
    /// trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "user name must not be blank".to_string(),
            ));
        }

        // Truncate on a char boundary, then drop whitespace the cut exposed
        let truncated: String = trimmed.chars().take(MAX_USER_NAME_CHARS).collect();
        Ok(Self(truncated.trim_end().to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
