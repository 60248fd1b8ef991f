//! User entity
//!
//! A user is classified as [`UserType::Employee`] or [`UserType::Customer`]
//! depending on whether their email domain matches the company domain.
//! Changing the email may flip that classification, which in turn moves the
//! company's employee count by exactly one.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{DomainName, EmailAddress, UserId, UserName, UserType};

/// A user of the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    #[serde(rename = "type")]
    user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<UserName>,
}

impl User {
    /// Create a user from persisted data
    #[must_use]
    pub const fn new(id: UserId, email: EmailAddress, user_type: UserType) -> Self {
        Self {
            id,
            email,
            user_type,
            name: None,
        }
    }

    /// Attach a display name
    #[must_use]
    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = Some(name);
        self
    }

    /// Get the user ID
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Get the current email address
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Get the current classification
    #[must_use]
    pub const fn user_type(&self) -> UserType {
        self.user_type
    }

    /// Get the display name, if one was set
    #[must_use]
    pub const fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    /// Change the email address and reclassify the user
    ///
    /// Returns the company's employee count after the change. The count moves
    /// only when the classification flips: `+1` on becoming an employee,
    /// `-1` on ceasing to be one. Setting the current email again is a no-op
    /// that returns `number_of_employees` untouched.
    ///
    /// Nothing is mutated when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::{DomainName, EmailAddress, User, UserId, UserType};
    ///
    /// let acme = DomainName::new("acme.com").unwrap();
    /// let mut user = User::new(
    ///     UserId::new(),
    ///     EmailAddress::new("joe@gmail.com").unwrap(),
    ///     UserType::Customer,
    /// );
    ///
    /// let count = user.change_email("joe@acme.com", &acme, 10).unwrap();
    /// assert_eq!(count, 11);
    /// assert_eq!(user.user_type(), UserType::Employee);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidEmailAddress`] if `new_email` is malformed
    ///   (e.g. has no `@`).
    /// - [`DomainError::ValidationError`] if the adjusted count would fall
    ///   below zero or overflow.
    pub fn change_email(
        &mut self,
        new_email: &str,
        company_domain_name: &DomainName,
        number_of_employees: u32,
    ) -> Result<u32, DomainError> {
        let new_email = EmailAddress::new(new_email)?;

        if new_email == self.email {
            return Ok(number_of_employees);
        }

        let new_type = UserType::classify(&new_email, company_domain_name);

        let new_count = match (self.user_type, new_type) {
            (UserType::Customer, UserType::Employee) => {
                number_of_employees.checked_add(1).ok_or_else(|| {
                    DomainError::ValidationError("employee count overflow".to_string())
                })?
            },
            (UserType::Employee, UserType::Customer) => {
                number_of_employees.checked_sub(1).ok_or_else(|| {
                    DomainError::ValidationError(format!(
                        "user {} is an employee but the company has no employees",
                        self.id
                    ))
                })?
            },
            _ => number_of_employees,
        };

        self.email = new_email;
        self.user_type = new_type;

        Ok(new_count)
    }

    /// Set a new display name
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ValidationError`] if the name is blank.
    pub fn rename(&mut self, new_name: &str) -> Result<(), DomainError> {
        self.name = Some(UserName::new(new_name)?);
        Ok(())
    }
}
