//! Test fixtures for user and company testing.
//!
//! Provides convenient builders for creating test data.

use domain::{Company, CompanyId, DomainName, EmailAddress, User, UserId, UserName, UserType};

/// Builder for creating test users.
#[derive(Debug, Clone)]
pub struct TestUser {
    id: Option<UserId>,
    email: String,
    user_type: UserType,
    name: Option<String>,
}

impl TestUser {
    /// Start an employee with the given email.
    #[must_use]
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            user_type: UserType::Employee,
            name: None,
        }
    }

    /// Start a customer with the given email.
    #[must_use]
    pub fn customer(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Customer,
            ..Self::employee(email)
        }
    }

    /// Set the user ID.
    #[must_use]
    pub const fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build the user.
    ///
    /// # Panics
    ///
    /// Panics if the email or name is invalid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn build(self) -> User {
        let email = EmailAddress::new(self.email).expect("test email must be valid");
        let user = User::new(self.id.unwrap_or_default(), email, self.user_type);
        match self.name {
            Some(name) => user.with_name(UserName::new(name).expect("test name must be valid")),
            None => user,
        }
    }
}

/// Builder for creating test companies.
#[derive(Debug, Clone)]
pub struct TestCompany {
    id: Option<CompanyId>,
    domain_name: String,
    number_of_employees: u32,
}

impl TestCompany {
    /// Start a company owning `acme.com` with no employees.
    #[must_use]
    pub fn acme() -> Self {
        Self {
            id: None,
            domain_name: "acme.com".to_string(),
            number_of_employees: 0,
        }
    }

    /// Set the company ID.
    #[must_use]
    pub const fn with_id(mut self, id: CompanyId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the employee count.
    #[must_use]
    pub const fn with_employees(mut self, number_of_employees: u32) -> Self {
        self.number_of_employees = number_of_employees;
        self
    }

    /// Build the company.
    ///
    /// # Panics
    ///
    /// Panics if the domain name is invalid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn build(self) -> Company {
        Company::new(
            self.id.unwrap_or_default(),
            DomainName::new(self.domain_name).expect("test domain must be valid"),
            self.number_of_employees,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_named_customer() {
        let id = UserId::new();
        let user = TestUser::customer("ann@gmail.com")
            .with_id(id)
            .with_name("Ann")
            .build();

        assert_eq!(user.id(), id);
        assert_eq!(user.user_type(), UserType::Customer);
        assert_eq!(user.name().map(UserName::as_str), Some("Ann"));
    }

    #[test]
    fn builds_company_with_id() {
        let id = CompanyId::new();
        let company = TestCompany::acme().with_id(id).with_employees(2).build();
        assert_eq!(company.id(), id);
        assert_eq!(company.number_of_employees(), 2);
    }
}
