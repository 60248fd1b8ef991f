//! Company and user seed configuration.

use domain::{
    Company, CompanyId, DomainError, DomainName, EmailAddress, User, UserId, UserName, UserType,
};
use serde::{Deserialize, Serialize};

/// The company record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Company ID (random when omitted)
    #[serde(default)]
    pub id: CompanyId,

    /// Email domain identifying employees
    #[serde(default = "default_domain_name")]
    pub domain_name: String,

    /// Current employee count
    #[serde(default)]
    pub number_of_employees: u32,
}

fn default_domain_name() -> String {
    "example.com".to_string()
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            id: CompanyId::new(),
            domain_name: default_domain_name(),
            number_of_employees: 0,
        }
    }
}

impl CompanyConfig {
    /// Build the company entity
    ///
    /// # Errors
    ///
    /// Returns an error if the domain name is malformed.
    pub fn to_company(&self) -> Result<Company, DomainError> {
        Ok(Company::new(
            self.id,
            DomainName::new(&self.domain_name)?,
            self.number_of_employees,
        ))
    }
}

/// A user to load into the store at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeedConfig {
    /// User ID
    pub id: UserId,

    /// Email address
    pub email: String,

    /// Stored classification
    #[serde(rename = "type")]
    pub user_type: UserType,

    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
}

impl UserSeedConfig {
    /// Build the user entity
    ///
    /// # Errors
    ///
    /// Returns an error if the email or name is malformed.
    pub fn to_user(&self) -> Result<User, DomainError> {
        let user = User::new(self.id, EmailAddress::new(&self.email)?, self.user_type);
        match &self.name {
            Some(name) => Ok(user.with_name(UserName::new(name)?)),
            None => Ok(user),
        }
    }
}
