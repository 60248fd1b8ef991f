//! Application configuration
//!
//! Split into focused sub-modules:
//! - `company`: the company record and the users seeded into the store
//! - `logging`: log level and output format
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, then `SANDBOX__*` environment variables
//! (e.g. `SANDBOX__LOGGING__LEVEL=debug`).

mod company;
mod logging;

use std::{fmt, path::Path};

use application::ApplicationError;
use domain::{Company, User};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use company::{CompanyConfig, UserSeedConfig};
pub use logging::{LogFormat, LoggingConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "SANDBOX";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// The company whose headcount is maintained
    #[serde(default)]
    pub company: CompanyConfig,

    /// Users loaded into the store at startup
    #[serde(default)]
    pub users: Vec<UserSeedConfig>,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or does not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or does not
    /// deserialize.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Convert the seed sections into domain objects
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] for a malformed company
    /// domain, a malformed user email or name, or duplicate user ids.
    pub fn seed(&self) -> Result<(Company, Vec<User>), ApplicationError> {
        let company = self
            .company
            .to_company()
            .map_err(|e| ApplicationError::Configuration(format!("company: {e}")))?;

        let mut users = Vec::with_capacity(self.users.len());
        for (index, seed) in self.users.iter().enumerate() {
            let user = seed
                .to_user()
                .map_err(|e| ApplicationError::Configuration(format!("users[{index}]: {e}")))?;
            if users.iter().any(|u: &User| u.id() == user.id()) {
                return Err(ApplicationError::Configuration(format!(
                    "users[{index}]: duplicate id {}",
                    user.id()
                )));
            }
            users.push(user);
        }

        let employees = users.iter().filter(|u| u.user_type().is_employee()).count();
        if usize::try_from(company.number_of_employees()).ok() != Some(employees) {
            warn!(
                configured = company.number_of_employees(),
                seeded_employees = employees,
                "Company headcount does not match seeded employees"
            );
        }

        Ok((company, users))
    }

    /// Check that the seed sections are usable
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::seed`].
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.seed().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::UserType;

    use super::*;

    const SAMPLE: &str = r#"
environment = "production"

[logging]
level = "debug"
format = "json"

[company]
id = "6f1c2d4e-0000-4000-8000-000000000001"
domain_name = "acme.com"
number_of_employees = 1

[[users]]
id = "6f1c2d4e-0000-4000-8000-0000000000a1"
email = "joe@acme.com"
type = "employee"
name = "Joe"

[[users]]
id = "6f1c2d4e-0000-4000-8000-0000000000a2"
email = "ann@gmail.com"
type = "customer"
"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn environment_parsing() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Development);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.users.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn loads_from_file() {
        let file = write_config(SAMPLE);
        let config = AppConfig::load_from(file.path()).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.company.domain_name, "acme.com");
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].user_type, UserType::Employee);
    }

    #[test]
    fn seed_builds_domain_objects() {
        let file = write_config(SAMPLE);
        let config = AppConfig::load_from(file.path()).unwrap();

        let (company, users) = config.seed().unwrap();

        assert_eq!(company.number_of_employees(), 1);
        assert_eq!(company.domain_name().as_str(), "acme.com");
        assert_eq!(users[0].email().as_str(), "joe@acme.com");
        assert_eq!(users[1].user_type(), UserType::Customer);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load_from(Path::new("/nonexistent/sandbox.toml")).is_err());
    }

    #[test]
    fn malformed_seed_email_is_a_configuration_error() {
        let mut config = AppConfig::default();
        config.users.push(UserSeedConfig {
            id: domain::UserId::new(),
            email: "joe-no-at-sign".to_string(),
            user_type: UserType::Customer,
            name: None,
        });

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains("users[0]"));
    }

    #[test]
    fn duplicate_user_ids_are_rejected() {
        let id = domain::UserId::new();
        let seed = UserSeedConfig {
            id,
            email: "joe@acme.com".to_string(),
            user_type: UserType::Employee,
            name: None,
        };
        let config = AppConfig {
            users: vec![seed.clone(), seed],
            ..AppConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }
}
