//! Value Objects - Immutable, identity-less domain primitives

mod company_id;
mod domain_name;
mod email_address;
mod user_id;
mod user_name;
mod user_type;

pub use company_id::CompanyId;
pub use domain_name::DomainName;
pub use email_address::EmailAddress;
pub use user_id::UserId;
pub use user_name::{MAX_USER_NAME_CHARS, UserName};
pub use user_type::UserType;
