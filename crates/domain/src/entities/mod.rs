//! Domain entities - Objects with identity and lifecycle

mod company;
mod message;
mod user;

pub use company::Company;
pub use message::Message;
pub use user::User;
