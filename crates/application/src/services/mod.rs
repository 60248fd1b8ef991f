//! Application services - Use case implementations

mod message_renderer;
mod user_controller;

pub use message_renderer::{BodyRenderer, FooterRenderer, HeaderRenderer, MessageRenderer, Renderer};
pub use user_controller::{EmailChangeOutcome, UserController};
