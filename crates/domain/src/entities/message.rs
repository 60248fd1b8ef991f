//! Renderable message

use serde::{Deserialize, Serialize};

/// A message made of three independent text sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Title text
    pub header: String,
    /// Main content
    pub body: String,
    /// Closing text
    pub footer: String,
}

impl Message {
    /// Create a message from its three sections
    #[must_use]
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            footer: footer.into(),
        }
    }
}
