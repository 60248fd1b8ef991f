//! Composite message renderer
//!
//! A [`MessageRenderer`] owns an ordered list of sub-renderers, each wrapping
//! one field of a [`Message`] in fixed markup, and concatenates their output.
//! Rendering is pure: the same message always yields the same string.

use std::fmt;

use domain::Message;

/// Turns a message into a string
pub trait Renderer: Send + Sync {
    /// Render the message
    fn render(&self, message: &Message) -> String;
}

/// Wraps the header as `<head><title>…</title></head>`
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderRenderer;

impl Renderer for HeaderRenderer {
    fn render(&self, message: &Message) -> String {
        format!("<head><title>{}</title></head>", message.header)
    }
}

/// Wraps the body as `<body>…</body>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyRenderer;

impl Renderer for BodyRenderer {
    fn render(&self, message: &Message) -> String {
        format!("<body>{}</body>", message.body)
    }
}

/// Wraps the footer as `<footer>…</footer>`
#[derive(Debug, Clone, Copy, Default)]
pub struct FooterRenderer;

impl Renderer for FooterRenderer {
    fn render(&self, message: &Message) -> String {
        format!("<footer>{}</footer>", message.footer)
    }
}

/// Renders a message by running each sub-renderer in registration order
///
/// # Examples
///
/// ```
/// use application::{MessageRenderer, Renderer};
/// use domain::Message;
///
/// let html = MessageRenderer::new().render(&Message::new("a", "b", "c"));
/// assert_eq!(
///     html,
///     "<head><title>a</title></head><body>b</body><footer>c</footer>"
/// );
/// ```
pub struct MessageRenderer {
    sub_renderers: Vec<Box<dyn Renderer>>,
}

impl fmt::Debug for MessageRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageRenderer")
            .field("sub_renderers", &self.sub_renderers.len())
            .finish()
    }
}

impl MessageRenderer {
    /// Create a renderer with the header, body and footer sub-renderers
    #[must_use]
    pub fn new() -> Self {
        Self {
            sub_renderers: vec![
                Box::new(HeaderRenderer),
                Box::new(BodyRenderer),
                Box::new(FooterRenderer),
            ],
        }
    }

    /// Append a sub-renderer after the existing ones
    #[must_use]
    pub fn with_sub_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.sub_renderers.push(Box::new(renderer));
        self
    }

    /// The sub-renderers, in the order they run
    #[must_use]
    pub fn sub_renderers(&self) -> &[Box<dyn Renderer>] {
        &self.sub_renderers
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MessageRenderer {
    fn render(&self, message: &Message) -> String {
        self.sub_renderers
            .iter()
            .map(|renderer| renderer.render(message))
            .collect()
    }
}
