pub mod markdown;
pub mod memory;

pub use markdown::MarkdownDocument;
pub use memory::InMemoryDocument;

/// Snapshot of an element's text taken at lookup time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Rendered text, markup removed.
    pub inner_text: Option<String>,
    /// Bare text without layout, including text that is not rendered.
    pub text_content: Option<String>,
}

impl Element {
    pub fn new(inner_text: Option<String>, text_content: Option<String>) -> Self {
        Self {
            inner_text,
            text_content,
        }
    }

    /// Element whose rendered and bare text are the same string.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            inner_text: Some(text.clone()),
            text_content: Some(text),
        }
    }

    /// The text a user would copy: rendered text when there is any, bare text
    /// otherwise, trimmed at both ends.
    pub fn visible_text(&self) -> &str {
        self.inner_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.text_content.as_deref())
            .unwrap_or_default()
            .trim()
    }
}

/// Element lookup by identifier.
pub trait Document: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<Element>;

    /// Addressable identifiers in document order.
    fn ids(&self) -> Vec<String>;
}
