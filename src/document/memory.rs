use super::{Document, Element};

/// A document held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    elements: Vec<(String, Element)>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    pub fn with_text(self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_element(id, Element::from_text(text))
    }

    /// Replaces an existing element with the same id in place.
    pub fn insert(&mut self, id: impl Into<String>, element: Element) {
        let id = id.into();
        match self.elements.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = element,
            None => self.elements.push((id, element)),
        }
    }
}

impl Document for InMemoryDocument {
    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, element)| element.clone())
    }

    fn ids(&self) -> Vec<String> {
        self.elements.iter().map(|(id, _)| id.clone()).collect()
    }
}
