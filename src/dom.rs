//! Minimal document model the page view is bound to.
//!
//! The view never reaches for globals: it asks a [`Document`] for its elements
//! once, by the fixed ids in [`ids`], and keeps the returned handles. Handles
//! are cheap to clone and share state, like DOM node references, so a deferred
//! task can hold one after the handler that created it has returned.
//!
//! [`MemoryDocument`] and [`MemoryElement`] are in-memory implementations used
//! by the terminal front-end and by tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

/// Fixed element identifiers of the page.
pub mod ids {
    pub const URL_INPUT: &str = "urlInput";
    pub const SHORTEN_BUTTON: &str = "shortenBtn";
    pub const RESULT_CONTAINER: &str = "resultContainer";
    pub const SHORT_URL: &str = "shortUrl";
    pub const COPY_BUTTON: &str = "copyBtn";
    pub const COPY_MESSAGE: &str = "copyMessage";
}

/// Class that keeps the result region out of view.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class that makes the copy confirmation visible.
pub const SHOW_CLASS: &str = "show";

/// A shared handle to a page element.
///
/// All mutators take `&self`: handles alias the same underlying node.
pub trait Element: Clone {
    fn id(&self) -> String;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Current value of a form control. Empty for other elements.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Looks elements up by id.
pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// Blocking, user-visible notice (the page's `alert`).
pub trait Alert {
    fn alert(&self, message: &str);
}

#[derive(Debug, Default)]
struct ElementState {
    id: String,
    text: String,
    value: String,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

/// In-memory element. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement(Rc<RefCell<ElementState>>);

impl MemoryElement {
    pub fn new(id: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            id: id.to_string(),
            ..Default::default()
        })))
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Classes in sorted order.
    #[cfg(test)]
    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }

    #[cfg(test)]
    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }
}

/// In-memory document indexed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shortener page in its initial state: empty input, result region
    /// hidden, confirmation not shown.
    pub fn page() -> Self {
        let mut doc = Self::new();
        doc.insert(MemoryElement::new(ids::URL_INPUT));
        doc.insert(MemoryElement::new(ids::SHORTEN_BUTTON).with_text("Shorten"));
        doc.insert(MemoryElement::new(ids::RESULT_CONTAINER).with_class(HIDDEN_CLASS));
        doc.insert(MemoryElement::new(ids::SHORT_URL));
        doc.insert(MemoryElement::new(ids::COPY_BUTTON).with_text("Copy"));
        doc.insert(MemoryElement::new(ids::COPY_MESSAGE).with_text("Copied!"));
        doc
    }

    /// Add an element, replacing any previous element with the same id.
    pub fn insert(&mut self, element: MemoryElement) {
        self.elements.insert(element.id(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}

/// Alert surface that records every notice. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingAlert(Rc<RefCell<Vec<String>>>);

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = MemoryElement::new("x");
        let b = a.clone();
        b.set_text("hello");
        b.add_class("show");
        assert_eq!(a.text(), "hello");
        assert!(a.has_class("show"));
        assert!(a.same_node(&b));
    }

    #[test]
    fn test_class_toggle_is_idempotent() {
        let el = MemoryElement::new("x").with_class("hidden");
        el.add_class("hidden");
        assert_eq!(el.classes(), vec!["hidden".to_string()]);
        el.remove_class("hidden");
        el.remove_class("hidden");
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_attributes() {
        let el = MemoryElement::new("shortUrl");
        assert_eq!(el.attribute("href"), None);
        el.set_attribute("href", "https://example.com");
        assert_eq!(el.attribute("href").as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_page_has_all_ids() {
        let doc = MemoryDocument::page();
        for id in [
            ids::URL_INPUT,
            ids::SHORTEN_BUTTON,
            ids::RESULT_CONTAINER,
            ids::SHORT_URL,
            ids::COPY_BUTTON,
            ids::COPY_MESSAGE,
        ] {
            let el = doc.element_by_id(id).expect(id);
            assert_eq!(el.id(), id);
        }
        assert!(doc.element_by_id(ids::RESULT_CONTAINER).unwrap().has_class(HIDDEN_CLASS));
        assert!(!doc.element_by_id(ids::COPY_MESSAGE).unwrap().has_class(SHOW_CLASS));
    }

    #[test]
    fn test_remove_element() {
        let mut doc = MemoryDocument::page();
        assert!(doc.remove(ids::COPY_MESSAGE).is_some());
        assert!(doc.element_by_id(ids::COPY_MESSAGE).is_none());
    }

    #[test]
    fn test_recording_alert() {
        let alert = RecordingAlert::new();
        let shared = alert.clone();
        alert.alert("one");
        assert_eq!(shared.count(), 1);
        assert_eq!(shared.messages(), vec!["one".to_string()]);
    }
}
