//! # Designer Session
//!
//! The live state of one open builder session: the ordered element
//! sequence plus the "currently selected element" pointer. Every
//! mutation goes through the methods here so the invariants (unique
//! ids, gap-free order, clamped insertion) are enforced in exactly one
//! place. Nothing outside this module writes the sequence directly.
//!
//! The builder is single-threaded and event-driven: drag releases,
//! property commits, and save/publish clicks each run to completion
//! before the next event, so the session needs no interior locking.

pub mod dnd;
pub mod pending;

pub use dnd::{DragSource, DropOutcome, DropTarget, Half, handle_drop};
pub use pending::{ActionState, PendingAction};

use crate::element::ElementInstance;
use crate::error::FormError;

/// One open editing session over a form's content.
#[derive(Debug, Clone, Default)]
pub struct DesignerSession {
    elements: Vec<ElementInstance>,
    selected: Option<String>,
}

impl DesignerSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered element sequence, top to bottom.
    pub fn elements(&self) -> &[ElementInstance] {
        &self.elements
    }

    /// The currently selected element, if any.
    pub fn selected(&self) -> Option<&ElementInstance> {
        let id = self.selected.as_deref()?;
        self.elements.iter().find(|e| e.id == id)
    }

    /// Position of an element by id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Insert `element` at `index`, shifting subsequent elements right.
    ///
    /// The index is clamped to `[0, len]`, so an out-of-range insert
    /// appends. Inserting an id that is already present is a no-op;
    /// ids are unique within a document at all times.
    pub fn add_element(&mut self, index: usize, element: ElementInstance) {
        if self.index_of(&element.id).is_some() {
            return;
        }
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
    }

    /// Remove the element with `id`. Returns whether anything was
    /// removed; clears the selection when the removed element held it.
    pub fn remove_element(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.elements.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Replace the element with `id` in place, preserving its position,
    /// and select it (so a property commit keeps the element focused).
    ///
    /// Returns `false` without touching anything when the id is absent,
    /// the documented no-op case.
    pub fn update_element(&mut self, id: &str, element: ElementInstance) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.elements[index] = element;
        self.selected = Some(id.to_string());
        true
    }

    /// Set or clear the selection. An id not present in the sequence
    /// clears it.
    pub fn set_selection(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.index_of(id).is_some())
            .map(str::to_string);
    }

    /// Load a persisted document's content wholesale, clearing the
    /// selection. Rejects duplicate ids: a document violating the
    /// unique-id invariant is corrupt.
    pub fn replace_all(&mut self, elements: Vec<ElementInstance>) -> Result<(), FormError> {
        let mut seen = std::collections::HashSet::new();
        for element in &elements {
            if !seen.insert(element.id.as_str()) {
                return Err(FormError::Layout(format!(
                    "duplicate element id: {}",
                    element.id
                )));
            }
        }
        self.elements = elements;
        self.selected = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::construct;

    fn text(id: &str) -> ElementInstance {
        construct("TextField", id).unwrap()
    }

    fn ids(session: &DesignerSession) -> Vec<&str> {
        session.elements().iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_add_orders_and_shifts() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.add_element(0, text("b"));
        session.add_element(1, text("c"));
        assert_eq!(ids(&session), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_add_index_clamped() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        // length + 5 behaves exactly like length (append)
        session.add_element(6, text("b"));
        assert_eq!(ids(&session), vec!["a", "b"]);
    }

    #[test]
    fn test_add_duplicate_id_is_noop() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.add_element(0, text("a"));
        assert_eq!(session.elements().len(), 1);
    }

    #[test]
    fn test_length_tracks_inserts_minus_removes() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.add_element(1, text("b"));
        session.add_element(2, text("c"));
        assert!(session.remove_element("b"));
        assert!(!session.remove_element("missing"));
        assert_eq!(session.elements().len(), 2);
        assert_eq!(ids(&session), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.set_selection(Some("a"));
        assert!(session.selected().is_some());
        session.remove_element("a");
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_remove_other_keeps_selection() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.add_element(1, text("b"));
        session.set_selection(Some("a"));
        session.remove_element("b");
        assert_eq!(session.selected().unwrap().id, "a");
    }

    #[test]
    fn test_update_preserves_position_and_selects() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.add_element(1, text("b"));
        session.add_element(2, text("c"));

        let replacement = session.elements()[1]
            .apply_attributes(serde_json::json!({
                "label": "Updated",
                "helperText": "",
                "required": true,
                "placeHolder": ""
            }))
            .unwrap();
        assert!(session.update_element("b", replacement));

        assert_eq!(session.index_of("b"), Some(1));
        assert_eq!(session.selected().unwrap().id, "b");
        assert!(session.elements()[1].element.validate("x"));
        assert!(!session.elements()[1].element.validate(""));
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        assert!(!session.update_element("ghost", text("ghost")));
        assert_eq!(ids(&session), vec!["a"]);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_selection_requires_presence() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.set_selection(Some("ghost"));
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_replace_all_rejects_duplicates() {
        let mut session = DesignerSession::new();
        let err = session
            .replace_all(vec![text("a"), text("a")])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
        assert!(session.elements().is_empty());
    }

    #[test]
    fn test_replace_all_clears_selection() {
        let mut session = DesignerSession::new();
        session.add_element(0, text("a"));
        session.set_selection(Some("a"));
        session.replace_all(vec![text("x"), text("y")]).unwrap();
        assert!(session.selected().is_none());
        assert_eq!(ids(&session), vec!["x", "y"]);
    }
}
