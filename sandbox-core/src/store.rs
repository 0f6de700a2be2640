//! Element collection and selection state.
//!
//! [`ElementStore`] is the only mutable state in the crate. It owns the
//! elements in creation order, the single-or-none selection, and the counters
//! behind id / z-index allocation. Everything derived (CSS text, doc lists)
//! is recomputed from it by pure functions.

use serde::{Deserialize, Serialize};

use crate::{Element, ElementId, ElementKind, ElementOverrides};

/// Owns all elements on the canvas plus the current selection.
///
/// Elements are mutated only by whole-snapshot [`replace`](Self::replace):
/// callers clone the stored element, edit the clone, and hand the full value
/// back. This keeps "set a field back to its default by omission" expressible
/// at the call site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementStore {
    /// All elements, in creation order.
    elements: Vec<Element>,
    /// Currently selected element id, if any.
    selected: Option<ElementId>,
    /// Allocation counter behind ids and z-indices. Never reused.
    counter: u32,
    /// Bumped on every mutation; derived-value caches key off it.
    revision: u64,
}

impl ElementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new element of the given kind, merging `overrides` over the kind
    /// defaults. The new element is appended, gets the next z-index, and
    /// becomes the selection. Never fails.
    pub fn add(&mut self, kind: ElementKind, overrides: ElementOverrides) -> ElementId {
        self.counter += 1;
        let element = Element::with_defaults(kind, self.counter, overrides);
        let id = element.id.clone();
        tracing::debug!("Added element {id}");
        self.elements.push(element);
        self.selected = Some(id.clone());
        self.revision += 1;
        id
    }

    /// Select the element with the given id.
    ///
    /// An id that is not in the store clears the selection instead of leaving
    /// it dangling.
    pub fn select(&mut self, id: &ElementId) {
        self.selected = self.get(id).map(|el| el.id.clone());
        self.revision += 1;
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selected = None;
        self.revision += 1;
    }

    /// Overwrite the stored element with `entity.id` entirely with the given
    /// snapshot. Not a field merge. No-op if the id is unknown.
    pub fn replace(&mut self, entity: Element) {
        if let Some(slot) = self.elements.iter_mut().find(|el| el.id == entity.id) {
            *slot = entity;
            self.revision += 1;
        }
    }

    /// Clone an element's geometry into a new element of the same kind,
    /// offset by (+20, +20). Style and content are not copied. The clone is
    /// selected, per [`add`](Self::add). Returns the clone's id.
    pub fn clone_element(&mut self, original: &Element) -> ElementId {
        self.add(original.kind, original.clone_overrides())
    }

    /// Delete the selected element, clearing the selection. Returns the
    /// removed element, or `None` if nothing was selected.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let id = self.selected.take()?;
        let idx = self.elements.iter().position(|el| el.id == id)?;
        let removed = self.elements.remove(idx);
        tracing::debug!("Deleted element {id}");
        self.revision += 1;
        Some(removed)
    }

    /// Get an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| &el.id == id)
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Element> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// The currently selected element id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// All elements, in creation order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Number of elements in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the store holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mutation counter. Bumped on every add/select/replace/delete, so equal
    /// revisions imply equal derived values.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
