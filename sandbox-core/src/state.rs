//! The complete editor state and its derived values.
//!
//! Hosts own one [`EditorState`] and pull derived values from it on demand.
//! There is no observer graph: the element CSS is memoized against the
//! store's revision counter and recomputed lazily when a mutation
//! invalidates it; everything else is cheap enough to derive on every read.

use serde::{Deserialize, Serialize};

use crate::{
    docs, parse_css, selection_css, synth, DocEntry, DocTable, Element, ElementId, ElementKind,
    ElementOverrides, ElementStore, GestureEngine, GestureEvent, LayoutState, SandboxError,
    SandboxResult,
};

/// Which panel the user is editing: individual elements or the container
/// layout. Gestures only manipulate elements in individual mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Manipulate and read CSS for single elements.
    #[default]
    Individual,
    /// Configure and read CSS for the container layout.
    Layout,
}

/// Memoized element CSS, keyed by the store revision it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CssMemo {
    revision: u64,
    text: String,
}

/// The complete sandbox state: the element store, the layout configurations,
/// the gesture engine, and the edit mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorState {
    /// The element collection and selection.
    pub store: ElementStore,
    /// Per-mode layout configurations and the active mode.
    pub layout: LayoutState,
    /// Gesture engine (session context, grid, container bounds).
    pub engine: GestureEngine,
    /// Current edit mode.
    pub mode: EditMode,
    #[serde(skip)]
    css_memo: Option<CssMemo>,
}

impl EditorState {
    /// Create an empty editor state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element and select it. Convenience passthrough to the store.
    pub fn add_element(&mut self, kind: ElementKind, overrides: ElementOverrides) -> ElementId {
        self.store.add(kind, overrides)
    }

    /// Look up an element by id, for host-side queries that must distinguish
    /// "missing" from "present".
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::ElementNotFound`] when no element has the id.
    pub fn element(&self, id: &ElementId) -> SandboxResult<&Element> {
        self.store
            .get(id)
            .ok_or_else(|| SandboxError::ElementNotFound(id.to_string()))
    }

    /// Serialize the full editor state to JSON for host-side persistence.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> SandboxResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore an editor state from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::Serialization`] on malformed input.
    pub fn from_json(json: &str) -> SandboxResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Feed a gesture event from the pointer library into the engine.
    ///
    /// Ignored outside individual mode - in layout mode the elements are
    /// arranged by the container, not by the user.
    pub fn handle_gesture(&mut self, event: &GestureEvent) {
        if self.mode == EditMode::Individual {
            self.engine.handle(&mut self.store, event);
        }
    }

    /// The CSS text for the selected element, or the placeholder comment
    /// when nothing is selected.
    ///
    /// Memoized against the store revision: repeated reads between mutations
    /// return the cached text without re-deriving it.
    pub fn individual_css(&mut self) -> String {
        let revision = self.store.revision();
        if let Some(memo) = &self.css_memo {
            if memo.revision == revision {
                return memo.text.clone();
            }
        }
        let text = selection_css(self.store.selected());
        self.css_memo = Some(CssMemo {
            revision,
            text: text.clone(),
        });
        text
    }

    /// The container CSS for the active layout mode.
    #[must_use]
    pub fn layout_css(&self) -> String {
        synth::layout_css(self.layout.active, &self.layout)
    }

    /// Inline-style pairs for the container node in the active layout mode.
    #[must_use]
    pub fn sandbox_style(&self) -> Vec<(&'static str, String)> {
        synth::sandbox_style(self.layout.active, &self.layout)
    }

    /// Merge a hand-edited CSS text into the selected element.
    ///
    /// Recognized declarations update their fields; everything else is
    /// ignored. No-op (returning `false`) when nothing is selected or when
    /// no recognized declaration is found.
    pub fn apply_css_edit(&mut self, text: &str) -> bool {
        let Some(selected) = self.store.selected() else {
            tracing::debug!("CSS edit with no selection ignored");
            return false;
        };
        let update = parse_css(text);
        if update.is_empty() {
            return false;
        }
        let mut el = selected.clone();
        update.apply_to(&mut el);
        self.store.replace(el);
        true
    }

    /// Documentation entries for the current element CSS, ordered for the
    /// teaching panel. Empty when nothing is selected.
    pub fn doc_entries(&mut self, table: &DocTable) -> Vec<DocEntry> {
        if self.store.selected().is_none() {
            return Vec::new();
        }
        let css = self.individual_css();
        docs::doc_entries(&css, table)
    }

    /// The text a copy request would put on the clipboard: the element CSS
    /// in individual mode, the container CSS in layout mode.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError::NothingToCopy`] when the current text is a
    /// placeholder comment; the host must not write it to the clipboard.
    pub fn copyable_css(&mut self) -> SandboxResult<String> {
        let text = match self.mode {
            EditMode::Individual => self.individual_css(),
            EditMode::Layout => self.layout_css(),
        };
        if synth::is_copyable(&text) {
            Ok(text)
        } else {
            Err(SandboxError::NothingToCopy)
        }
    }
}
