//! # CSS Sandbox Core
//!
//! Engine for an interactive editor that teaches CSS by keeping two
//! representations of on-canvas elements continuously synchronized:
//! the geometric state manipulated by pointer gestures, and the CSS
//! text generated from it (and hand-editable back into it).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                sandbox-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Element Store   │  Geometry Engine         │
//! │  - Elements      │  - Drag / resize/ rotate │
//! │  - Selection     │  - Snapping, clamping    │
//! │  - Revisions     │  - Gesture sessions      │
//! ├─────────────────────────────────────────────┤
//! │  CSS Synthesis   │  CSS Reverse Sync        │
//! │  - Element rules │  - Declarative matchers  │
//! │  - Layout modes  │  - Partial field merge   │
//! │  - Doc lookup    │  - Never fails           │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod docs;
pub mod element;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod parse;
pub mod state;
pub mod store;
pub mod synth;

pub use docs::{DocEntry, DocTable};
pub use element::{DisplayMode, Element, ElementId, ElementKind, ElementOverrides, MIN_SIZE};
pub use error::{SandboxError, SandboxResult};
pub use gesture::{
    ContainerBounds, DragDelta, GestureEngine, GestureEvent, GestureKind, GesturePayload,
    GesturePhase, GridSettings, Modifiers, PointerPosition, ResizeRect,
};
pub use layout::{
    ColumnFill, FlexConfig, FloatConfig, FloatDirection, FlowConfig, FlowDisplay, GridConfig,
    LayoutCategory, LayoutMode, LayoutState, MulticolConfig, LAYOUT_CATEGORIES,
};
pub use parse::{parse_css, CssUpdate};
pub use state::{EditMode, EditorState};
pub use store::ElementStore;
pub use synth::{
    element_css, is_copyable, layout_css, layout_css_for_id, sandbox_style, selection_css,
    COMMENT_OPEN,
};

/// Sandbox core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
