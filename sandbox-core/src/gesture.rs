//! Gesture sessions and the geometry they produce.
//!
//! A gesture session is the one stateful sequential protocol in the crate:
//! `start` establishes session-scoped context (the rotation center, the
//! cancellation flag), zero or more `move` events apply incremental geometry
//! updates through the store, and `end` applies terminal adjustments
//! (grid snapping) and closes the session. The pointer library delivering the
//! events and doing hit-testing stays outside; this module only consumes the
//! reported deltas and rectangles.

use serde::{Deserialize, Serialize};

use crate::{Element, ElementId, ElementKind, ElementStore, MIN_SIZE};

/// Phase of a gesture event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    /// Gesture started (pointer down on an element or handle).
    Start,
    /// Pointer moved while the gesture is held.
    Move,
    /// Gesture ended (pointer up).
    End,
}

/// The kind of manipulation a session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Translate the element by pointer deltas.
    Drag,
    /// Resize the element from any edge.
    Resize,
    /// Rotate the element around its session-start center.
    Rotate,
}

/// Modifier keys held when a gesture starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Alt/Option key - duplicates the element instead of dragging it.
    pub alt: bool,
    /// Shift key pressed.
    pub shift: bool,
    /// Control key pressed.
    pub ctrl: bool,
    /// Meta/Command key pressed.
    pub meta: bool,
}

/// Incremental pointer movement for a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragDelta {
    /// Horizontal movement since the last event, in pixels.
    pub dx: f64,
    /// Vertical movement since the last event, in pixels.
    pub dy: f64,
}

/// The rectangle reported by an edge-resize event.
///
/// `width`/`height` are the full new size; `left_delta`/`top_delta` are how
/// far the left and top edges moved, so resizing from the top or left
/// repositions the element to keep the opposite edge fixed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeRect {
    /// New width in pixels.
    pub width: f64,
    /// New height in pixels.
    pub height: f64,
    /// Movement of the left edge since the last event.
    pub left_delta: f64,
    /// Movement of the top edge since the last event.
    pub top_delta: f64,
}

/// Absolute pointer position for a rotate event, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Pointer X.
    pub x: f64,
    /// Pointer Y.
    pub y: f64,
}

/// Gesture payloads, one shape per kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum GesturePayload {
    /// Drag movement.
    Drag(DragDelta),
    /// Resize rectangle.
    Resize(ResizeRect),
    /// Rotate pointer position.
    Rotate(PointerPosition),
}

/// A gesture event as delivered by the external pointer library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// Phase of this event.
    pub phase: GesturePhase,
    /// Kind of gesture the event belongs to.
    pub kind: GestureKind,
    /// The element the session is scoped to.
    pub target: ElementId,
    /// Kind-specific payload. `Start` and `End` events carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<GesturePayload>,
    /// Modifier keys held at this event.
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// Grid snapping configuration. Applied only at the end of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Whether snap-on-end is active.
    pub enabled: bool,
    /// Grid cell size in pixels. Must be positive for snapping to apply.
    pub size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            size: 20.0,
        }
    }
}

/// Bounds of the parent container; drag and resize stay inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
}

impl Default for ContainerBounds {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Context for one open session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    target: ElementId,
    kind: GestureKind,
    /// Rotation center captured once at session start.
    center: Option<(f64, f64)>,
    /// Once set, no further move/end event may mutate the element.
    cancelled: bool,
}

/// Turns gesture-session events into geometry mutations on the store.
///
/// At most one session is open at a time; starting a new session supersedes
/// any stale one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureEngine {
    session: Option<Session>,
    /// Snap-on-end configuration.
    pub grid: GridSettings,
    /// Clamping bounds for drag and resize.
    pub container: ContainerBounds,
}

impl GestureEngine {
    /// Create an engine with default grid and container settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The element id and kind of the open session, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<(&ElementId, GestureKind)> {
        self.session
            .as_ref()
            .filter(|s| !s.cancelled)
            .map(|s| (&s.target, s.kind))
    }

    /// Dispatch an event in the external wire shape to the typed entry
    /// points. Events that do not fit the open session (wrong target, wrong
    /// kind, missing or mismatched payload) are logged and dropped rather
    /// than rejected.
    pub fn handle(&mut self, store: &mut ElementStore, event: &GestureEvent) {
        match (event.phase, event.kind, event.payload) {
            (GesturePhase::Start, GestureKind::Drag, _) => {
                self.start_drag(store, &event.target, event.modifiers);
            }
            (GesturePhase::Start, GestureKind::Resize, _) => {
                self.start_resize(&event.target);
            }
            (GesturePhase::Start, GestureKind::Rotate, _) => {
                self.start_rotate(store, &event.target);
            }
            (GesturePhase::Move, GestureKind::Drag, Some(GesturePayload::Drag(delta))) => {
                self.drag_move(store, &event.target, delta);
            }
            (GesturePhase::Move, GestureKind::Resize, Some(GesturePayload::Resize(rect))) => {
                self.resize_move(store, &event.target, rect);
            }
            (GesturePhase::Move, GestureKind::Rotate, Some(GesturePayload::Rotate(pointer))) => {
                self.rotate_move(store, &event.target, pointer);
            }
            (GesturePhase::End, _, _) => self.end(store),
            (phase, kind, _) => {
                tracing::warn!("Dropping gesture event with mismatched payload: {phase:?} {kind:?}");
            }
        }
    }

    /// Start a drag session on the given element.
    ///
    /// If the duplicate modifier (alt) is held, the element is cloned
    /// (geometry only) and the session is cancelled immediately: the original
    /// never moves, and the clone ends up selected and offset. Returns the
    /// clone's id in that case.
    pub fn start_drag(
        &mut self,
        store: &mut ElementStore,
        target: &ElementId,
        modifiers: Modifiers,
    ) -> Option<ElementId> {
        if modifiers.alt {
            let original = store.get(target).cloned()?;
            let clone_id = store.clone_element(&original);
            tracing::debug!("Alt-drag duplicated {target} as {clone_id}");
            // Keep a cancelled session so stale move/end events for this
            // gesture cannot touch the original.
            self.session = Some(Session {
                target: target.clone(),
                kind: GestureKind::Drag,
                center: None,
                cancelled: true,
            });
            return Some(clone_id);
        }
        store.select(target);
        self.session = Some(Session {
            target: target.clone(),
            kind: GestureKind::Drag,
            center: None,
            cancelled: false,
        });
        None
    }

    /// Start a resize session on the given element.
    pub fn start_resize(&mut self, target: &ElementId) {
        self.session = Some(Session {
            target: target.clone(),
            kind: GestureKind::Resize,
            center: None,
            cancelled: false,
        });
    }

    /// Start a rotate session, capturing the element's center once.
    ///
    /// All subsequent move events compute the angle against this fixed
    /// center, so rotation stays stable even as the bounding box changes
    /// mid-gesture.
    pub fn start_rotate(&mut self, store: &ElementStore, target: &ElementId) {
        let center = store.get(target).map(Element::center);
        self.session = Some(Session {
            target: target.clone(),
            kind: GestureKind::Rotate,
            center,
            cancelled: center.is_none(),
        });
    }

    /// Apply a drag movement: add the delta to the element position, clamped
    /// to the container.
    pub fn drag_move(&mut self, store: &mut ElementStore, target: &ElementId, delta: DragDelta) {
        if !self.session_accepts(target, GestureKind::Drag) {
            return;
        }
        let Some(mut el) = store.get(target).cloned() else {
            return;
        };
        el.x += delta.dx;
        el.y += delta.dy;
        self.clamp_to_container(&mut el);
        store.replace(el);
    }

    /// Apply a resize movement: take the reported rectangle, reposition by
    /// the top/left edge deltas, clamp to the minimum size and the container.
    ///
    /// Circles keep `height == width` after every resize, whichever edge was
    /// dragged; a height-only edge drag still ends with the height following
    /// the width, never the reverse.
    pub fn resize_move(&mut self, store: &mut ElementStore, target: &ElementId, rect: ResizeRect) {
        if !self.session_accepts(target, GestureKind::Resize) {
            return;
        }
        let Some(mut el) = store.get(target).cloned() else {
            return;
        };
        el.width = rect.width.max(MIN_SIZE);
        el.height = rect.height.max(MIN_SIZE);
        el.x += rect.left_delta;
        el.y += rect.top_delta;
        if el.kind == ElementKind::Circle {
            el.height = el.width;
        }
        self.clamp_to_container(&mut el);
        store.replace(el);
    }

    /// Apply a rotate movement against the session-start center.
    ///
    /// A pointer directly above the fixed center yields angle 0.
    pub fn rotate_move(
        &mut self,
        store: &mut ElementStore,
        target: &ElementId,
        pointer: PointerPosition,
    ) {
        if !self.session_accepts(target, GestureKind::Rotate) {
            return;
        }
        let Some((cx, cy)) = self.session.as_ref().and_then(|s| s.center) else {
            return;
        };
        let Some(mut el) = store.get(target).cloned() else {
            return;
        };
        el.angle = (pointer.y - cy).atan2(pointer.x - cx).to_degrees() + 90.0;
        store.replace(el);
    }

    /// End the open session, applying snap-on-end if grid snapping is active:
    /// position snaps after a drag, size snaps after a resize, each axis
    /// rounded independently to the nearest grid multiple. Snapping never
    /// applies mid-gesture.
    ///
    /// The snap is a pure rounding step: the minimum size and the container
    /// bounds constrain the live gesture, not the final rounding, so a coarse
    /// grid can settle a size below the floor.
    pub fn end(&mut self, store: &mut ElementStore) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.cancelled {
            return;
        }
        if !(self.grid.enabled && self.grid.size > 0.0) {
            return;
        }
        let g = self.grid.size;
        let Some(mut el) = store.get(&session.target).cloned() else {
            return;
        };
        match session.kind {
            GestureKind::Drag => {
                el.x = snap(el.x, g);
                el.y = snap(el.y, g);
            }
            GestureKind::Resize => {
                el.width = snap(el.width, g);
                el.height = snap(el.height, g);
            }
            GestureKind::Rotate => return,
        }
        store.replace(el);
    }

    /// Abort the open session. Later move/end events for it are ignored.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.cancelled = true;
        }
    }

    fn session_accepts(&self, target: &ElementId, kind: GestureKind) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| !s.cancelled && s.kind == kind && &s.target == target)
    }

    fn clamp_to_container(&self, el: &mut Element) {
        el.width = el.width.min(self.container.width);
        el.height = el.height.min(self.container.height);
        if el.kind == ElementKind::Circle {
            // An uneven clamp must not break the circle's aspect lock: both
            // sides shrink to the shorter container axis together.
            let side = el.width.min(el.height);
            el.width = side;
            el.height = side;
        }
        el.x = el.x.clamp(0.0, (self.container.width - el.width).max(0.0));
        el.y = el.y.clamp(0.0, (self.container.height - el.height).max(0.0));
    }
}

/// Round `value` to the nearest multiple of `grid`.
fn snap(value: f64, grid: f64) -> f64 {
    (value / grid).round() * grid
}
