//! End-to-end flows through the public API: create elements, manipulate them
//! with gestures, read the generated CSS, hand-edit it back, and ask for the
//! documentation list - the loop the editor UI drives.

use sandbox_core::{
    parse_css, DocTable, DragDelta, EditMode, EditorState, ElementKind, ElementOverrides,
    GestureEvent, GestureKind, GesturePayload, GesturePhase, GridSettings, LayoutMode, Modifiers,
    PointerPosition, ResizeRect, SandboxError,
};

fn event(
    phase: GesturePhase,
    kind: GestureKind,
    target: &sandbox_core::ElementId,
    payload: Option<GesturePayload>,
) -> GestureEvent {
    GestureEvent {
        phase,
        kind,
        target: target.clone(),
        payload,
        modifiers: Modifiers::default(),
    }
}

#[test]
fn button_defaults_and_generated_css() {
    let mut state = EditorState::new();
    let id = state.add_element(ElementKind::Button, ElementOverrides::default());

    let el = state.store.get(&id).expect("button exists");
    assert_eq!(el.kind, ElementKind::Button);
    assert!((el.width - 150.0).abs() < f64::EPSILON);
    assert!((el.height - 60.0).abs() < f64::EPSILON);
    assert_eq!(el.content, "Button");

    let css = state.individual_css();
    let order = [
        "position: absolute;",
        "display: block;",
        "width: 150.0px;",
        "height: 60.0px;",
        "background-color: #ffffff;",
        "z-index: 1;",
        "transform: translate(100.0px, 100.0px) rotate(0.0deg);",
        "color: #000000;",
        "font-size: 16.0px;",
        "font-family: sans-serif;",
        "font-weight: normal;",
        "font-style: normal;",
        "border: none;",
        "border-radius: 4px;",
        "padding: 8px 16px;",
    ];
    let mut cursor = 0;
    for needle in order {
        let pos = css[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing declaration in order: {needle}"));
        cursor += pos + needle.len();
    }
}

#[test]
fn default_geometry_per_kind_and_unique_ids() {
    let mut state = EditorState::new();
    let expectations = [
        (ElementKind::Box, 150.0),
        (ElementKind::Circle, 150.0),
        (ElementKind::Text, 50.0),
        (ElementKind::Button, 60.0),
    ];

    let mut last_z = 0;
    for (n, (kind, height)) in expectations.into_iter().enumerate() {
        let id = state.add_element(kind, ElementOverrides::default());
        assert_eq!(id.as_str(), format!("{}-{}", kind.as_id(), n + 1));

        let el = state.store.get(&id).expect("exists");
        assert!((el.width - 150.0).abs() < f64::EPSILON);
        assert!((el.height - height).abs() < f64::EPSILON);
        assert!(el.z_index > last_z, "z-index strictly increasing");
        last_z = el.z_index;
    }
}

#[test]
fn synthesis_then_parse_round_trips_geometry_and_style() {
    let mut state = EditorState::new();
    let id = state.add_element(ElementKind::Circle, ElementOverrides::default());

    let mut el = state.store.get(&id).expect("exists").clone();
    el.x = 217.77;
    el.y = 31.25;
    el.angle = -61.93;
    el.width = 180.4;
    el.height = 180.4;
    el.background_color = Some("#336699".to_string());
    el.font_color = Some("#fafafa".to_string());
    el.font_size = Some(21.5);
    state.store.replace(el.clone());

    let update = parse_css(&state.individual_css());
    assert!((update.width.expect("width") - el.width).abs() <= 0.05);
    assert!((update.height.expect("height") - el.height).abs() <= 0.05);
    assert!((update.x.expect("x") - el.x).abs() <= 0.05);
    assert!((update.y.expect("y") - el.y).abs() <= 0.05);
    assert!((update.angle.expect("angle") - el.angle).abs() <= 0.05);
    assert!((update.font_size.expect("font size") - 21.5).abs() <= 0.05);
    assert_eq!(update.background_color.as_deref(), Some("#336699"));
    assert_eq!(update.font_color.as_deref(), Some("#fafafa"));
}

#[test]
fn drag_session_with_snap_on_end() {
    let mut state = EditorState::new();
    state.engine.grid = GridSettings {
        enabled: true,
        size: 30.0,
    };
    let id = state.add_element(ElementKind::Box, ElementOverrides::default());

    state.handle_gesture(&event(GesturePhase::Start, GestureKind::Drag, &id, None));
    state.handle_gesture(&event(
        GesturePhase::Move,
        GestureKind::Drag,
        &id,
        Some(GesturePayload::Drag(DragDelta { dx: 23.0, dy: 8.0 })),
    ));
    state.handle_gesture(&event(GesturePhase::End, GestureKind::Drag, &id, None));

    let el = state.store.get(&id).expect("exists");
    assert!((el.x % 30.0).abs() < 1e-9);
    assert!((el.y % 30.0).abs() < 1e-9);
}

#[test]
fn circle_resize_keeps_height_tied_to_width() {
    let mut state = EditorState::new();
    let id = state.add_element(ElementKind::Circle, ElementOverrides::default());

    state.handle_gesture(&event(GesturePhase::Start, GestureKind::Resize, &id, None));
    // Drag the bottom edge only; the tie break still forces height to follow
    // the width.
    state.handle_gesture(&event(
        GesturePhase::Move,
        GestureKind::Resize,
        &id,
        Some(GesturePayload::Resize(ResizeRect {
            width: 150.0,
            height: 260.0,
            left_delta: 0.0,
            top_delta: 0.0,
        })),
    ));
    state.handle_gesture(&event(GesturePhase::End, GestureKind::Resize, &id, None));

    let el = state.store.get(&id).expect("exists");
    assert!((el.height - el.width).abs() < f64::EPSILON);
}

#[test]
fn alt_drag_duplicates_geometry_only() {
    let mut state = EditorState::new();
    let id = state.add_element(ElementKind::Box, ElementOverrides::default());
    let mut original = state.store.get(&id).expect("exists").clone();
    original.content = "hand-edited".to_string();
    original.angle = 15.0;
    state.store.replace(original);

    state.handle_gesture(&GestureEvent {
        phase: GesturePhase::Start,
        kind: GestureKind::Drag,
        target: id.clone(),
        payload: None,
        modifiers: Modifiers {
            alt: true,
            ..Modifiers::default()
        },
    });

    let clone_id = state.store.selected_id().expect("clone selected").clone();
    assert_ne!(clone_id, id);

    let clone = state.store.get(&clone_id).expect("clone exists");
    assert!((clone.x - 120.0).abs() < f64::EPSILON);
    assert!((clone.angle - 15.0).abs() < f64::EPSILON, "geometry copied");
    assert_ne!(clone.content, "hand-edited", "content not copied");

    // The original gesture is dead; further moves do nothing.
    state.handle_gesture(&event(
        GesturePhase::Move,
        GestureKind::Drag,
        &id,
        Some(GesturePayload::Drag(DragDelta { dx: 99.0, dy: 0.0 })),
    ));
    let original = state.store.get(&id).expect("original exists");
    assert!((original.x - 100.0).abs() < f64::EPSILON);
}

#[test]
fn rotation_angle_from_fixed_center() {
    let mut state = EditorState::new();
    let id = state.add_element(ElementKind::Box, ElementOverrides::default());

    state.handle_gesture(&event(GesturePhase::Start, GestureKind::Rotate, &id, None));
    state.handle_gesture(&event(
        GesturePhase::Move,
        GestureKind::Rotate,
        &id,
        Some(GesturePayload::Rotate(PointerPosition { x: 175.0, y: 300.0 })),
    ));

    // Pointer straight below the center: atan2 gives 90, plus the 90 offset.
    let el = state.store.get(&id).expect("exists");
    assert!((el.angle - 180.0).abs() < 1e-9);
}

#[test]
fn layout_css_matches_active_mode_and_stays_deterministic() {
    let mut state = EditorState::new();
    state.layout.active = LayoutMode::Grid;
    let first = state.layout_css();
    let second = state.layout_css();
    assert_eq!(first, second);
    assert!(first.contains("display: grid;"));

    // Mode switching is lossless: flex settings survive a round trip.
    state.layout.flex.gap = 24.0;
    state.layout.active = LayoutMode::Table;
    state.layout.active = LayoutMode::Flex;
    assert!(state.layout_css().contains("gap: 24px;"));
}

#[test]
fn doc_panel_order_for_generated_css() {
    let mut state = EditorState::new();
    state.add_element(ElementKind::Box, ElementOverrides::default());

    let table = DocTable::builtin();
    let keys: Vec<String> = state
        .doc_entries(&table)
        .into_iter()
        .map(|e| e.key)
        .collect();
    assert_eq!(
        keys,
        vec![
            "display",
            "position",
            "top",
            "left",
            "width",
            "height",
            "transform",
            "zIndex",
            "backgroundColor",
        ]
    );
}

#[test]
fn copy_refused_for_placeholder_text() {
    let mut state = EditorState::new();
    assert!(matches!(
        state.copyable_css(),
        Err(SandboxError::NothingToCopy)
    ));

    state.add_element(ElementKind::Text, ElementOverrides::default());
    state.store.deselect_all();
    assert!(matches!(
        state.copyable_css(),
        Err(SandboxError::NothingToCopy)
    ));

    // Layout mode always has real CSS to copy.
    state.mode = EditMode::Layout;
    assert!(state.copyable_css().is_ok());
}

#[test]
fn deleting_selection_updates_generated_css() {
    let mut state = EditorState::new();
    state.add_element(ElementKind::Box, ElementOverrides::default());
    assert!(state.individual_css().starts_with("#box-1"));

    state.store.delete_selected();
    assert!(state.individual_css().starts_with("/*"));

    // Deleting again with nothing selected is a quiet no-op.
    assert!(state.store.delete_selected().is_none());
}
