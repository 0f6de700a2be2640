//! CSS synthesis - pure functions from structured state to CSS text.
//!
//! Identical input always yields byte-identical text; the editor relies on
//! that both for caching and for the teaching panel, where the user reads the
//! generated rule and can copy or hand-edit it.

use crate::{Element, LayoutMode, LayoutState};

/// Marker that opens a CSS comment. Any generated string starting with it is
/// a placeholder, not copyable CSS.
pub const COMMENT_OPEN: &str = "/*";

/// Placeholder shown when no element is selected.
const NO_SELECTION: &str = "/* Click an element to select it */";

/// Placeholder for a layout mode id the generator does not know.
const UNSUPPORTED_LAYOUT: &str = "/* Unsupported layout mode */";

/// Whether a generated string may be sent to the clipboard.
///
/// Placeholder comments are informational and must not be copied out.
#[must_use]
pub fn is_copyable(css: &str) -> bool {
    !css.starts_with(COMMENT_OPEN)
}

/// Format a pixel count the way the layout panel does: integers bare,
/// fractional values as-is.
fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Generate the CSS rule for a single element.
///
/// Declaration order is fixed: `position`, `display` (pass-through, when
/// present), `width`, `height`, `background-color`, `z-index`, `transform`
/// (translate before rotate, both one decimal). Box, text, button, and circle
/// elements get the font block; buttons additionally get the border, radius,
/// and padding block.
#[must_use]
pub fn element_css(el: &Element) -> String {
    let mut css = String::new();
    css.push_str(&format!("#{} {{\n", el.id));
    css.push_str("    position: absolute;\n");
    if let Some(display) = el.display {
        css.push_str(&format!("    display: {display};\n"));
    }
    css.push_str(&format!("    width: {:.1}px;\n", el.width));
    css.push_str(&format!("    height: {:.1}px;\n", el.height));
    css.push_str(&format!(
        "    background-color: {};\n",
        el.background_color.as_deref().unwrap_or("#ffffff")
    ));
    css.push_str(&format!("    z-index: {};\n", el.z_index));
    css.push_str(&format!(
        "    transform: translate({:.1}px, {:.1}px) rotate({:.1}deg);\n",
        el.x, el.y, el.angle
    ));

    if el.kind.has_font_block() {
        css.push_str(&format!(
            "    color: {};\n",
            el.font_color.as_deref().unwrap_or("#000000")
        ));
        css.push_str(&format!(
            "    font-size: {:.1}px;\n",
            el.font_size.unwrap_or(16.0)
        ));
        css.push_str(&format!(
            "    font-family: {};\n",
            el.font_family.as_deref().unwrap_or("sans-serif")
        ));
        css.push_str(&format!(
            "    font-weight: {};\n",
            el.font_weight.as_deref().unwrap_or("normal")
        ));
        css.push_str(&format!(
            "    font-style: {};\n",
            el.font_style.as_deref().unwrap_or("normal")
        ));
        if el.kind == crate::ElementKind::Button {
            css.push_str("    border: none;\n");
            css.push_str("    border-radius: 4px;\n");
            css.push_str("    padding: 8px 16px;\n");
        }
    }

    css.push('}');
    css
}

/// CSS rule for the selection, or the placeholder comment when nothing is
/// selected.
#[must_use]
pub fn selection_css(selected: Option<&Element>) -> String {
    selected.map_or_else(|| NO_SELECTION.to_string(), element_css)
}

/// Generate the container CSS for the given layout mode.
///
/// Total over the closed enum; identical `(mode, state)` always yields
/// byte-identical text. Unknown string ids are handled by
/// [`layout_css_for_id`].
#[must_use]
pub fn layout_css(mode: LayoutMode, state: &LayoutState) -> String {
    match mode {
        LayoutMode::Flow => format!("#sandbox {{\n  display: {};\n}}", state.flow.display),
        LayoutMode::Float => {
            // The gap goes on the side opposite the float direction, so
            // floated children push away from each other.
            let margin_side = match state.float.direction {
                crate::layout::FloatDirection::Left => "margin-right",
                crate::layout::FloatDirection::Right => "margin-left",
            };
            format!(
                "#sandbox > * {{\n  float: {};\n  {margin_side}: {}px;\n}}",
                state.float.direction,
                px(state.float.gap)
            )
        }
        LayoutMode::Multicol => {
            let mut css = format!(
                "#sandbox {{\n  column-count: {};\n  column-gap: {}px;\n",
                state.multicol.count,
                px(state.multicol.gap)
            );
            if let Some(fill) = state.multicol.fill {
                css.push_str(&format!("  column-fill: {fill};\n"));
            }
            css.push('}');
            css
        }
        LayoutMode::Flex => format!(
            "#sandbox {{\n  display: flex;\n  height: {}%;\n  flex-direction: {};\n  justify-content: {};\n  align-items: {};\n  flex-wrap: {};\n  gap: {}px;\n}}",
            px(state.flex.container_height),
            state.flex.direction,
            state.flex.justify_content,
            state.flex.align_items,
            state.flex.flex_wrap,
            px(state.flex.gap)
        ),
        LayoutMode::Grid => format!(
            "#sandbox {{\n  display: grid;\n  grid-template-columns: {};\n  grid-template-rows: {};\n  row-gap: {}px;\n  column-gap: {}px;\n}}",
            state.grid.columns,
            state.grid.rows,
            px(state.grid.row_gap),
            px(state.grid.column_gap)
        ),
        LayoutMode::Table => {
            "#sandbox {\n  display: table;\n  width: 100%;\n}\n#sandbox > * {\n  display: table-cell;\n}".to_string()
        }
        LayoutMode::Abs => {
            "#sandbox {\n  position: relative;\n}\n#sandbox > * {\n  position: absolute;\n}".to_string()
        }
    }
}

/// Resolve a mode id from the host boundary and generate its container CSS.
/// Unknown ids yield the "unsupported layout" placeholder comment.
#[must_use]
pub fn layout_css_for_id(id: &str, state: &LayoutState) -> String {
    LayoutMode::from_id(id).map_or_else(|| UNSUPPORTED_LAYOUT.to_string(), |m| layout_css(m, state))
}

/// Inline-style property pairs the host applies to the container node.
///
/// Mirrors [`layout_css`], in property-pair form, with two differences kept
/// from the editor's behavior: flow mode also stretches the container to
/// full width, and float mode reuses the flow display on the container
/// itself (the float declarations apply to the children).
#[must_use]
pub fn sandbox_style(mode: LayoutMode, state: &LayoutState) -> Vec<(&'static str, String)> {
    match mode {
        LayoutMode::Flow => vec![
            ("display", state.flow.display.to_string()),
            ("width", "100%".to_string()),
        ],
        LayoutMode::Float => vec![("display", state.flow.display.to_string())],
        LayoutMode::Multicol => {
            let mut style = vec![
                ("column-count", state.multicol.count.to_string()),
                ("column-gap", format!("{}px", px(state.multicol.gap))),
            ];
            if let Some(fill) = state.multicol.fill {
                style.push(("column-fill", fill.to_string()));
            }
            style
        }
        LayoutMode::Flex => vec![
            ("display", "flex".to_string()),
            ("height", format!("{}%", px(state.flex.container_height))),
            ("flex-direction", state.flex.direction.clone()),
            ("justify-content", state.flex.justify_content.clone()),
            ("align-items", state.flex.align_items.clone()),
            ("flex-wrap", state.flex.flex_wrap.clone()),
            ("gap", format!("{}px", px(state.flex.gap))),
        ],
        LayoutMode::Grid => vec![
            ("display", "grid".to_string()),
            ("grid-template-columns", state.grid.columns.clone()),
            ("grid-template-rows", state.grid.rows.clone()),
            ("gap", format!("{}px", px(state.grid.gap))),
            ("row-gap", format!("{}px", px(state.grid.row_gap))),
            ("column-gap", format!("{}px", px(state.grid.column_gap))),
        ],
        LayoutMode::Table => vec![
            ("display", "table".to_string()),
            ("width", "100%".to_string()),
        ],
        LayoutMode::Abs => vec![("position", "relative".to_string())],
    }
}
