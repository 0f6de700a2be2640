//! Layout modes and their per-mode configuration records.
//!
//! All seven configurations persist simultaneously inside [`LayoutState`];
//! only one mode is active at a time, so switching modes is lossless and
//! reversible. String ids exist only at the host boundary - the core
//! dispatches on the closed [`LayoutMode`] enum.

use serde::{Deserialize, Serialize};

/// One of the seven supported container layout paradigms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Normal flow (`display: block` or `inline`).
    Flow,
    /// Float-based layout on the children.
    Float,
    /// CSS multi-column.
    Multicol,
    /// Flexbox container.
    Flex,
    /// CSS Grid container.
    Grid,
    /// Table display layout.
    Table,
    /// Relative container with absolutely positioned children.
    Abs,
}

impl LayoutMode {
    /// All modes, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Flow,
        Self::Float,
        Self::Multicol,
        Self::Flex,
        Self::Grid,
        Self::Table,
        Self::Abs,
    ];

    /// Stable string id used at the host boundary.
    #[must_use]
    pub fn as_id(self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Float => "float",
            Self::Multicol => "multicol",
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::Table => "table",
            Self::Abs => "abs",
        }
    }

    /// Resolve a string id. Unknown ids yield `None`; callers surface the
    /// "unsupported layout" placeholder instead of failing.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_id() == id)
    }

    /// Human-readable label for mode pickers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flow => "block/inline",
            Self::Float => "Float",
            Self::Multicol => "Multi-column",
            Self::Flex => "Flexbox",
            Self::Grid => "CSS Grid",
            Self::Table => "Table layout",
            Self::Abs => "Relative + absolute",
        }
    }
}

/// A named group of layout modes, for building a mode picker.
/// Serialize-only: the set is static, hosts never send one back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutCategory {
    /// Category heading.
    pub name: &'static str,
    /// Modes in this category, in presentation order.
    pub modes: &'static [LayoutMode],
}

/// The mode groups shown to the user.
pub const LAYOUT_CATEGORIES: [LayoutCategory; 3] = [
    LayoutCategory {
        name: "Normal flow",
        modes: &[LayoutMode::Flow, LayoutMode::Float, LayoutMode::Multicol],
    },
    LayoutCategory {
        name: "Container layout",
        modes: &[LayoutMode::Flex, LayoutMode::Grid, LayoutMode::Table],
    },
    LayoutCategory {
        name: "Positioned",
        modes: &[LayoutMode::Abs],
    },
];

/// `display` value for normal-flow mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDisplay {
    /// `display: block`
    Block,
    /// `display: inline`
    Inline,
}

impl std::fmt::Display for FlowDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Inline => "inline",
        })
    }
}

/// Normal-flow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Display mode applied to the container.
    pub display: FlowDisplay,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            display: FlowDisplay::Block,
        }
    }
}

/// Which side children float to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatDirection {
    /// `float: left`; the gap goes on the right.
    Left,
    /// `float: right`; the gap goes on the left.
    Right,
}

impl std::fmt::Display for FloatDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Float layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatConfig {
    /// Float direction for the children.
    pub direction: FloatDirection,
    /// Gap between floated children, in pixels. Emitted as a margin on the
    /// side opposite the float direction.
    pub gap: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            direction: FloatDirection::Left,
            gap: 10.0,
        }
    }
}

/// `column-fill` behavior for multi-column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnFill {
    /// Balance content across columns.
    Balance,
    /// Fill columns sequentially.
    Auto,
}

impl std::fmt::Display for ColumnFill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Balance => "balance",
            Self::Auto => "auto",
        })
    }
}

/// Multi-column configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MulticolConfig {
    /// Number of columns.
    pub count: u32,
    /// Gap between columns, in pixels.
    pub gap: f64,
    /// Optional `column-fill`; omitted from the CSS when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColumnFill>,
}

impl Default for MulticolConfig {
    fn default() -> Self {
        Self {
            count: 3,
            gap: 16.0,
            fill: Some(ColumnFill::Balance),
        }
    }
}

/// Flexbox configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexConfig {
    /// Container height as a percentage of the parent.
    pub container_height: f64,
    /// `flex-direction` value.
    pub direction: String,
    /// `justify-content` value.
    pub justify_content: String,
    /// `align-items` value.
    pub align_items: String,
    /// `flex-wrap` value.
    pub flex_wrap: String,
    /// `gap` in pixels.
    pub gap: f64,
}

impl Default for FlexConfig {
    fn default() -> Self {
        Self {
            container_height: 100.0,
            direction: "row".to_string(),
            justify_content: "flex-start".to_string(),
            align_items: "flex-start".to_string(),
            flex_wrap: "nowrap".to_string(),
            gap: 10.0,
        }
    }
}

/// CSS Grid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// `grid-template-columns` track string.
    pub columns: String,
    /// `grid-template-rows` track string.
    pub rows: String,
    /// Shorthand `gap` in pixels (inline style only).
    pub gap: f64,
    /// `row-gap` in pixels.
    pub row_gap: f64,
    /// `column-gap` in pixels.
    pub column_gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: "1fr 1fr 1fr".to_string(),
            rows: "auto".to_string(),
            gap: 10.0,
            row_gap: 10.0,
            column_gap: 10.0,
        }
    }
}

/// All layout configurations plus the active mode selector.
///
/// Table and abs modes carry no parameters, so they have no record here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// The currently active mode.
    pub active: LayoutMode,
    /// Normal-flow configuration.
    pub flow: FlowConfig,
    /// Float configuration.
    pub float: FloatConfig,
    /// Multi-column configuration.
    pub multicol: MulticolConfig,
    /// Flexbox configuration.
    pub flex: FlexConfig,
    /// Grid configuration.
    pub grid: GridConfig,
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_id_round_trip() {
        for mode in LayoutMode::ALL {
            assert_eq!(LayoutMode::from_id(mode.as_id()), Some(mode));
        }
        assert_eq!(LayoutMode::from_id("masonry"), None);
        assert_eq!(LayoutMode::from_id(""), None);
    }

    #[test]
    fn test_categories_cover_all_modes() {
        let mut seen: Vec<LayoutMode> = Vec::new();
        for category in LAYOUT_CATEGORIES {
            seen.extend_from_slice(category.modes);
        }
        for mode in LayoutMode::ALL {
            assert!(seen.contains(&mode), "{mode:?} missing from categories");
        }
    }

    #[test]
    fn test_switching_modes_is_lossless() {
        let mut state = LayoutState::default();
        state.flex.gap = 42.0;
        state.active = LayoutMode::Grid;
        state.active = LayoutMode::Flex;
        assert!((state.flex.gap - 42.0).abs() < f64::EPSILON);
    }
}
