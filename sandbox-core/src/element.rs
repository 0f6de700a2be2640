//! Canvas elements - the objects the user manipulates and reads CSS for.

use serde::{Deserialize, Serialize};

/// Hard floor for element width and height, in pixels.
///
/// Resize gestures clamp to this instead of rejecting the input.
pub const MIN_SIZE: f64 = 50.0;

/// Unique identifier for an element, of the form `"<kind>-<n>"`.
///
/// The counter `n` is allocated by the store and never reused, so ids stay
/// unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// Build an id from a kind and an allocation counter.
    #[must_use]
    pub fn new(kind: ElementKind, counter: u32) -> Self {
        Self(format!("{kind}-{counter}"))
    }

    /// The id as a string slice (usable as a DOM id or CSS selector token).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of element. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// A plain rectangular box.
    Box,
    /// A circle (width and height stay tied together).
    Circle,
    /// A text label.
    Text,
    /// An image with an external source.
    Image,
    /// A styled button.
    Button,
}

impl ElementKind {
    /// Stable lowercase identifier, used in element ids.
    #[must_use]
    pub fn as_id(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Circle => "circle",
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
        }
    }

    /// Whether elements of this kind carry the font declaration block.
    #[must_use]
    pub fn has_font_block(self) -> bool {
        matches!(self, Self::Box | Self::Text | Self::Button | Self::Circle)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_id())
    }
}

/// The `display` value an element passes through to its generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// `display: block`
    Block,
    /// `display: inline`
    Inline,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Inline => "inline",
        })
    }
}

/// A canvas element: geometry, stacking, content, and optional style fields.
///
/// Style fields are optional; the synthesizer substitutes documented defaults
/// when they are unset. Mutation happens only through whole-snapshot replace in
/// the store, so a caller that wants to change one field clones the element,
/// edits the clone, and hands the full value back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// Element kind. Never changes after construction.
    pub kind: ElementKind,
    /// X position in pixels from the container's left edge.
    pub x: f64,
    /// Y position in pixels from the container's top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Rotation in degrees.
    pub angle: f64,
    /// Stacking order. Allocated once at creation, strictly increasing.
    pub z_index: i32,
    /// Displayed content (label text; empty for images).
    pub content: String,
    /// Pass-through `display` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayMode>,
    /// Background color as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Font size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Font color as a hex string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Font style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// Image source URI. Only meaningful for image elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

/// Caller-supplied overrides merged over the kind defaults at creation.
///
/// Every field is optional; unset fields keep the factory default. This is the
/// mechanism behind geometry-only cloning: the clone passes geometry overrides
/// and nothing else, so the copy gets fresh default style and content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementOverrides {
    /// X position override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Y position override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Angle override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Content override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Background color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Image source override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl Element {
    /// Build an element from kind defaults, an allocation counter, and caller
    /// overrides.
    ///
    /// Defaults: 150x150 at (100, 100), angle 0, `display: block`, font size
    /// 16 / black / sans-serif / normal weight and style. Per-kind special
    /// cases: box gets a background color, text is 150x50 with a default
    /// label, button is 150x60 with a default label, image has empty content
    /// and a placeholder source.
    #[must_use]
    pub fn with_defaults(kind: ElementKind, counter: u32, overrides: ElementOverrides) -> Self {
        let mut height = 150.0;
        let mut content = format!("{} {counter}", kind.as_id().to_uppercase());
        let mut src = None;

        match kind {
            ElementKind::Text => {
                height = 50.0;
                content = "Text element".to_string();
            }
            ElementKind::Button => {
                height = 60.0;
                content = "Button".to_string();
            }
            ElementKind::Image => {
                content = String::new();
                src = Some("https://placehold.co/600x400/EEE/31343C?text=Image".to_string());
            }
            ElementKind::Box | ElementKind::Circle => {}
        }

        let background_color = match kind {
            ElementKind::Box => Some("#6dd5ed".to_string()),
            _ => None,
        };

        // z-index allocation order matches the id counter.
        #[allow(clippy::cast_possible_wrap)]
        let z_index = counter as i32;

        Self {
            id: ElementId::new(kind, counter),
            kind,
            x: overrides.x.unwrap_or(100.0),
            y: overrides.y.unwrap_or(100.0),
            width: overrides.width.unwrap_or(150.0),
            height: overrides.height.unwrap_or(height),
            angle: overrides.angle.unwrap_or(0.0),
            z_index,
            content: overrides.content.unwrap_or(content),
            display: Some(DisplayMode::Block),
            background_color: overrides.background_color.or(background_color),
            font_size: Some(16.0),
            font_color: Some("#000000".to_string()),
            font_family: Some("sans-serif".to_string()),
            font_weight: Some("normal".to_string()),
            font_style: Some("normal".to_string()),
            src: overrides.src.or(src),
        }
    }

    /// Geometry-only overrides for this element, offset by (+20, +20).
    ///
    /// Used by clone-on-gesture: the copy keeps position, size, and angle but
    /// takes fresh default style and content.
    #[must_use]
    pub fn clone_overrides(&self) -> ElementOverrides {
        ElementOverrides {
            x: Some(self.x + 20.0),
            y: Some(self.y + 20.0),
            width: Some(self.width),
            height: Some(self.height),
            angle: Some(self.angle),
            ..ElementOverrides::default()
        }
    }

    /// Center of the element's bounding box, in container coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
