//! Best-effort reverse sync: hand-edited CSS text back into element fields.
//!
//! This is deliberately not a CSS grammar. A fixed table of matchers extracts
//! the declarations the editor itself generates; everything else is silently
//! skipped. Each extraction is independent, so one malformed declaration
//! never blocks the others, and an empty match set changes nothing.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::{DisplayMode, Element};

/// The partial update extracted from a CSS edit.
///
/// Every field is optional; [`apply_to`](Self::apply_to) merges set fields
/// into an element one by one, never replacing the whole entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssUpdate {
    /// New width in pixels.
    pub width: Option<f64>,
    /// New height in pixels.
    pub height: Option<f64>,
    /// New background color (hex).
    pub background_color: Option<String>,
    /// New font color (hex).
    pub font_color: Option<String>,
    /// New font size in pixels.
    pub font_size: Option<f64>,
    /// New X position, from `translate(..)`.
    pub x: Option<f64>,
    /// New Y position, from `translate(..)`.
    pub y: Option<f64>,
    /// New angle in degrees, from `rotate(..)`.
    pub angle: Option<f64>,
    /// New display value.
    pub display: Option<DisplayMode>,
}

impl CssUpdate {
    /// Whether no recognized declaration was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Merge the set fields into the element, leaving everything else
    /// untouched.
    pub fn apply_to(&self, el: &mut Element) {
        if let Some(width) = self.width {
            el.width = width;
        }
        if let Some(height) = self.height {
            el.height = height;
        }
        if let Some(ref color) = self.background_color {
            el.background_color = Some(color.clone());
        }
        if let Some(ref color) = self.font_color {
            el.font_color = Some(color.clone());
        }
        if let Some(size) = self.font_size {
            el.font_size = Some(size);
        }
        if let Some(x) = self.x {
            el.x = x;
        }
        if let Some(y) = self.y {
            el.y = y;
        }
        if let Some(angle) = self.angle {
            el.angle = angle;
        }
        if let Some(display) = self.display {
            el.display = Some(display);
        }
    }
}

type Apply = fn(&Captures<'_>, &mut CssUpdate);

/// Pull a float out of a capture group. Patterns only capture digit runs, so
/// a parse failure just leaves the field unset.
fn num(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)?.as_str().parse().ok()
}

/// The declarative field-extraction table: one matcher per recognized
/// declaration, each mapped to the field it sets.
static RULES: LazyLock<Vec<(Regex, Apply)>> = LazyLock::new(|| {
    let rule = |pattern: &str, apply: Apply| -> (Regex, Apply) {
        (Regex::new(pattern).expect("valid matcher"), apply)
    };
    vec![
        rule(r"width:\s*(\d+\.?\d*)px", |c, u| u.width = num(c, 1)),
        rule(r"height:\s*(\d+\.?\d*)px", |c, u| u.height = num(c, 1)),
        rule(r"background-color:\s*(#[0-9A-Fa-f]+)", |c, u| {
            u.background_color = c.get(1).map(|m| m.as_str().to_string());
        }),
        // Anchored so the bare property cannot match the tail of
        // `background-color` (the regex crate has no lookbehind).
        rule(r"(?:^|[^-\w])color:\s*(#[0-9A-Fa-f]+)", |c, u| {
            u.font_color = c.get(1).map(|m| m.as_str().to_string());
        }),
        rule(r"font-size:\s*(\d+\.?\d*)px", |c, u| u.font_size = num(c, 1)),
        rule(
            r"translate\(\s*(-?\d+\.?\d*)px,\s*(-?\d+\.?\d*)px",
            |c, u| {
                u.x = num(c, 1);
                u.y = num(c, 2);
            },
        ),
        rule(r"rotate\(\s*(-?\d+\.?\d*)deg", |c, u| u.angle = num(c, 1)),
        rule(r"display:\s*(block|inline)", |c, u| {
            u.display = c.get(1).map(|m| match m.as_str() {
                "inline" => DisplayMode::Inline,
                _ => DisplayMode::Block,
            });
        }),
    ]
});

/// Extract recognized fields from free-form CSS text.
///
/// Never fails: unmatched or malformed declarations are skipped and the
/// corresponding fields stay unset.
#[must_use]
pub fn parse_css(text: &str) -> CssUpdate {
    let mut update = CssUpdate::default();
    for (matcher, apply) in RULES.iter() {
        if let Some(caps) = matcher.captures(text) {
            apply(&caps, &mut update);
        }
    }
    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{element_css, ElementKind, ElementOverrides, ElementStore};

    #[test]
    fn test_extracts_each_field_independently() {
        let update = parse_css("width: 120px; rotate(15deg)");
        assert_eq!(update.width, Some(120.0));
        assert_eq!(update.angle, Some(15.0));
        assert!(update.height.is_none());
        assert!(update.display.is_none());
    }

    #[test]
    fn test_color_does_not_match_background_color() {
        let update = parse_css("background-color: #abcdef;");
        assert_eq!(update.background_color.as_deref(), Some("#abcdef"));
        assert!(update.font_color.is_none());

        let update = parse_css("background-color: #abcdef;\ncolor: #112233;");
        assert_eq!(update.background_color.as_deref(), Some("#abcdef"));
        assert_eq!(update.font_color.as_deref(), Some("#112233"));
    }

    #[test]
    fn test_color_at_start_of_text() {
        let update = parse_css("color: #ff0000");
        assert_eq!(update.font_color.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_translate_sets_both_axes() {
        let update = parse_css("transform: translate(-12.5px, 40px) rotate(-90.0deg);");
        assert_eq!(update.x, Some(-12.5));
        assert_eq!(update.y, Some(40.0));
        assert_eq!(update.angle, Some(-90.0));
    }

    #[test]
    fn test_display_block_and_inline() {
        assert_eq!(parse_css("display: block").display, Some(DisplayMode::Block));
        assert_eq!(
            parse_css("display: inline").display,
            Some(DisplayMode::Inline)
        );
    }

    #[test]
    fn test_malformed_declarations_are_skipped() {
        let update = parse_css("width: banana; height: 80px; color: red;");
        assert!(update.width.is_none(), "non-numeric width is skipped");
        assert_eq!(update.height, Some(80.0));
        assert!(update.font_color.is_none(), "named colors are not extracted");
    }

    #[test]
    fn test_garbage_yields_empty_update() {
        let update = parse_css("this is not css at all {{{{");
        assert!(update.is_empty());
    }

    #[test]
    fn test_apply_to_merges_not_replaces() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Button, ElementOverrides::default());
        let mut el = store.get(&id).expect("exists").clone();
        let content_before = el.content.clone();

        parse_css("width: 200px").apply_to(&mut el);
        assert!((el.width - 200.0).abs() < f64::EPSILON);
        assert!((el.height - 60.0).abs() < f64::EPSILON, "height untouched");
        assert_eq!(el.content, content_before, "content untouched");
    }

    #[test]
    fn test_round_trip_through_synthesizer() {
        let mut store = ElementStore::new();
        let id = store.add(ElementKind::Box, ElementOverrides::default());
        let mut el = store.get(&id).expect("exists").clone();
        el.x = 33.3;
        el.y = -10.0;
        el.angle = 123.4;
        el.width = 222.2;
        el.font_size = Some(18.5);
        el.font_color = Some("#112233".to_string());
        store.replace(el.clone());

        let css = element_css(&el);
        let update = parse_css(&css);

        assert!((update.width.expect("width") - el.width).abs() <= 0.05);
        assert!((update.height.expect("height") - el.height).abs() <= 0.05);
        assert!((update.x.expect("x") - el.x).abs() <= 0.05);
        assert!((update.y.expect("y") - el.y).abs() <= 0.05);
        assert!((update.angle.expect("angle") - el.angle).abs() <= 0.05);
        assert!((update.font_size.expect("font size") - 18.5).abs() <= 0.05);
        assert_eq!(update.font_color.as_deref(), Some("#112233"));
        assert_eq!(update.background_color.as_deref(), Some("#6dd5ed"));
    }
}
