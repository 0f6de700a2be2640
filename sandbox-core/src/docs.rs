//! Property documentation lookup for the teaching panel.
//!
//! Takes the synthesized CSS and a property table, and produces the ordered
//! list of explanations shown next to the generated code. The table content
//! is host data; a small built-in table ships for convenience and tests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical display priority. Properties not listed here sort after all
/// listed ones, keeping their relative order of first appearance.
const PROP_ORDER: [&str; 9] = [
    "display",
    "position",
    "top",
    "left",
    "width",
    "height",
    "transform",
    "zIndex",
    "backgroundColor",
];

/// Documentation for one CSS property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// camelCase property identifier (`backgroundColor`, `zIndex`, ...).
    pub key: String,
    /// Short human-readable property name.
    pub label: String,
    /// One-or-two sentence description.
    pub description: String,
    /// External reference link.
    pub link: String,
}

impl DocEntry {
    /// Convenience constructor.
    #[must_use]
    pub fn new(key: &str, label: &str, description: &str, link: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }
}

/// Read-only property table, keyed by camelCase identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocTable {
    entries: HashMap<String, DocEntry>,
}

impl DocTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, keyed by its own `key`.
    pub fn insert(&mut self, entry: DocEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Look up a property by camelCase key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DocEntry> {
        self.entries.get(key)
    }

    /// The built-in table covering the properties the synthesizer emits for
    /// positioning and sizing.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        let mdn = |prop: &str| format!("https://developer.mozilla.org/docs/Web/CSS/{prop}");
        table.insert(DocEntry::new(
            "display",
            "Display",
            "Sets the layout model for the element: flex, grid, block, and so on.",
            &mdn("display"),
        ));
        table.insert(DocEntry::new(
            "position",
            "Position",
            "Sets how the element is positioned: static, relative, absolute, and so on.",
            &mdn("position"),
        ));
        table.insert(DocEntry::new(
            "top",
            "Top offset",
            "Offset from the top of the positioning reference.",
            &mdn("top"),
        ));
        table.insert(DocEntry::new(
            "left",
            "Left offset",
            "Offset from the left of the positioning reference.",
            &mdn("left"),
        ));
        table.insert(DocEntry::new(
            "width",
            "Width",
            "Sets the width of the element.",
            &mdn("width"),
        ));
        table.insert(DocEntry::new(
            "height",
            "Height",
            "Sets the height of the element.",
            &mdn("height"),
        ));
        table.insert(DocEntry::new(
            "backgroundColor",
            "Background color",
            "Sets the background color of the element.",
            &mdn("background-color"),
        ));
        table.insert(DocEntry::new(
            "transform",
            "Transform",
            "Moves, rotates, and scales the element in one declaration.",
            &mdn("transform"),
        ));
        table.insert(DocEntry::new(
            "zIndex",
            "Stacking order",
            "Sets which element paints on top when elements overlap.",
            &mdn("z-index"),
        ));
        table
    }
}

/// Convert a hyphenated property name to its camelCase identifier
/// (`background-color` to `backgroundColor`).
#[must_use]
pub fn to_camel_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len());
    let mut upper_next = false;
    for ch in prop.trim().chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Look up documentation for every recognized property in the given CSS text,
/// ordered by the canonical priority sequence.
///
/// The property token before `:` in each declaration is normalized to
/// camelCase and looked up; unmatched properties are dropped. When
/// `transform` is present, `position`, `top`, and `left` are added (if the
/// table has them and they are not already present): transform-based
/// positioning conceptually builds on them. The sort is stable, so
/// properties outside the priority sequence keep their order of first
/// appearance.
#[must_use]
pub fn doc_entries(css: &str, table: &DocTable) -> Vec<DocEntry> {
    // Drop the selector head; only the declaration block matters.
    let body = css.find('{').map_or(css, |idx| &css[idx + 1..]);

    let props: Vec<String> = body
        .split(';')
        .map(str::trim)
        .filter(|line| line.contains(':'))
        .filter_map(|line| line.split(':').next())
        .map(to_camel_case)
        .collect();

    let mut list: Vec<DocEntry> = props
        .iter()
        .filter_map(|prop| table.get(prop))
        .cloned()
        .collect();

    if props.iter().any(|p| p == "transform") {
        for key in ["position", "top", "left"] {
            if let Some(entry) = table.get(key) {
                if !list.iter().any(|item| item.key == key) {
                    list.push(entry.clone());
                }
            }
        }
    }

    list.sort_by_key(|entry| {
        PROP_ORDER
            .iter()
            .position(|key| *key == entry.key)
            .unwrap_or(usize::MAX)
    });
    list
}
