//! Fonts referenced by a specification.
//!
//! The expansion driver loads each distinct font once before building any
//! artifact.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use vforge_model::{ComponentSpec, StyleOverride, TextStyle};

use crate::cascade::resolve_style;
use crate::variants::{active_states, combinations};

pub const DEFAULT_FONT_FAMILY: &str = "Inter";
pub const DEFAULT_FONT_WEIGHT: u16 = 400;
pub const DEFAULT_FONT_STYLE: &str = "Regular";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontRef {
    pub family: String,
    pub style: String,
}

impl FontRef {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    pub fn from_text_style(text: &TextStyle) -> Self {
        Self {
            family: text
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            style: font_style_name(text.font_weight.unwrap_or(DEFAULT_FONT_WEIGHT)).to_string(),
        }
    }
}

impl Default for FontRef {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_STYLE)
    }
}

impl fmt::Display for FontRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// Host style name for a numeric weight, rounded to the nearest hundred.
pub fn font_style_name(weight: u16) -> &'static str {
    match weight.saturating_add(50) / 100 {
        0 | 1 => "Thin",
        2 => "Extra Light",
        3 => "Light",
        4 => DEFAULT_FONT_STYLE,
        5 => "Medium",
        6 => "Semi Bold",
        7 => "Bold",
        8 => "Extra Bold",
        _ => "Black",
    }
}

/// Weight-only layers are left to the resolved pass, which knows the family
/// they land on.
fn override_text(layer: &StyleOverride) -> Option<&TextStyle> {
    layer.text.as_ref().filter(|text| text.font_family.is_some())
}

/// Every distinct font the specification can render with.
///
/// Covers the resolved style of each text element under every combination,
/// plus any family named directly in the base style or a state overlay. Text
/// elements without a family use [`DEFAULT_FONT_FAMILY`].
pub fn collect_fonts(spec: &ComponentSpec) -> BTreeSet<FontRef> {
    let mut fonts = BTreeSet::new();

    let text_elements: Vec<_> = spec.root.walk().filter(|e| e.kind.is_text()).collect();
    if !text_elements.is_empty() {
        for combination in combinations(&spec.variants) {
            let active = active_states(&spec.states, &combination);
            for element in &text_elements {
                let is_root = std::ptr::eq(*element, &spec.root);
                let computed = resolve_style(element, &active, spec.base_style.as_ref(), is_root);
                let text = computed.text.unwrap_or_default();
                fonts.insert(FontRef::from_text_style(&text));
            }
        }
    }

    let overlays = spec.base_style.iter().chain(spec.states.iter().flat_map(|state| {
        state
            .overlay
            .root
            .iter()
            .chain(state.overlay.elements.values())
    }));
    fonts.extend(overlays.filter_map(override_text).map(FontRef::from_text_style));

    fonts
}
