//! Style cascade resolution.
//!
//! Resolution order, later wins field by field:
//!
//! 1. the element's own authored fields,
//! 2. the specification's base style (root only),
//! 3. for each active state in declaration order: the state's root-level
//!    override (root only), then the state's element-level override keyed by
//!    the element's identity, falling back to its role.
//!
//! Every stage is a [`StyleOverride`] folded into the accumulator by
//! [`merge`]. An unset field in a later layer never clears a value resolved
//! earlier.

use serde::{Deserialize, Serialize};
use vforge_model::{
    AutoLayout, Combination, ComponentSpec, Effect, Element, ElementId, Paint, State, Stroke,
    StyleOverride, TextStyle,
};

use crate::variants::active_states;

/// Fully resolved visual properties of one element under one combination.
///
/// Unset fields stay `None`; the artifact builder picks a host default
/// (no border, no radius, host font).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComputedStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    pub visible: bool,
    #[serde(skip_serializing_if = "AutoLayout::is_empty")]
    pub layout: AutoLayout,
    /// Only present for text elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            fills: None,
            strokes: None,
            corner_radius: None,
            effects: None,
            opacity: None,
            visible: true,
            layout: AutoLayout::default(),
            text: None,
        }
    }
}

impl ComputedStyle {
    /// Letter spacing in pixels. Authored values are a percentage of the
    /// font size; preview and artifact builder both convert through here.
    pub fn letter_spacing_px(&self) -> Option<f64> {
        let text = self.text.as_ref()?;
        let percent = text.letter_spacing?;
        let size = text.font_size?;
        Some(size * percent / 100.0)
    }
}

fn overwrite<T: Clone>(slot: &mut Option<T>, value: Option<&T>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}

fn merge_layout(mut acc: AutoLayout, layer: &AutoLayout) -> AutoLayout {
    overwrite(&mut acc.direction, layer.direction.as_ref());
    overwrite(&mut acc.gap, layer.gap.as_ref());
    overwrite(&mut acc.padding, layer.padding.as_ref());
    overwrite(&mut acc.primary_align, layer.primary_align.as_ref());
    overwrite(&mut acc.counter_align, layer.counter_align.as_ref());
    acc
}

fn merge_text(mut acc: TextStyle, layer: &TextStyle) -> TextStyle {
    overwrite(&mut acc.font_family, layer.font_family.as_ref());
    overwrite(&mut acc.font_size, layer.font_size.as_ref());
    overwrite(&mut acc.font_weight, layer.font_weight.as_ref());
    overwrite(&mut acc.line_height, layer.line_height.as_ref());
    overwrite(&mut acc.letter_spacing, layer.letter_spacing.as_ref());
    overwrite(&mut acc.color, layer.color.as_ref());
    acc
}

/// Field-level merge of one cascade layer into the accumulator.
pub fn merge(mut acc: ComputedStyle, layer: &StyleOverride) -> ComputedStyle {
    overwrite(&mut acc.fills, layer.fills.as_ref());
    overwrite(&mut acc.strokes, layer.strokes.as_ref());
    overwrite(&mut acc.corner_radius, layer.corner_radius.as_ref());
    overwrite(&mut acc.effects, layer.effects.as_ref());
    overwrite(&mut acc.opacity, layer.opacity.as_ref());
    if let Some(visible) = layer.visible {
        acc.visible = visible;
    }
    if let Some(layout) = &layer.layout {
        acc.layout = merge_layout(acc.layout, layout);
    }
    if let Some(text) = &layer.text {
        acc.text = Some(merge_text(acc.text.unwrap_or_default(), text));
    }
    acc
}

/// Element-level override a state carries for `element`: by identity first,
/// then by role.
pub fn element_override<'a>(state: &'a State, element: &Element) -> Option<&'a StyleOverride> {
    let elements = &state.overlay.elements;
    elements.get(element.id.as_str()).or_else(|| {
        element
            .role
            .as_deref()
            .and_then(|role| elements.get(role))
    })
}

/// Layers applied after the element's authored fields, in precedence order.
pub fn cascade_layers<'a>(
    element: &Element,
    active_states: &[&'a State],
    base_style: Option<&'a StyleOverride>,
    is_root: bool,
) -> Vec<&'a StyleOverride> {
    let mut layers = Vec::new();
    if is_root {
        layers.extend(base_style);
    }
    for &state in active_states {
        if is_root {
            layers.extend(state.overlay.root.as_ref());
        }
        layers.extend(element_override(state, element));
    }
    layers
}

/// Resolve one element's style for the states active in a combination.
pub fn resolve_style(
    element: &Element,
    active_states: &[&State],
    base_style: Option<&StyleOverride>,
    is_root: bool,
) -> ComputedStyle {
    let authored = merge(
        ComputedStyle::default(),
        &StyleOverride::from_element(element),
    );
    let mut computed = cascade_layers(element, active_states, base_style, is_root)
        .into_iter()
        .fold(authored, merge);
    if !element.kind.is_text() {
        computed.text = None;
    }
    computed
}

/// Resolve every element of the tree for one combination, in pre-order.
pub fn resolve_tree(
    spec: &ComponentSpec,
    combination: &Combination,
) -> Vec<(ElementId, ComputedStyle)> {
    let active = active_states(&spec.states, combination);
    spec.root
        .walk()
        .map(|element| {
            let is_root = std::ptr::eq(element, &spec.root);
            (
                element.id.clone(),
                resolve_style(element, &active, spec.base_style.as_ref(), is_root),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vforge_model::{ElementKind, LayoutDirection, Padding};

    #[test]
    fn unset_layer_fields_keep_resolved_values() {
        let acc = merge(
            ComputedStyle::default(),
            &StyleOverride::new().fill("#111111").radius(4.0),
        );
        let acc = merge(acc, &StyleOverride::new().opacity(0.5));
        assert_eq!(acc.fills, Some(vec![Paint::solid("#111111")]));
        assert_eq!(acc.corner_radius, Some(4.0));
        assert_eq!(acc.opacity, Some(0.5));
    }

    #[test]
    fn explicit_empty_list_overrides() {
        let acc = merge(ComputedStyle::default(), &StyleOverride::new().fill("#111111"));
        let mut clear = StyleOverride::new();
        clear.fills = Some(vec![]);
        let acc = merge(acc, &clear);
        assert_eq!(acc.fills, Some(vec![]));
    }

    #[test]
    fn layout_merges_field_by_field() {
        let element = Element::new("root", "Root", ElementKind::Container).with_layout(AutoLayout {
            direction: Some(LayoutDirection::Horizontal),
            gap: Some(8.0),
            ..AutoLayout::default()
        });
        let state = State::new("dense").root_style(StyleOverride::new().layout(AutoLayout {
            padding: Some(Padding::uniform(2.0)),
            ..AutoLayout::default()
        }));
        let computed = resolve_style(&element, &[&state], None, true);
        assert_eq!(computed.layout.direction, Some(LayoutDirection::Horizontal));
        assert_eq!(computed.layout.gap, Some(8.0));
        assert_eq!(computed.layout.padding, Some(Padding::uniform(2.0)));
    }

    #[test]
    fn text_style_dropped_for_non_text_elements() {
        let mut element = Element::new("box", "Box", ElementKind::Rectangle);
        element.text_style = Some(TextStyle {
            font_size: Some(12.0),
            ..TextStyle::default()
        });
        assert_eq!(resolve_style(&element, &[], None, false).text, None);
    }

    #[test]
    fn letter_spacing_is_percent_of_font_size() {
        let element = Element::new("t", "T", ElementKind::Text).with_text_style(TextStyle {
            font_size: Some(20.0),
            letter_spacing: Some(5.0),
            ..TextStyle::default()
        });
        let computed = resolve_style(&element, &[], None, false);
        assert_eq!(computed.letter_spacing_px(), Some(1.0));
    }

    #[test]
    fn identity_override_wins_over_role_override() {
        let element = Element::new("title", "Title", ElementKind::Text).with_role("label");
        let state = State::new("s")
            .element_style("label", StyleOverride::new().opacity(0.2))
            .element_style("title", StyleOverride::new().opacity(0.9));
        let computed = resolve_style(&element, &[&state], None, false);
        assert_eq!(computed.opacity, Some(0.9));
    }

    #[test]
    fn missing_radius_and_color_resolve_to_unset() {
        let element = Element::new("e", "E", ElementKind::Ellipse);
        let computed = resolve_style(&element, &[], None, false);
        assert_eq!(computed.corner_radius, None);
        assert_eq!(computed.fills, None);
        assert!(computed.visible);
    }
}
