//! Cascade and property resolution across combinations.

use proptest::prelude::*;
use vforge_core::{
    PropertyValue, active_states, combinations, resolve_properties, resolve_style, resolve_tree,
};
use vforge_model::{
    Binding, Combination, ComponentSpec, Element, ElementKind, PropertyType, State, StyleOverride,
    TextProperty, VariantGroup, templates,
};

fn hover_size_spec() -> ComponentSpec {
    let root = Element::new("root", "Chip", ElementKind::Container)
        .with_child(Element::new("label", "Label", ElementKind::Text).with_role("label"));
    let mut spec = ComponentSpec::new("Chip", root);
    spec.variants = vec![
        VariantGroup::new("state", ["default", "hover"]),
        VariantGroup::new("size", ["sm", "md"]),
    ];
    spec.states = vec![
        State::new("hover")
            .when("state", "hover")
            .root_style(StyleOverride::new().fill("#1d4ed8")),
        State::new("small")
            .when("size", "sm")
            .root_style(StyleOverride::new().radius(2.0)),
    ];
    spec.with_base_style(Some(StyleOverride::new().fill("#2563eb").radius(6.0)))
}

#[test]
fn hover_and_size_selectors_apply_independently() {
    let spec = hover_size_spec();
    let all = combinations(&spec.variants);
    assert_eq!(all.len(), 4);

    for combination in &all {
        let active = active_states(&spec.states, combination);
        let style = resolve_style(&spec.root, &active, spec.base_style.as_ref(), true);
        let hovered = combination.get("state") == Some("hover");
        let small = combination.get("size") == Some("sm");

        let fill = style.fills.as_ref().map(|fills| fills[0].color.as_str());
        assert_eq!(
            fill,
            Some(if hovered { "#1d4ed8" } else { "#2563eb" }),
            "{combination}"
        );
        assert_eq!(
            style.corner_radius,
            Some(if small { 2.0 } else { 6.0 }),
            "{combination}"
        );
    }
}

#[test]
fn base_style_and_root_overrides_skip_children() {
    let spec = hover_size_spec();
    let combination = Combination::new().with("state", "hover").with("size", "sm");
    let resolved = resolve_tree(&spec, &combination);
    assert_eq!(resolved.len(), 2);
    let (id, label) = &resolved[1];
    assert_eq!(id.as_str(), "label");
    assert_eq!(label.fills, None);
    assert_eq!(label.corner_radius, None);
}

#[test]
fn later_size_state_overrides_disabled_label_colour() {
    let spec = templates::button();
    let combination = Combination::new().with("state", "disabled").with("size", "lg");
    let resolved = resolve_tree(&spec, &combination);
    let label = resolved
        .iter()
        .find(|(id, _)| id.as_str() == "label")
        .map(|(_, style)| style)
        .expect("label resolved");
    let text = label.text.as_ref().expect("label is text");
    assert_eq!(text.font_size, Some(16.0));
    assert_eq!(text.color.as_deref(), Some("#ffffff"));
}

#[test]
fn state_properties_follow_declaration_order() {
    let mut spec = hover_size_spec();
    spec.properties.texts =
        vec![TextProperty::new("label", "Label").with_default("Chip".to_string())];
    spec.states[0] = spec.states[0].clone().text("label", "Hovered");
    spec.states[1] = spec.states[1].clone().text("label", "Small");

    let binding = Binding::to_role("label", PropertyType::Text, "label");
    let value_at = |state: &str, size: &str| {
        let combination = Combination::new().with("state", state).with("size", size);
        let active = active_states(&spec.states, &combination);
        resolve_properties(&spec.properties, &active).value_for(&binding)
    };
    assert_eq!(value_at("default", "md"), Some(PropertyValue::Text("Chip".into())));
    assert_eq!(value_at("hover", "md"), Some(PropertyValue::Text("Hovered".into())));
    assert_eq!(value_at("hover", "sm"), Some(PropertyValue::Text("Small".into())));
}

proptest! {
    #[test]
    fn resolution_is_idempotent(radius in 0.0f64..64.0, opacity in 0.0f64..1.0) {
        let element = Element::new("root", "Root", ElementKind::Container);
        let a = State::new("a").root_style(StyleOverride::new().radius(radius));
        let b = State::new("b").root_style(StyleOverride::new().opacity(opacity));
        let base = StyleOverride::new().fill("#000");
        let first = resolve_style(&element, &[&a, &b], Some(&base), true);
        let second = resolve_style(&element, &[&a, &b], Some(&base), true);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn later_state_wins_on_shared_field(x in 0.0f64..32.0, y in 32.0f64..64.0) {
        let element = Element::new("root", "Root", ElementKind::Container);
        let a = State::new("a").root_style(StyleOverride::new().radius(x));
        let b = State::new("b").root_style(StyleOverride::new().radius(y));
        prop_assert_eq!(resolve_style(&element, &[&a, &b], None, true).corner_radius, Some(y));
        prop_assert_eq!(resolve_style(&element, &[&b, &a], None, true).corner_radius, Some(x));
    }
}
