//! End-to-end validator behaviour.

use proptest::prelude::*;
use vforge_model::{
    Binding, BooleanProperty, ComponentSpec, Element, ElementKind, PropertyType, State,
    StyleOverride, TextProperty, VariantGroup, templates,
};
use vforge_validate::{
    DiagnosticCode, LARGE_COMBINATION_THRESHOLD, Severity, apply_auto_fixes, validate,
};

fn minimal() -> ComponentSpec {
    ComponentSpec::new(
        "Chip",
        Element::new("root", "Chip", ElementKind::Container)
            .with_child(Element::new("label", "Label", ElementKind::Text).with_role("label")),
    )
}

#[test]
fn templates_validate_cleanly() {
    for name in templates::TEMPLATE_NAMES {
        let report = validate(&templates::by_name(name, None).expect("template"));
        assert!(report.ok, "{name}: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "{name}: {:?}", report.warnings);
    }
}

#[test]
fn every_check_runs_without_early_exit() {
    let mut spec = minimal();
    spec.name = "  ".to_string();
    spec.variants = vec![
        VariantGroup::new("size", ["sm", "sm"]),
        VariantGroup::new("size", ["a,b"]),
    ];
    spec.states = vec![
        State::new("hover").root_style(StyleOverride::new().fill("#12345")),
        State::new("hover"),
    ];
    spec.properties.texts = vec![
        TextProperty::new("label", "Label"),
        TextProperty::new("label", "Label again"),
    ];
    spec.bindings = vec![Binding::to_role("missing", PropertyType::Text, "label")];

    let report = validate(&spec);
    assert!(!report.ok);
    for code in [
        DiagnosticCode::ComponentNameEmpty,
        DiagnosticCode::VariantGroupDuplicate,
        DiagnosticCode::VariantValueDuplicate,
        DiagnosticCode::VariantValueFormat,
        DiagnosticCode::StateDuplicate,
        DiagnosticCode::StyleColorInvalid,
        DiagnosticCode::PropDuplicate,
        DiagnosticCode::BindingUnmatched,
    ] {
        assert!(report.has_code(code), "missing {code}");
    }
    assert!(report.errors.iter().all(|d| d.severity == Severity::Error));
    assert!(report.warnings.iter().all(|d| d.severity == Severity::Warning));
}

#[test]
fn invalid_colour_carries_state_path() {
    let spec = minimal().with_state(
        State::new("hover").element_style("label", StyleOverride::new().stroke("blue", 1.0)),
    );
    let report = validate(&spec);
    let diagnostic = report
        .errors
        .iter()
        .find(|d| d.code == DiagnosticCode::StyleColorInvalid)
        .expect("colour error");
    assert_eq!(
        diagnostic.path.as_deref(),
        Some("states[0].overlay.elements.label.strokes[0]")
    );
    insta::assert_snapshot!(
        diagnostic.to_string(),
        @"[style.color.invalid] Invalid colour 'blue' in state 'hover' \
          (at states[0].overlay.elements.label.strokes[0])"
    );
}

#[test]
fn warnings_do_not_affect_ok() {
    let mut spec = minimal();
    spec.variants = vec![VariantGroup::new("size", ["x=l"])];
    spec.bindings = vec![Binding::to_id("ghost", PropertyType::Boolean, "nowhere")];
    let report = validate(&spec);
    assert!(report.ok);
    assert!(report.has_code(DiagnosticCode::VariantValueFormat));
    assert!(report.has_code(DiagnosticCode::BindingUnmatched));
    assert!(report.has_code(DiagnosticCode::BindingTargetUnresolved));
}

#[test]
fn group_without_values_is_an_error() {
    let spec = templates::button()
        .with_variant_group(VariantGroup::new("tone", Vec::<String>::new()));
    let report = validate(&spec);
    assert!(!report.ok);
    let diagnostic = report
        .errors
        .iter()
        .find(|d| d.code == DiagnosticCode::VariantGroupEmpty)
        .expect("empty group error");
    assert_eq!(diagnostic.path.as_deref(), Some("variants[2].values"));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn cross_catalog_key_reuse_is_tolerated() {
    let mut spec = minimal();
    spec.properties.booleans = vec![BooleanProperty::new("label", "Show label")];
    spec.properties.texts = vec![TextProperty::new("label", "Label")];
    assert!(validate(&spec).ok);
}

#[test]
fn duplicate_element_ids_are_errors() {
    let spec = ComponentSpec::new(
        "Pair",
        Element::new("root", "Pair", ElementKind::Container)
            .with_child(Element::new("dot", "A", ElementKind::Ellipse))
            .with_child(Element::new("dot", "B", ElementKind::Ellipse)),
    );
    let report = validate(&spec);
    assert_eq!(report.count_code(DiagnosticCode::ElementIdDuplicate), 1);
    assert_eq!(report.errors[0].path.as_deref(), Some("root.children[1]"));
}

#[test]
fn large_variant_space_warns_without_error() {
    let mut spec = minimal();
    spec.variants = (0..6)
        .map(|g| VariantGroup::new(format!("axis{g}"), ["a", "b", "c"]))
        .collect();
    let report = validate(&spec);
    assert!(report.ok);
    assert_eq!(report.error_count(), 0);
    assert!(report.has_code(DiagnosticCode::VariantCountLarge));
    assert!(729 > LARGE_COMBINATION_THRESHOLD);
}

#[test]
fn threshold_is_exclusive() {
    let mut spec = minimal();
    spec.variants = vec![
        VariantGroup::new("a", (0..5).map(|v| v.to_string())),
        VariantGroup::new("b", (0..10).map(|v| v.to_string())),
    ];
    assert!(!validate(&spec).has_code(DiagnosticCode::VariantCountLarge));
}

#[test]
fn duplicate_value_fixes_make_spec_valid() {
    let mut spec = minimal();
    spec.variants = vec![
        VariantGroup::new("size", ["sm", "sm", "md", "sm", "sm-2"]),
        VariantGroup::new("tone", ["Extra  Dark", "Extra  Dark"]),
    ];
    let report = validate(&spec);
    assert_eq!(report.count_code(DiagnosticCode::VariantValueDuplicate), 2);
    assert_eq!(report.auto_fixes.len(), 3);
    let targets: Vec<&str> = report.auto_fixes.iter().map(|f| f.to.as_str()).collect();
    assert_eq!(targets, vec!["sm-3", "sm-4", "Extra Dark-2"]);

    let fixed = apply_auto_fixes(&spec, &report.auto_fixes);
    assert!(validate(&fixed).ok);
    assert_eq!(spec.variants[0].values[1], "sm");
}

fn duplicated_groups() -> impl Strategy<Value = Vec<VariantGroup>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["a", "b", "a-2", "c d", "e,f"]), 1..6),
        1..4,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .enumerate()
            .map(|(index, values)| VariantGroup::new(format!("g{index}"), values))
            .collect()
    })
}

proptest! {
    #[test]
    fn one_error_per_offending_group_and_fixes_resolve_them(groups in duplicated_groups()) {
        let mut spec = minimal();
        spec.variants = groups;
        let offending = spec
            .variants
            .iter()
            .filter(|group| {
                let mut values = group.values.clone();
                values.sort();
                values.dedup();
                values.len() != group.values.len()
            })
            .count();
        let duplicates: usize = spec
            .variants
            .iter()
            .map(|group| {
                let mut values = group.values.clone();
                values.sort();
                values.dedup();
                group.values.len() - values.len()
            })
            .sum();

        let report = validate(&spec);
        prop_assert_eq!(report.count_code(DiagnosticCode::VariantValueDuplicate), offending);
        prop_assert_eq!(report.auto_fixes.len(), duplicates);
        prop_assert_eq!(report.ok, offending == 0);

        let fixed = apply_auto_fixes(&spec, &report.auto_fixes);
        prop_assert!(validate(&fixed).ok);
    }
}
