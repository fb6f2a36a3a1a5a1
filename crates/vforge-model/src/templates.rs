//! Starter specifications.

use crate::element::{
    Alignment, AutoLayout, Element, ElementKind, LayoutDirection, Padding, Paint, Stroke,
    TextContent, TextStyle,
};
use crate::error::{ModelError, Result};
use crate::property::{Binding, BooleanProperty, InstanceSwapProperty, PropertyType, TextProperty};
use crate::spec::ComponentSpec;
use crate::state::State;
use crate::style::StyleOverride;
use crate::variant::VariantGroup;

pub const TEMPLATE_NAMES: [&str; 3] = ["button", "input", "blank"];

pub fn by_name(template: &str, name: Option<&str>) -> Result<ComponentSpec> {
    let mut spec = match template {
        "button" => button(),
        "input" => input_field(),
        "blank" => blank(name.unwrap_or("Component")),
        other => return Err(ModelError::UnknownTemplate(other.to_string())),
    };
    if let Some(name) = name {
        spec.name = name.to_string();
    }
    Ok(spec)
}

/// A root container with nothing in it.
pub fn blank(name: &str) -> ComponentSpec {
    ComponentSpec::new(name, Element::new("root", name, ElementKind::Container))
}

fn label_style(size: f64) -> TextStyle {
    TextStyle {
        font_family: Some("Inter".to_string()),
        font_size: Some(size),
        font_weight: Some(500),
        line_height: Some(size * 1.5),
        letter_spacing: Some(0.0),
        color: Some("#ffffff".to_string()),
    }
}

/// Button with state × size variants, an optional leading icon and a label.
pub fn button() -> ComponentSpec {
    let mut root = Element::new("root", "Button", ElementKind::Container).with_layout(AutoLayout {
        direction: Some(LayoutDirection::Horizontal),
        gap: Some(8.0),
        padding: Some(Padding::symmetric(10.0, 16.0)),
        primary_align: Some(Alignment::Center),
        counter_align: Some(Alignment::Center),
    });
    root.corner_radius = Some(6.0);
    root = root
        .with_fills(vec![Paint::solid("#2563eb")])
        .with_child(
            Element::new("leading-icon", "Icon", ElementKind::Icon)
                .with_role("icon")
                .hidden(),
        )
        .with_child(
            Element::new("label", "Label", ElementKind::Text)
                .with_role("label")
                .with_text("Button")
                .with_text_style(label_style(14.0)),
        );

    let mut spec = ComponentSpec::new("Button", root);
    spec.variants = vec![
        VariantGroup::new("state", ["default", "hover", "pressed", "disabled"]),
        VariantGroup::new("size", ["sm", "md", "lg"]),
    ];
    spec.states = vec![
        State::new("hover")
            .when("state", "hover")
            .root_style(StyleOverride::new().fill("#1d4ed8")),
        State::new("pressed")
            .when("state", "pressed")
            .root_style(StyleOverride::new().fill("#1e40af")),
        State::new("disabled")
            .when("state", "disabled")
            .root_style(StyleOverride::new().fill("#94a3b8").opacity(0.6))
            .element_style(
                "label",
                StyleOverride::new().text(TextStyle {
                    color: Some("#e2e8f0".to_string()),
                    ..TextStyle::default()
                }),
            ),
        State::new("small")
            .when("size", "sm")
            .root_style(StyleOverride::new().layout(AutoLayout {
                padding: Some(Padding::symmetric(6.0, 12.0)),
                gap: Some(6.0),
                ..AutoLayout::default()
            }))
            .element_style("label", StyleOverride::new().text(label_style(12.0))),
        State::new("large")
            .when("size", "lg")
            .root_style(StyleOverride::new().layout(AutoLayout {
                padding: Some(Padding::symmetric(14.0, 20.0)),
                ..AutoLayout::default()
            }))
            .element_style("label", StyleOverride::new().text(label_style(16.0))),
    ];
    spec.properties.booleans =
        vec![BooleanProperty::new("showIcon", "Show icon").with_default(false)];
    spec.properties.texts =
        vec![TextProperty::new("label", "Label").with_default("Button".to_string())];
    spec.properties.instances = vec![InstanceSwapProperty::new("icon", "Icon")];
    spec.bindings = vec![
        Binding::to_role("showIcon", PropertyType::Boolean, "icon"),
        Binding::to_role("label", PropertyType::Text, "label"),
        Binding::to_id("icon", PropertyType::InstanceSwap, "leading-icon"),
    ];
    spec
}

/// Text input with focus and error states and a helper message.
pub fn input_field() -> ComponentSpec {
    let mut field = Element::new("field", "Field", ElementKind::Container).with_layout(AutoLayout {
        direction: Some(LayoutDirection::Horizontal),
        padding: Some(Padding::symmetric(8.0, 12.0)),
        counter_align: Some(Alignment::Center),
        ..AutoLayout::default()
    });
    field.corner_radius = Some(4.0);
    field.strokes = Some(vec![Stroke {
        color: "#cbd5e1".to_string(),
        weight: Some(1.0),
    }]);
    field = field.with_fills(vec![Paint::solid("#ffffff")]).with_child({
        let mut value = Element::new("value", "Value", ElementKind::Text).with_role("value");
        value.text = Some(TextContent {
            default: None,
            placeholder: Some("Placeholder".to_string()),
        });
        value.text_style = Some(TextStyle {
            color: Some("#0f172a".to_string()),
            ..label_style(14.0)
        });
        value
    });

    let root = Element::new("root", "Input", ElementKind::Container)
        .with_layout(AutoLayout {
            direction: Some(LayoutDirection::Vertical),
            gap: Some(4.0),
            ..AutoLayout::default()
        })
        .with_child(field)
        .with_child(
            Element::new("helper", "Helper", ElementKind::Text)
                .with_role("helper")
                .with_text("Helper text")
                .with_text_style(TextStyle {
                    color: Some("#64748b".to_string()),
                    ..label_style(12.0)
                }),
        );

    let mut spec = ComponentSpec::new("Input", root);
    spec.variants = vec![VariantGroup::new("state", ["default", "focus", "error"])];
    spec.states = vec![
        State::new("focus")
            .when("state", "focus")
            .element_style("field", StyleOverride::new().stroke("#2563eb", 2.0)),
        State::new("error")
            .when("state", "error")
            .element_style("field", StyleOverride::new().stroke("#dc2626", 1.0))
            .element_style(
                "helper",
                StyleOverride::new().text(TextStyle {
                    color: Some("#dc2626".to_string()),
                    ..TextStyle::default()
                }),
            )
            .text("helper", "Something went wrong"),
    ];
    spec.properties.booleans =
        vec![BooleanProperty::new("showHelper", "Show helper").with_default(true)];
    spec.properties.texts = vec![
        TextProperty::new("value", "Value"),
        TextProperty::new("helper", "Helper text").with_default("Helper text".to_string()),
    ];
    spec.bindings = vec![
        Binding::to_id("showHelper", PropertyType::Boolean, "helper"),
        Binding::to_role("value", PropertyType::Text, "value"),
        Binding::to_role("helper", PropertyType::Text, "helper"),
    ];
    spec
}
