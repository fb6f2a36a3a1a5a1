use serde::{Deserialize, Serialize};

use crate::element::{AutoLayout, Effect, Element, Paint, Stroke, TextStyle};

/// Partial visual/layout update.
///
/// Used for the base style, a state's root-level overrides and a state's
/// per-element overrides. Only set fields take part in a merge; an unset
/// field never clears a value resolved at an earlier stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<Effect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

impl StyleOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element's own authored fields expressed as the first cascade layer.
    pub fn from_element(element: &Element) -> Self {
        Self {
            fills: element.fills.clone(),
            strokes: element.strokes.clone(),
            corner_radius: element.corner_radius,
            effects: element.effects.clone(),
            opacity: None,
            visible: Some(element.visible),
            layout: element.layout.clone(),
            text: element.text_style.clone(),
        }
    }

    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fills = Some(vec![Paint::solid(color)]);
        self
    }

    pub fn stroke(mut self, color: impl Into<String>, weight: f64) -> Self {
        self.strokes = Some(vec![Stroke {
            color: color.into(),
            weight: Some(weight),
        }]);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn layout(mut self, layout: AutoLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn text(mut self, text: TextStyle) -> Self {
        self.text = Some(text);
        self
    }

    /// Every colour token carried by this override with its field path,
    /// e.g. `("fills[0]", "#fff")`, in field order.
    pub fn color_fields(&self) -> Vec<(String, &str)> {
        let mut fields = Vec::new();
        for (index, paint) in self.fills.iter().flatten().enumerate() {
            fields.push((format!("fills[{index}]"), paint.color.as_str()));
        }
        for (index, stroke) in self.strokes.iter().flatten().enumerate() {
            fields.push((format!("strokes[{index}]"), stroke.color.as_str()));
        }
        for (index, effect) in self.effects.iter().flatten().enumerate() {
            if let Some(color) = effect.color.as_deref() {
                fields.push((format!("effects[{index}].color"), color));
            }
        }
        if let Some(color) = self.text.as_ref().and_then(|text| text.color.as_deref()) {
            fields.push(("text.color".to_string(), color));
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_none()
            && self.strokes.is_none()
            && self.corner_radius.is_none()
            && self.effects.is_none()
            && self.opacity.is_none()
            && self.visible.is_none()
            && self.layout.is_none()
            && self.text.is_none()
    }
}
