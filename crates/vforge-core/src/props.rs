//! Property value resolution per combination.
//!
//! Preview and the artifact builder both read property values through
//! [`resolve_properties`], so a combination renders the same way in both.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vforge_model::{Binding, PropertyCatalogs, PropertyType, State};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PropertyValue {
    /// Drives the target's visibility.
    Boolean(bool),
    /// Replaces the target's characters.
    Text(String),
    /// Key of the component swapped into the target, if any.
    InstanceSwap(Option<String>),
}

/// Resolved values for every declared property under one combination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedProperties {
    pub booleans: BTreeMap<String, bool>,
    pub texts: BTreeMap<String, String>,
    pub instances: BTreeMap<String, Option<String>>,
}

impl ResolvedProperties {
    /// Value a binding writes, looked up in the catalog matching its type.
    /// `None` when the key was never declared in that catalog.
    pub fn value_for(&self, binding: &Binding) -> Option<PropertyValue> {
        let key = binding.property.as_str();
        match binding.kind {
            PropertyType::Boolean => self.booleans.get(key).copied().map(PropertyValue::Boolean),
            PropertyType::Text => self.texts.get(key).cloned().map(PropertyValue::Text),
            PropertyType::InstanceSwap => self
                .instances
                .get(key)
                .cloned()
                .map(PropertyValue::InstanceSwap),
        }
    }
}

/// Declared defaults (`false`, empty string, no instance) overlaid by each
/// active state's property values in declaration order. Later states win per
/// key. State values for undeclared keys are ignored.
pub fn resolve_properties(
    catalogs: &PropertyCatalogs,
    active_states: &[&State],
) -> ResolvedProperties {
    let mut resolved = ResolvedProperties {
        booleans: catalogs
            .booleans
            .iter()
            .map(|prop| (prop.key.clone(), prop.default.unwrap_or(false)))
            .collect(),
        texts: catalogs
            .texts
            .iter()
            .map(|prop| (prop.key.clone(), prop.default.clone().unwrap_or_default()))
            .collect(),
        instances: catalogs
            .instances
            .iter()
            .map(|prop| (prop.key.clone(), prop.default.clone()))
            .collect(),
    };

    for state in active_states {
        let props = &state.overlay.props;
        for (key, value) in &props.booleans {
            if let Some(slot) = resolved.booleans.get_mut(key) {
                *slot = *value;
            }
        }
        for (key, value) in &props.texts {
            if let Some(slot) = resolved.texts.get_mut(key) {
                slot.clone_from(value);
            }
        }
        for (key, value) in &props.instances {
            if let Some(slot) = resolved.instances.get_mut(key) {
                *slot = Some(value.clone());
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use vforge_model::{BooleanProperty, InstanceSwapProperty, TextProperty};

    fn catalogs() -> PropertyCatalogs {
        PropertyCatalogs {
            booleans: vec![
                BooleanProperty::new("showIcon", "Show icon"),
                BooleanProperty::new("showHelper", "Show helper").with_default(true),
            ],
            texts: vec![
                TextProperty::new("label", "Label").with_default("Button".to_string()),
                TextProperty::new("hint", "Hint"),
            ],
            instances: vec![InstanceSwapProperty::new("icon", "Icon")],
        }
    }

    #[test]
    fn defaults_apply_without_states() {
        let resolved = resolve_properties(&catalogs(), &[]);
        assert!(!resolved.booleans["showIcon"]);
        assert!(resolved.booleans["showHelper"]);
        assert_eq!(resolved.texts["label"], "Button");
        assert_eq!(resolved.texts["hint"], "");
        assert_eq!(resolved.instances["icon"], None);
    }

    #[test]
    fn later_state_wins_per_key() {
        let first = State::new("a").text("label", "First").boolean("showIcon", true);
        let second = State::new("b").text("label", "Second").instance("icon", "arrow");
        let resolved = resolve_properties(&catalogs(), &[&first, &second]);
        assert_eq!(resolved.texts["label"], "Second");
        assert!(resolved.booleans["showIcon"]);
        assert_eq!(resolved.instances["icon"], Some("arrow".to_string()));

        let swapped = resolve_properties(&catalogs(), &[&second, &first]);
        assert_eq!(swapped.texts["label"], "First");
    }

    #[test]
    fn undeclared_state_keys_are_ignored() {
        let state = State::new("a").text("missing", "x");
        let resolved = resolve_properties(&catalogs(), &[&state]);
        assert!(!resolved.texts.contains_key("missing"));
    }

    #[test]
    fn value_for_uses_binding_type() {
        let resolved = resolve_properties(&catalogs(), &[]);
        let label = Binding::to_role("label", PropertyType::Text, "label");
        assert_eq!(
            resolved.value_for(&label),
            Some(PropertyValue::Text("Button".to_string()))
        );
        let wrong_catalog = Binding::to_role("label", PropertyType::Boolean, "label");
        assert_eq!(resolved.value_for(&wrong_catalog), None);
        let icon = Binding::to_id("icon", PropertyType::InstanceSwap, "leading-icon");
        assert_eq!(resolved.value_for(&icon), Some(PropertyValue::InstanceSwap(None)));
    }
}
