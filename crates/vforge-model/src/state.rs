use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::StyleOverride;
use crate::variant::Combination;

/// Partial mapping from variant group name to the value it requires.
pub type Selector = BTreeMap<String, String>;

/// Property values supplied by a state, one map per typed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyValues {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub booleans: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub texts: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub instances: BTreeMap<String, String>,
}

impl PropertyValues {
    pub fn is_empty(&self) -> bool {
        self.booleans.is_empty() && self.texts.is_empty() && self.instances.is_empty()
    }
}

/// What a state contributes when it is active.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StateOverlay {
    /// Root-level visual/layout overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<StyleOverride>,
    /// Element-level overrides keyed by element identity or role.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elements: BTreeMap<String, StyleOverride>,
    #[serde(default, skip_serializing_if = "PropertyValues::is_empty")]
    pub props: PropertyValues,
}

impl StateOverlay {
    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.elements.is_empty() && self.props.is_empty()
    }
}

/// A named, conditionally applied style/property overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `None` applies to every combination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(default, skip_serializing_if = "StateOverlay::is_empty")]
    pub overlay: StateOverlay,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            selector: None,
            overlay: StateOverlay::default(),
        }
    }

    pub fn when(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.selector
            .get_or_insert_with(Selector::new)
            .insert(group.into(), value.into());
        self
    }

    pub fn root_style(mut self, style: StyleOverride) -> Self {
        self.overlay.root = Some(style);
        self
    }

    pub fn element_style(mut self, key: impl Into<String>, style: StyleOverride) -> Self {
        self.overlay.elements.insert(key.into(), style);
        self
    }

    pub fn boolean(mut self, key: impl Into<String>, value: bool) -> Self {
        self.overlay.props.booleans.insert(key.into(), value);
        self
    }

    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overlay.props.texts.insert(key.into(), value.into());
        self
    }

    pub fn instance(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overlay.props.instances.insert(key.into(), value.into());
        self
    }

    /// True when every selector key maps to the identical value in `combination`.
    pub fn matches(&self, combination: &Combination) -> bool {
        selector_matches(combination, self.selector.as_ref())
    }
}

/// Selector matching shared by states and callers holding a bare selector.
pub fn selector_matches(combination: &Combination, selector: Option<&Selector>) -> bool {
    let Some(selector) = selector else {
        return true;
    };
    selector
        .iter()
        .all(|(group, value)| combination.get(group) == Some(value.as_str()))
}
