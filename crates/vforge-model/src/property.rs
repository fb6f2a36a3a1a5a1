use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// One declared property in a typed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef<T> {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<T>,
}

impl<T> PropertyDef<T> {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
            default: None,
        }
    }

    pub fn with_default(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }
}

pub type BooleanProperty = PropertyDef<bool>;
pub type TextProperty = PropertyDef<String>;
/// Default value is the key of the component swapped in.
pub type InstanceSwapProperty = PropertyDef<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Boolean,
    Text,
    InstanceSwap,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Boolean => "boolean",
            PropertyType::Text => "text",
            PropertyType::InstanceSwap => "instanceSwap",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independent property catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyCatalogs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub booleans: Vec<BooleanProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub texts: Vec<TextProperty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<InstanceSwapProperty>,
}

impl PropertyCatalogs {
    pub fn is_empty(&self) -> bool {
        self.booleans.is_empty() && self.texts.is_empty() && self.instances.is_empty()
    }

    pub fn len(&self) -> usize {
        self.booleans.len() + self.texts.len() + self.instances.len()
    }

    /// Keys of one catalog in declaration order.
    pub fn keys(&self, kind: PropertyType) -> Vec<&str> {
        match kind {
            PropertyType::Boolean => self.booleans.iter().map(|p| p.key.as_str()).collect(),
            PropertyType::Text => self.texts.iter().map(|p| p.key.as_str()).collect(),
            PropertyType::InstanceSwap => self.instances.iter().map(|p| p.key.as_str()).collect(),
        }
    }

    pub fn contains(&self, kind: PropertyType, key: &str) -> bool {
        self.keys(kind).contains(&key)
    }

    /// True when `key` is declared in any catalog.
    pub fn contains_any(&self, key: &str) -> bool {
        [
            PropertyType::Boolean,
            PropertyType::Text,
            PropertyType::InstanceSwap,
        ]
        .into_iter()
        .any(|kind| self.contains(kind, key))
    }
}

/// Where a binding writes its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BindingTarget {
    /// Exact element identity.
    Id(ElementId),
    /// First element carrying the role, in pre-order traversal.
    Role(String),
}

impl fmt::Display for BindingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingTarget::Id(id) => write!(f, "#{id}"),
            BindingTarget::Role(role) => write!(f, "role:{role}"),
        }
    }
}

/// Wiring from a declared property to a target element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub property: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub target: BindingTarget,
}

impl Binding {
    pub fn to_id(
        property: impl Into<String>,
        kind: PropertyType,
        id: impl Into<ElementId>,
    ) -> Self {
        Self {
            property: property.into(),
            kind,
            target: BindingTarget::Id(id.into()),
        }
    }

    pub fn to_role(
        property: impl Into<String>,
        kind: PropertyType,
        role: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            kind,
            target: BindingTarget::Role(role.into()),
        }
    }
}
