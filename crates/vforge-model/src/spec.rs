use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::{ModelError, Result};
use crate::property::{Binding, PropertyCatalogs};
use crate::state::State;
use crate::style::StyleOverride;
use crate::variant::VariantGroup;

/// The complete declarative document for one component family.
///
/// Values are never mutated after they have been handed out: every edit goes
/// through [`ComponentSpec::edit`], which clones first, so an earlier value
/// stays valid for comparison by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub root: Element,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<State>,
    #[serde(default, skip_serializing_if = "PropertyCatalogs::is_empty")]
    pub properties: PropertyCatalogs,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    /// Applied to the root before any state overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_style: Option<StyleOverride>,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>, root: Element) -> Self {
        Self {
            name: name.into(),
            description: None,
            root,
            variants: Vec::new(),
            states: Vec::new(),
            properties: PropertyCatalogs::default(),
            bindings: Vec::new(),
            base_style: None,
        }
    }

    /// Deep-clone, then patch. `self` is left untouched.
    #[must_use]
    pub fn edit<F>(&self, patch: F) -> ComponentSpec
    where
        F: FnOnce(&mut ComponentSpec),
    {
        let mut next = self.clone();
        patch(&mut next);
        next
    }

    /// Fallible variant of [`ComponentSpec::edit`].
    pub fn try_edit<F, E>(&self, patch: F) -> std::result::Result<ComponentSpec, E>
    where
        F: FnOnce(&mut ComponentSpec) -> std::result::Result<(), E>,
    {
        let mut next = self.clone();
        patch(&mut next)?;
        Ok(next)
    }

    pub fn rename_variant_value(
        &self,
        group_index: usize,
        value_index: usize,
        value: impl Into<String>,
    ) -> Result<ComponentSpec> {
        let value = value.into();
        self.try_edit(|spec| {
            let slot = spec
                .variants
                .get_mut(group_index)
                .and_then(|group| group.values.get_mut(value_index))
                .ok_or(ModelError::VariantValueOutOfRange {
                    group_index,
                    value_index,
                })?;
            *slot = value;
            Ok(())
        })
    }

    #[must_use]
    pub fn with_state(&self, state: State) -> ComponentSpec {
        self.edit(|spec| spec.states.push(state))
    }

    #[must_use]
    pub fn with_variant_group(&self, group: VariantGroup) -> ComponentSpec {
        self.edit(|spec| spec.variants.push(group))
    }

    #[must_use]
    pub fn with_base_style(&self, style: Option<StyleOverride>) -> ComponentSpec {
        self.edit(|spec| spec.base_style = style)
    }

    pub fn variant_group(&self, name: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|group| group.name == name)
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.root.find(id)
    }

    pub fn element_count(&self) -> usize {
        self.root.walk().count()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
