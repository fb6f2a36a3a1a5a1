//! Live preview of a single combination.
//!
//! Uses the same style and property resolution as artifact expansion so the
//! preview and the generated output cannot drift apart.

use serde::Serialize;
use thiserror::Error;
use vforge_core::{
    ComputedStyle, NodeIndex, PropertyValue, UnresolvedTarget, active_states, resolve_properties,
    resolve_style, resolve_target,
};
use vforge_model::{Combination, ComponentSpec, Element, ElementId, ElementKind};

/// One rendered node of a preview tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewNode {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub style: ComputedStyle,
    /// Style visibility, then any bound boolean property.
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Swapped-in component key for a bound instance-swap property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    fn from_element(element: &Element, style: ComputedStyle) -> Self {
        let text = element
            .text
            .as_ref()
            .and_then(|content| content.default.clone().or_else(|| content.placeholder.clone()));
        Self {
            id: element.id.clone(),
            name: element.name.clone(),
            kind: element.kind,
            visible: style.visible,
            style,
            text,
            instance: None,
            children: Vec::new(),
        }
    }

    fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut PreviewNode> {
        match path.split_first() {
            None => Some(self),
            Some((&first, rest)) => self.children.get_mut(first)?.at_path_mut(rest),
        }
    }

    /// Pre-order search by identity.
    pub fn find(&self, id: &str) -> Option<&PreviewNode> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// A rendered combination plus any bindings that could not be wired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub combination: Combination,
    pub root: PreviewNode,
    #[serde(skip)]
    pub skipped_bindings: Vec<UnresolvedTarget>,
}

/// Render one combination of `spec`.
pub fn render_preview(spec: &ComponentSpec, combination: &Combination) -> Preview {
    let active = active_states(&spec.states, combination);
    let base = spec.base_style.as_ref();

    let mut root = PreviewNode::from_element(
        &spec.root,
        resolve_style(&spec.root, &active, base, true),
    );
    let mut index: NodeIndex<Vec<usize>> = NodeIndex::new();
    for (path, element) in spec.root.walk_indexed() {
        if let Some((&last, parent_path)) = path.split_last()
            && let Some(parent) = root.at_path_mut(parent_path)
        {
            let style = resolve_style(element, &active, base, false);
            // Pre-order: siblings arrive in index order, so `last` is the next slot.
            debug_assert_eq!(parent.children.len(), last);
            parent.children.push(PreviewNode::from_element(element, style));
        }
        index.insert(&element.id, element.role.as_deref(), path);
    }

    let properties = resolve_properties(&spec.properties, &active);
    let mut skipped_bindings = Vec::new();
    for binding in &spec.bindings {
        let path = match resolve_target(binding, &index) {
            Ok(path) => path.clone(),
            Err(unresolved) => {
                tracing::debug!(%unresolved, "preview skipping binding");
                skipped_bindings.push(unresolved);
                continue;
            }
        };
        let (Some(node), Some(value)) = (root.at_path_mut(&path), properties.value_for(binding))
        else {
            continue;
        };
        match value {
            PropertyValue::Boolean(visible) => node.visible = visible,
            PropertyValue::Text(text) => node.text = Some(text),
            PropertyValue::InstanceSwap(key) => node.instance = key,
        }
    }

    Preview {
        combination: combination.clone(),
        root,
        skipped_bindings,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown variant group '{0}'")]
    UnknownGroup(String),
    #[error("Variant group '{group}' has no value '{value}'")]
    UnknownValue { group: String, value: String },
    #[error("Variant group '{0}' has no values")]
    EmptyGroup(String),
}

/// Complete a partial pick into a full combination: groups not picked take
/// their first value.
pub fn select_combination(
    spec: &ComponentSpec,
    picks: &Combination,
) -> Result<Combination, SelectionError> {
    for (group, value) in picks.iter() {
        let declared = spec
            .variant_group(group)
            .ok_or_else(|| SelectionError::UnknownGroup(group.to_string()))?;
        if !declared.values.iter().any(|v| v == value) {
            return Err(SelectionError::UnknownValue {
                group: group.to_string(),
                value: value.to_string(),
            });
        }
    }

    let mut combination = Combination::new();
    for group in &spec.variants {
        let value = match picks.get(&group.name) {
            Some(value) => value,
            None => group
                .values
                .first()
                .map(String::as_str)
                .ok_or_else(|| SelectionError::EmptyGroup(group.name.clone()))?,
        };
        combination.set(group.name.as_str(), value);
    }
    Ok(combination)
}
