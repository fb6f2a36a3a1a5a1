//! Binding target resolution.
//!
//! Targets are looked up through a [`NodeIndex`] built once per built tree
//! (the authored element tree, a preview tree, or a host artifact tree).
//! Identity lookup is exact. Role lookup returns the first node carrying the
//! role in pre-order traversal; later nodes with the same role are only
//! reachable through an identity binding.

use std::collections::HashMap;

use thiserror::Error;
use vforge_model::{Binding, BindingTarget, Element, ElementId};

/// Identity and role lookup over the nodes of one built tree.
#[derive(Debug, Clone)]
pub struct NodeIndex<T> {
    by_id: HashMap<String, T>,
    by_role: HashMap<String, T>,
}

impl<T> Default for NodeIndex<T> {
    fn default() -> Self {
        Self {
            by_id: HashMap::new(),
            by_role: HashMap::new(),
        }
    }
}

impl<T: Clone> NodeIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Call in traversal order: the first node seen for an
    /// identity or role is the one that stays addressable.
    pub fn insert(&mut self, id: &ElementId, role: Option<&str>, node: T) {
        if let Some(role) = role {
            self.by_role
                .entry(role.to_string())
                .or_insert_with(|| node.clone());
        }
        self.by_id.entry(id.to_string()).or_insert(node);
    }

    pub fn by_id(&self, id: &str) -> Option<&T> {
        self.by_id.get(id)
    }

    pub fn by_role(&self, role: &str) -> Option<&T> {
        self.by_role.get(role)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<'a> NodeIndex<&'a Element> {
    /// Index the authored element tree.
    pub fn from_tree(root: &'a Element) -> Self {
        let mut index = Self::new();
        for element in root.walk() {
            index.insert(&element.id, element.role.as_deref(), element);
        }
        index
    }
}

/// A binding whose target matched nothing. Reported, never fatal: the caller
/// skips that one property and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("binding for property '{property}' targets {target}, which matches no element")]
pub struct UnresolvedTarget {
    pub property: String,
    pub target: BindingTarget,
}

pub fn resolve_target<'i, T: Clone>(
    binding: &Binding,
    index: &'i NodeIndex<T>,
) -> Result<&'i T, UnresolvedTarget> {
    let found = match &binding.target {
        BindingTarget::Id(id) => index.by_id(id.as_str()),
        BindingTarget::Role(role) => index.by_role(role),
    };
    found.ok_or_else(|| UnresolvedTarget {
        property: binding.property.clone(),
        target: binding.target.clone(),
    })
}
