//! File-backed artifact builder.
//!
//! Generated artifacts are recorded as a flat node arena and written to a
//! JSON manifest. Reopening an existing manifest keeps its nodes, so the
//! assets container is found by name instead of being created again.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vforge_core::{ComputedStyle, FontRef, PropertyValue};
use vforge_expand::{ArtifactBuilder, BuildError, Member, NodeRequest};
use vforge_model::{Binding, Combination, ElementId, PropertyCatalogs};

pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Top-level holder of generated artifacts.
    Assets,
    Family,
    Container,
    Text,
    Rectangle,
    Ellipse,
    Icon,
}

impl From<vforge_model::ElementKind> for NodeKind {
    fn from(kind: vforge_model::ElementKind) -> Self {
        use vforge_model::ElementKind;
        match kind {
            ElementKind::Container => NodeKind::Container,
            ElementKind::Text => NodeKind::Text,
            ElementKind::Rectangle => NodeKind::Rectangle,
            ElementKind::Ellipse => NodeKind::Ellipse,
            ElementKind::Icon => NodeKind::Icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ComputedStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Combination tag, set once the node joins a family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Combination>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<PropertyCatalogs>,
}

impl ManifestNode {
    fn new(id: NodeId, name: &str, kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            element: None,
            parent,
            children: Vec::new(),
            style: None,
            text: None,
            variant: None,
            properties: BTreeMap::new(),
            bindings: Vec::new(),
            catalogs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub fonts: BTreeSet<FontRef>,
    #[serde(default)]
    pub nodes: Vec<ManifestNode>,
}

impl Manifest {
    pub fn node(&self, id: NodeId) -> Option<&ManifestNode> {
        self.nodes.get(id)
    }

    /// Top-level node named `name`.
    pub fn find_root(&self, name: &str) -> Option<&ManifestNode> {
        self.nodes
            .iter()
            .find(|node| node.parent.is_none() && node.name == name)
    }

    pub fn children_of(&self, id: NodeId) -> Vec<&ManifestNode> {
        self.node(id)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|child| self.node(*child))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// [`ArtifactBuilder`] that records into a [`Manifest`].
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    manifest: Manifest,
    /// Families the host can load. `None` accepts every font.
    available_families: Option<BTreeSet<String>>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the manifest at `path`, or an empty one when it does not exist.
    pub fn open(path: &Path) -> Result<Self> {
        let manifest = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)
                .with_context(|| format!("parse manifest {}", path.display()))?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Manifest::default(),
            Err(error) => {
                return Err(error).with_context(|| format!("read manifest {}", path.display()));
            }
        };
        Ok(Self {
            manifest,
            available_families: None,
        })
    }

    #[must_use]
    pub fn with_available_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_families = Some(families.into_iter().map(Into::into).collect());
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> Manifest {
        self.manifest
    }

    pub fn write(&self, path: &Path) -> Result<PathBuf> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.manifest).context("serialize manifest")?;
        fs::write(path, json).with_context(|| format!("write manifest {}", path.display()))?;
        Ok(path.to_path_buf())
    }

    fn push(&mut self, mut node: ManifestNode) -> NodeId {
        let id = self.manifest.nodes.len();
        node.id = id;
        if let Some(parent) = node.parent
            && let Some(parent) = self.manifest.nodes.get_mut(parent)
        {
            parent.children.push(id);
        }
        self.manifest.nodes.push(node);
        id
    }

    fn node_mut(
        &mut self,
        id: NodeId,
        operation: &'static str,
    ) -> Result<&mut ManifestNode, BuildError> {
        self.manifest
            .nodes
            .get_mut(id)
            .ok_or_else(|| BuildError::host(operation, format!("no node {id}")))
    }

    fn reparent(&mut self, id: NodeId, parent: NodeId) -> Result<(), BuildError> {
        let previous = self.node_mut(id, "combine_as_family")?.parent.replace(parent);
        if let Some(previous) = previous
            && let Some(node) = self.manifest.nodes.get_mut(previous)
        {
            node.children.retain(|child| *child != id);
        }
        self.node_mut(parent, "combine_as_family")?.children.push(id);
        Ok(())
    }
}

impl ArtifactBuilder for ManifestBuilder {
    type Node = NodeId;

    async fn load_font(&mut self, font: &FontRef) -> Result<(), BuildError> {
        if let Some(families) = &self.available_families
            && !families.contains(&font.family)
        {
            return Err(BuildError::FontLoad {
                font: font.clone(),
                reason: "family not installed".to_string(),
            });
        }
        self.manifest.fonts.insert(font.clone());
        Ok(())
    }

    async fn ensure_assets_container(&mut self, name: &str) -> Result<NodeId, BuildError> {
        if let Some(existing) = self
            .manifest
            .find_root(name)
            .filter(|node| node.kind == NodeKind::Assets)
        {
            return Ok(existing.id);
        }
        Ok(self.push(ManifestNode::new(0, name, NodeKind::Assets, None)))
    }

    async fn create_node(
        &mut self,
        container: &NodeId,
        request: NodeRequest<'_, NodeId>,
    ) -> Result<NodeId, BuildError> {
        let parent = request.parent.copied().unwrap_or(*container);
        if self.manifest.node(parent).is_none() {
            return Err(BuildError::CreateNode {
                element: request.element.id.to_string(),
                reason: format!("parent node {parent} does not exist"),
            });
        }
        let element = request.element;
        let mut node = ManifestNode::new(0, request.name, element.kind.into(), Some(parent));
        node.element = Some(element.id.clone());
        node.style = Some(request.style.clone());
        node.text = element
            .text
            .as_ref()
            .and_then(|content| content.default.clone().or_else(|| content.placeholder.clone()));
        Ok(self.push(node))
    }

    async fn apply_property(
        &mut self,
        node: &NodeId,
        binding: &Binding,
        value: &PropertyValue,
    ) -> Result<(), BuildError> {
        let target = self
            .manifest
            .nodes
            .get_mut(*node)
            .ok_or_else(|| BuildError::Property {
                property: binding.property.clone(),
                reason: format!("no node {node}"),
            })?;
        match value {
            PropertyValue::Boolean(visible) => {
                target.style.get_or_insert_with(ComputedStyle::default).visible = *visible;
            }
            PropertyValue::Text(text) => target.text = Some(text.clone()),
            PropertyValue::InstanceSwap(_) => {}
        }
        target
            .properties
            .insert(binding.property.clone(), value.clone());
        Ok(())
    }

    async fn attach_binding(&mut self, node: &NodeId, binding: &Binding) -> Result<(), BuildError> {
        self.node_mut(*node, "attach_binding")?
            .bindings
            .push(binding.clone());
        Ok(())
    }

    async fn combine_as_family(
        &mut self,
        name: &str,
        container: &NodeId,
        members: &[Member<NodeId>],
    ) -> Result<NodeId, BuildError> {
        let family = self.push(ManifestNode::new(0, name, NodeKind::Family, Some(*container)));
        for member in members {
            self.reparent(member.node, family)?;
            self.node_mut(member.node, "combine_as_family")?.variant =
                Some(member.combination.clone());
        }
        Ok(family)
    }

    async fn register_properties(
        &mut self,
        target: &NodeId,
        catalogs: &PropertyCatalogs,
    ) -> Result<(), BuildError> {
        self.node_mut(*target, "register_properties")?.catalogs = Some(catalogs.clone());
        Ok(())
    }
}
