//! Host collaborator contracts.
//!
//! The driver never touches host primitives directly. Everything that
//! creates, groups or wires artifacts goes through [`ArtifactBuilder`], and
//! saving goes through [`Persistence`].

use std::convert::Infallible;
use std::future::Future;

use vforge_core::{ComputedStyle, FontRef, PropertyValue};
use vforge_model::{Binding, Combination, ComponentSpec, Element, PropertyCatalogs};

use crate::error::Result;

/// Name of the container the builder places generated artifacts in. Created
/// once, found by name on later runs.
pub const ASSETS_CONTAINER_NAME: &str = "Component Assets";

/// One node to create.
#[derive(Debug)]
pub struct NodeRequest<'a, N> {
    /// `None` for a combination's root, which goes into the assets container.
    pub parent: Option<&'a N>,
    pub element: &'a Element,
    pub style: &'a ComputedStyle,
    /// Element name, or the host variant name for a combination's root.
    pub name: &'a str,
}

/// A generated family member: one combination's root artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<N> {
    pub name: String,
    pub combination: Combination,
    pub node: N,
}

pub trait ArtifactBuilder {
    /// Host handle for a created node.
    type Node: Clone + Send + Sync;

    fn load_font(&mut self, font: &FontRef) -> impl Future<Output = Result<()>> + Send;

    /// Return the existing container named `name`, or create it.
    fn ensure_assets_container(
        &mut self,
        name: &str,
    ) -> impl Future<Output = Result<Self::Node>> + Send;

    fn create_node(
        &mut self,
        container: &Self::Node,
        request: NodeRequest<'_, Self::Node>,
    ) -> impl Future<Output = Result<Self::Node>> + Send;

    /// Write a resolved property value to its bound node.
    fn apply_property(
        &mut self,
        node: &Self::Node,
        binding: &Binding,
        value: &PropertyValue,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Record the wiring so the host can vary the node's property itself.
    fn attach_binding(
        &mut self,
        node: &Self::Node,
        binding: &Binding,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Group member roots into one family, tagging each member with its
    /// combination values.
    fn combine_as_family(
        &mut self,
        name: &str,
        container: &Self::Node,
        members: &[Member<Self::Node>],
    ) -> impl Future<Output = Result<Self::Node>> + Send;

    /// Register the property catalogs once, on the family or the single artifact.
    fn register_properties(
        &mut self,
        target: &Self::Node,
        catalogs: &PropertyCatalogs,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Load/save of a specification to host storage.
pub trait Persistence {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(
        &self,
    ) -> impl Future<Output = std::result::Result<Option<ComponentSpec>, Self::Error>> + Send;

    fn save(
        &self,
        spec: &ComponentSpec,
    ) -> impl Future<Output = std::result::Result<(), Self::Error>> + Send;
}

/// Persistence that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

impl Persistence for NoPersistence {
    type Error = Infallible;

    async fn load(&self) -> std::result::Result<Option<ComponentSpec>, Infallible> {
        Ok(None)
    }

    async fn save(&self, _spec: &ComponentSpec) -> std::result::Result<(), Infallible> {
        Ok(())
    }
}
