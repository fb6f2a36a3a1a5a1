//! Expansion of a component specification into host artifacts.
//!
//! - [`expand`] drives an [`ArtifactBuilder`] once per variant combination,
//!   groups the results into a family and registers the property catalogs.
//! - [`render_preview`] resolves a single combination into an owned tree for
//!   live display, with the same cascade and property rules.
//!
//! Host primitives and storage stay behind the [`ArtifactBuilder`] and
//! [`Persistence`] traits.

pub mod builder;
pub mod driver;
pub mod error;
pub mod preview;

pub use builder::{
    ASSETS_CONTAINER_NAME, ArtifactBuilder, Member, NoPersistence, NodeRequest, Persistence,
};
pub use driver::{
    ExpandOptions, ExpansionOutcome, ExpansionSummary, OutcomeKind, Rejection, expand,
};
pub use error::{BuildError, Result};
pub use preview::{Preview, PreviewNode, SelectionError, render_preview, select_combination};
