//! Component specification data model.
//!
//! Shape only: the element tree, variant axes, states, property catalogs,
//! bindings and base style of one component family. Behaviour (validation,
//! expansion, cascade) lives in the crates that consume this one.

pub mod element;
pub mod error;
pub mod ids;
pub mod property;
pub mod spec;
pub mod state;
pub mod style;
pub mod templates;
pub mod tree;
pub mod variant;

pub use element::{
    Alignment, AutoLayout, Effect, EffectKind, Element, ElementKind, LayoutDirection, Padding,
    Paint, SizeConstraint, Stroke, TextContent, TextStyle,
};
pub use error::{ModelError, Result};
pub use ids::ElementId;
pub use property::{
    Binding, BindingTarget, BooleanProperty, InstanceSwapProperty, PropertyCatalogs, PropertyDef,
    PropertyType, TextProperty,
};
pub use spec::ComponentSpec;
pub use state::{PropertyValues, Selector, State, StateOverlay, selector_matches};
pub use style::StyleOverride;
pub use variant::{Combination, VariantGroup};
