//! Pure resolution engine over a component specification.
//!
//! Everything here is a synchronous function of immutable input: combination
//! generation, the style cascade, binding and property resolution, and font
//! collection. None of it fails on well-typed input.

pub mod bindings;
pub mod cascade;
pub mod fonts;
pub mod props;
pub mod variants;

pub use bindings::{NodeIndex, UnresolvedTarget, resolve_target};
pub use cascade::{
    ComputedStyle, cascade_layers, element_override, merge, resolve_style, resolve_tree,
};
pub use fonts::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_STYLE, DEFAULT_FONT_WEIGHT, FontRef, collect_fonts,
    font_style_name,
};
pub use props::{PropertyValue, ResolvedProperties, resolve_properties};
pub use variants::{
    active_states, combination_count, combinations, member_name, normalize_variant_value,
    variant_matches_selector,
};
