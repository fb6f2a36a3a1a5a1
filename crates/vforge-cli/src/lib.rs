//! CLI library components for vforge.

pub mod logging;
pub mod manifest;
pub mod summary;

/// File name of the artifact manifest inside a `generate` output directory.
pub const MANIFEST_FILE: &str = "artifacts.json";

/// File name of the saved specification inside a `generate` output directory.
pub const SAVED_SPEC_FILE: &str = "spec.json";
