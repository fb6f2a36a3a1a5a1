//! Import/export boundary.
//!
//! The textual form is JSON with camelCase field names. Absent optional
//! fields stay absent and explicit empties stay explicit, so a document
//! round-trips exactly.

use vforge_model::ComponentSpec;
use vforge_validate::{ValidationReport, validate};

use crate::error::{PersistenceError, Result};

pub(crate) fn parse_spec(text: &str) -> Result<ComponentSpec> {
    serde_json::from_str(text).map_err(|source| PersistenceError::Deserialization { source })
}

/// Parse and validate an externally authored document.
///
/// Rejects the document when validation reports errors; warnings are
/// returned alongside the accepted specification.
pub fn import_spec(text: &str) -> Result<(ComponentSpec, ValidationReport)> {
    let spec = parse_spec(text)?;
    let report = validate(&spec);
    if report.has_errors() {
        tracing::warn!(
            component = %spec.name,
            errors = report.error_count(),
            "import rejected"
        );
        return Err(PersistenceError::Rejected { report });
    }
    tracing::debug!(
        component = %spec.name,
        warnings = report.warning_count(),
        "imported specification"
    );
    Ok((spec, report))
}

pub fn export_spec(spec: &ComponentSpec) -> Result<String> {
    serde_json::to_string_pretty(spec).map_err(|source| PersistenceError::Serialization { source })
}
