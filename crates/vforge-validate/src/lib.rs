//! Component specification validation.
//!
//! [`validate`] is a pure function from a specification to a
//! [`ValidationReport`]. It never fails: invalidity is reported, not thrown.
//!
//! - **Naming**: non-empty component name, unique element ids
//! - **Variants**: unique group names, unique values per group, host-safe
//!   value format, combination count under [`LARGE_COMBINATION_THRESHOLD`]
//! - **States**: unique names, well-formed colour tokens
//! - **Properties**: unique keys within each catalog
//! - **Bindings**: declared property, resolvable target
//!
//! # Example
//!
//! ```
//! use vforge_model::templates;
//! use vforge_validate::validate;
//!
//! let report = validate(&templates::button());
//! assert!(report.ok);
//! ```

mod checks;
pub mod color;
pub mod diagnostic;
pub mod fix;
pub mod report;

use vforge_model::ComponentSpec;

pub use color::is_valid_color;
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use fix::{AutoFix, apply_auto_fixes};
pub use report::ValidationReport;

/// Combination count above which expansion needs explicit confirmation.
pub const LARGE_COMBINATION_THRESHOLD: usize = 50;

/// Validate a specification, accumulating every applicable diagnostic.
pub fn validate(spec: &ComponentSpec) -> ValidationReport {
    let report = checks::run_all(spec);
    tracing::debug!(
        component = %spec.name,
        errors = report.error_count(),
        warnings = report.warning_count(),
        auto_fixes = report.auto_fixes.len(),
        "validated specification"
    );
    report
}
