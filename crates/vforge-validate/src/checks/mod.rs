//! Validation check modules.
//!
//! Each module performs one family of checks. None of them stops early: every
//! applicable diagnostic is collected.

mod bindings;
mod colors;
mod properties;
mod states;
mod structure;
mod variants;

use vforge_model::ComponentSpec;

use crate::report::ValidationReport;

/// Run all validation checks on a specification.
pub fn run_all(spec: &ComponentSpec) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Component name and element identities
    for diagnostic in structure::check(spec) {
        report.add(diagnostic);
    }

    // 2. Variant groups, values and combination count
    for diagnostic in variants::check(spec) {
        report.add(diagnostic);
    }
    for fix in variants::suggest_fixes(spec) {
        report.add_fix(fix);
    }

    // 3. State names
    for diagnostic in states::check(spec) {
        report.add(diagnostic);
    }

    // 4. Colour tokens in state overlays, base style and authored elements
    for diagnostic in colors::check(spec) {
        report.add(diagnostic);
    }

    // 5. Property keys per catalog
    for diagnostic in properties::check(spec) {
        report.add(diagnostic);
    }

    // 6. Binding wiring (warnings only)
    for diagnostic in bindings::check(spec) {
        report.add(diagnostic);
    }

    report
}

/// Document path of an element from its child-index path.
fn element_path(indices: &[usize]) -> String {
    indices
        .iter()
        .fold("root".to_string(), |path, index| {
            format!("{path}.children[{index}]")
        })
}
