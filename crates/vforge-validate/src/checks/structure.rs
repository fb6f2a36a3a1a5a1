//! Component name and element identity checks.

use std::collections::HashSet;

use vforge_model::ComponentSpec;

use super::element_path;
use crate::diagnostic::{Diagnostic, DiagnosticCode};

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if spec.name.trim().is_empty() {
        diagnostics.push(
            Diagnostic::new(DiagnosticCode::ComponentNameEmpty, "Component name is empty")
                .at("name"),
        );
    }

    let mut seen = HashSet::new();
    for (indices, element) in spec.root.walk_indexed() {
        if !seen.insert(element.id.as_str()) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::ElementIdDuplicate,
                    format!("Element id '{}' is used more than once", element.id),
                )
                .at(element_path(&indices)),
            );
        }
    }

    diagnostics
}
