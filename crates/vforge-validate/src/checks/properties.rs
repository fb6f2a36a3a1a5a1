//! Property key uniqueness within each catalog.
//!
//! The same key in two different catalogs is allowed.

use std::collections::HashSet;

use vforge_model::{ComponentSpec, PropertyType};

use crate::diagnostic::{Diagnostic, DiagnosticCode};

const CATALOGS: [(PropertyType, &str); 3] = [
    (PropertyType::Boolean, "booleans"),
    (PropertyType::Text, "texts"),
    (PropertyType::InstanceSwap, "instances"),
];

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (kind, field) in CATALOGS {
        let mut seen = HashSet::new();
        for (index, key) in spec.properties.keys(kind).into_iter().enumerate() {
            if !seen.insert(key) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::PropDuplicate,
                        format!(
                            "Property '{key}' is declared more than once in the {kind} catalog"
                        ),
                    )
                    .at(format!("properties.{field}[{index}]")),
                );
            }
        }
    }
    diagnostics
}
