//! State name uniqueness.

use std::collections::HashSet;

use vforge_model::ComponentSpec;

use crate::diagnostic::{Diagnostic, DiagnosticCode};

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();
    for (index, state) in spec.states.iter().enumerate() {
        if !seen.insert(state.name.as_str()) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::StateDuplicate,
                    format!("State '{}' is declared more than once", state.name),
                )
                .at(format!("states[{index}]")),
            );
        }
    }
    diagnostics
}
