//! Binding wiring checks. Both findings are warnings: expansion skips the
//! affected binding and carries on.

use vforge_core::{NodeIndex, resolve_target};
use vforge_model::ComponentSpec;

use crate::diagnostic::{Diagnostic, DiagnosticCode};

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let index = NodeIndex::from_tree(&spec.root);

    for (position, binding) in spec.bindings.iter().enumerate() {
        let path = format!("bindings[{position}]");
        if !spec.properties.contains_any(&binding.property) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::BindingUnmatched,
                    format!(
                        "Binding references property '{}', which no catalog declares",
                        binding.property
                    ),
                )
                .at(path.clone()),
            );
        }
        if let Err(unresolved) = resolve_target(binding, &index) {
            diagnostics.push(
                Diagnostic::new(DiagnosticCode::BindingTargetUnresolved, unresolved.to_string())
                    .at(path),
            );
        }
    }

    diagnostics
}
