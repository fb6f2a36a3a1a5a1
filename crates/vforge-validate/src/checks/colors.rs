//! Colour token checks.
//!
//! Covers every state overlay (root and per-element overrides), the base
//! style, and the colours authored directly on elements.

use vforge_model::{ComponentSpec, StyleOverride};

use super::element_path;
use crate::color::is_valid_color;
use crate::diagnostic::{Diagnostic, DiagnosticCode};

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for (index, state) in spec.states.iter().enumerate() {
        let owner = format!("state '{}'", state.name);
        if let Some(root) = &state.overlay.root {
            check_layer(root, &format!("states[{index}].overlay.root"), &owner, &mut diagnostics);
        }
        for (key, layer) in &state.overlay.elements {
            check_layer(
                layer,
                &format!("states[{index}].overlay.elements.{key}"),
                &owner,
                &mut diagnostics,
            );
        }
    }

    if let Some(base) = &spec.base_style {
        check_layer(base, "baseStyle", "the base style", &mut diagnostics);
    }

    for (indices, element) in spec.root.walk_indexed() {
        let authored = StyleOverride::from_element(element);
        check_layer(
            &authored,
            &element_path(&indices),
            &format!("element '{}'", element.id),
            &mut diagnostics,
        );
    }

    diagnostics
}

fn check_layer(layer: &StyleOverride, prefix: &str, owner: &str, out: &mut Vec<Diagnostic>) {
    for (field, token) in layer.color_fields() {
        if !is_valid_color(token) {
            out.push(
                Diagnostic::new(
                    DiagnosticCode::StyleColorInvalid,
                    format!("Invalid colour '{token}' in {owner}"),
                )
                .at(format!("{prefix}.{field}")),
            );
        }
    }
}
