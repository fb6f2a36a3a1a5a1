//! Variant group checks.

use std::collections::HashSet;

use vforge_core::{combination_count, normalize_variant_value};
use vforge_model::ComponentSpec;

use crate::LARGE_COMBINATION_THRESHOLD;
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::fix::AutoFix;

pub fn check(spec: &ComponentSpec) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut group_names = HashSet::new();

    for (group_index, group) in spec.variants.iter().enumerate() {
        if !group_names.insert(group.name.as_str()) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::VariantGroupDuplicate,
                    format!("Variant group '{}' is declared more than once", group.name),
                )
                .at(format!("variants[{group_index}]")),
            );
        }

        if group.values.is_empty() {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::VariantGroupEmpty,
                    format!("Variant group '{}' has no values", group.name),
                )
                .at(format!("variants[{group_index}].values")),
            );
        }

        let duplicates = duplicate_indices(&group.values);
        if !duplicates.is_empty() {
            let mut repeated: Vec<&str> = Vec::new();
            for &index in &duplicates {
                let value = group.values[index].as_str();
                if !repeated.contains(&value) {
                    repeated.push(value);
                }
            }
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::VariantValueDuplicate,
                    format!(
                        "Variant group '{}' repeats value(s): {}",
                        group.name,
                        repeated.join(", ")
                    ),
                )
                .at(format!("variants[{group_index}].values")),
            );
        }

        for (value_index, value) in group.values.iter().enumerate() {
            if value.contains([',', '=']) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::VariantValueFormat,
                        format!(
                            "Value '{value}' in group '{}' contains ',' or '='; \
                             it will be generated as '{}'",
                            group.name,
                            normalize_variant_value(value)
                        ),
                    )
                    .at(format!("variants[{group_index}].values[{value_index}]")),
                );
            }
        }
    }

    let count = combination_count(&spec.variants);
    if count > LARGE_COMBINATION_THRESHOLD {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCode::VariantCountLarge,
                format!(
                    "{count} combinations exceed the confirmation threshold of \
                     {LARGE_COMBINATION_THRESHOLD}"
                ),
            )
            .at("variants"),
        );
    }

    diagnostics
}

/// One rename per repeated value: the normalized value plus the first numeric
/// suffix not already taken in the group.
pub fn suggest_fixes(spec: &ComponentSpec) -> Vec<AutoFix> {
    let mut fixes = Vec::new();
    for (group_index, group) in spec.variants.iter().enumerate() {
        let mut taken: HashSet<String> = group.values.iter().cloned().collect();
        for value_index in duplicate_indices(&group.values) {
            let value = &group.values[value_index];
            let mut base = normalize_variant_value(value);
            if base.is_empty() {
                base = "value".to_string();
            }
            let mut suffix = 2usize;
            let renamed = loop {
                let candidate = format!("{base}-{suffix}");
                if !taken.contains(&candidate) {
                    break candidate;
                }
                suffix += 1;
            };
            taken.insert(renamed.clone());
            fixes.push(AutoFix::rename_value(
                &group.name,
                group_index,
                value_index,
                value,
                renamed,
            ));
        }
    }
    fixes
}

/// Indices of values already seen earlier in the list.
fn duplicate_indices(values: &[String]) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for (index, value) in values.iter().enumerate() {
        if !seen.insert(value.as_str()) {
            duplicates.push(index);
        }
    }
    duplicates
}
