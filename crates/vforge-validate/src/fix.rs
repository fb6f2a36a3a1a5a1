//! Advisory fixes and the engine that applies them.

use serde::{Deserialize, Serialize};
use vforge_model::ComponentSpec;

use crate::diagnostic::DiagnosticCode;

/// A suggested edit attached to a diagnostic.
///
/// Only the duplicate-variant-value fix is applied today: rename
/// `variants[group_index].values[value_index]` from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoFix {
    pub code: DiagnosticCode,
    pub path: String,
    pub group: String,
    pub group_index: usize,
    pub value_index: usize,
    pub from: String,
    pub to: String,
}

impl AutoFix {
    pub fn rename_value(
        group: &str,
        group_index: usize,
        value_index: usize,
        from: &str,
        to: String,
    ) -> Self {
        Self {
            code: DiagnosticCode::VariantValueDuplicate,
            path: format!("variants[{group_index}].values[{value_index}]"),
            group: group.to_string(),
            group_index,
            value_index,
            from: from.to_string(),
            to,
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "rename '{}' to '{}' in variant group '{}'",
            self.from, self.to, self.group
        )
    }
}

/// Apply fixes to a clone of `spec`.
///
/// Fixes with codes this engine does not know are ignored, as are fixes
/// whose target no longer holds the value they were computed against.
pub fn apply_auto_fixes(spec: &ComponentSpec, fixes: &[AutoFix]) -> ComponentSpec {
    spec.edit(|next| {
        for fix in fixes {
            match fix.code {
                DiagnosticCode::VariantValueDuplicate => {
                    let slot = next
                        .variants
                        .get_mut(fix.group_index)
                        .and_then(|group| group.values.get_mut(fix.value_index));
                    match slot {
                        Some(value) if *value == fix.from => {
                            tracing::debug!(
                                path = %fix.path,
                                from = %fix.from,
                                to = %fix.to,
                                "applying auto-fix"
                            );
                            value.clone_from(&fix.to);
                        }
                        _ => tracing::debug!(path = %fix.path, "skipping stale auto-fix"),
                    }
                }
                other => tracing::debug!(code = %other, "no auto-fix handler for code"),
            }
        }
    })
}
