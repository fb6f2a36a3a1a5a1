//! Diagnostic types.
//!
//! Every check reports through [`Diagnostic`], keyed by a stable dotted
//! [`DiagnosticCode`] that front ends can match on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks expansion.
    Error,
    /// Advisory; never affects `ok`.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    #[serde(rename = "component.name.empty")]
    ComponentNameEmpty,
    #[serde(rename = "element.id.duplicate")]
    ElementIdDuplicate,
    #[serde(rename = "variant.group.duplicate")]
    VariantGroupDuplicate,
    /// A group with no values leaves no combination to build.
    #[serde(rename = "variant.group.empty")]
    VariantGroupEmpty,
    #[serde(rename = "variant.value.duplicate")]
    VariantValueDuplicate,
    #[serde(rename = "variant.value.format")]
    VariantValueFormat,
    #[serde(rename = "variant.count.large")]
    VariantCountLarge,
    #[serde(rename = "state.duplicate")]
    StateDuplicate,
    #[serde(rename = "style.color.invalid")]
    StyleColorInvalid,
    #[serde(rename = "prop.duplicate")]
    PropDuplicate,
    #[serde(rename = "binding.unmatched")]
    BindingUnmatched,
    #[serde(rename = "binding.target.unresolved")]
    BindingTargetUnresolved,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComponentNameEmpty => "component.name.empty",
            Self::ElementIdDuplicate => "element.id.duplicate",
            Self::VariantGroupDuplicate => "variant.group.duplicate",
            Self::VariantGroupEmpty => "variant.group.empty",
            Self::VariantValueDuplicate => "variant.value.duplicate",
            Self::VariantValueFormat => "variant.value.format",
            Self::VariantCountLarge => "variant.count.large",
            Self::StateDuplicate => "state.duplicate",
            Self::StyleColorInvalid => "style.color.invalid",
            Self::PropDuplicate => "prop.duplicate",
            Self::BindingUnmatched => "binding.unmatched",
            Self::BindingTargetUnresolved => "binding.target.unresolved",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::VariantValueFormat
            | Self::VariantCountLarge
            | Self::BindingUnmatched
            | Self::BindingTargetUnresolved => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding.
///
/// `path` locates the offending part of the document in a dotted/indexed
/// form, e.g. `variants[1].values[2]` or `states[0].overlay.root.fills[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Diagnostic {
    /// Severity comes from the code.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            path: None,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {path})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_dotted_strings() {
        let json = serde_json::to_string(&DiagnosticCode::VariantValueDuplicate).unwrap();
        assert_eq!(json, r#""variant.value.duplicate""#);
        assert_eq!(
            DiagnosticCode::VariantValueDuplicate.as_str(),
            "variant.value.duplicate"
        );
    }

    #[test]
    fn advisory_codes_are_warnings() {
        assert_eq!(DiagnosticCode::BindingUnmatched.severity(), Severity::Warning);
        assert_eq!(DiagnosticCode::VariantCountLarge.severity(), Severity::Warning);
        assert_eq!(DiagnosticCode::StyleColorInvalid.severity(), Severity::Error);
    }

    #[test]
    fn display_includes_path() {
        let diagnostic =
            Diagnostic::new(DiagnosticCode::StateDuplicate, "State 'hover' is declared twice")
                .at("states[2]");
        assert_eq!(
            diagnostic.to_string(),
            "[state.duplicate] State 'hover' is declared twice (at states[2])"
        );
    }
}
