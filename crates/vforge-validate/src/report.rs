//! Validation report containing all diagnostics for one specification.

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::fix::AutoFix;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `errors` is empty.
    pub ok: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub auto_fixes: Vec<AutoFix>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    /// File a diagnostic under errors or warnings by its severity.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.errors.push(diagnostic);
            self.ok = false;
        } else {
            self.warnings.push(diagnostic);
        }
    }

    pub fn add_fix(&mut self, fix: AutoFix) {
        self.auto_fixes.push(fix);
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.diagnostics().any(|d| d.code == code)
    }

    /// Count of diagnostics carrying `code`.
    pub fn count_code(&self, code: DiagnosticCode) -> usize {
        self.diagnostics().filter(|d| d.code == code).count()
    }

    /// Errors first, then warnings, each in the order they were found.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
