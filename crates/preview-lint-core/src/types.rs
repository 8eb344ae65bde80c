//! Core types for validation diagnostics and results.

use serde::{Deserialize, Serialize};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory finding; never blocks rendering.
    Warning,
    /// Blocking finding; the preview must not be committed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced by one rule against one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of this finding.
    pub severity: Severity,
    /// Kebab-case name of the rule that produced it (e.g. `"import-resolution"`).
    pub rule: String,
    /// Path of the file the finding applies to.
    pub file: String,
    /// 1-based line number, when a single line applies. Whole-file findings
    /// carry no line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Human-readable description, naming the offending token or pattern
    /// where one applies.
    pub message: String,
}

impl Diagnostic {
    /// Creates a blocking diagnostic.
    #[must_use]
    pub fn error(
        rule: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, rule, file, message)
    }

    /// Creates an advisory diagnostic.
    #[must_use]
    pub fn warning(
        rule: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, rule, file, message)
    }

    /// Creates a diagnostic with an explicit severity.
    #[must_use]
    pub fn new(
        severity: Severity,
        rule: impl Into<String>,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            rule: rule.into(),
            file: file.into(),
            line: None,
            message: message.into(),
        }
    }

    /// Attaches a 1-based line number to this diagnostic.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "{}:{}: {} [{}] {}",
                self.file, line, self.severity, self.rule, self.message
            ),
            None => write!(
                f,
                "{}: {} [{}] {}",
                self.file, self.severity, self.rule, self.message
            ),
        }
    }
}

/// Terminal output of one validation run.
///
/// Created fresh per run and immutable once returned; a later run supersedes
/// it rather than merging into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub is_valid: bool,
    /// Blocking findings, in discovery order.
    pub errors: Vec<Diagnostic>,
    /// Advisory findings, in discovery order.
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Creates an empty, valid result.
    #[must_use]
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Partitions diagnostics by severity and derives validity.
    ///
    /// This is the one place the error/warning partition is defined:
    /// [`Severity::Error`] routes to `errors`, everything else to
    /// `warnings`. Relative order within each list follows the input.
    #[must_use]
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => errors.push(diagnostic),
                Severity::Warning => warnings.push(diagnostic),
            }
        }
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Total number of findings, both blocking and advisory.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Returns true if any advisory findings were reported.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Formats the run as a plain-text report, errors first.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in self.errors.iter().chain(self.warnings.iter()) {
            let _ = writeln!(report, "{diagnostic}");
        }
        let verdict = if self.is_valid { "allowed" } else { "blocked" };
        let _ = writeln!(
            report,
            "{} error(s), {} warning(s); render {verdict}",
            self.errors.len(),
            self.warnings.len(),
        );
        report
    }

    /// Prints the report to stdout.
    pub fn print_report(&self) {
        print!("{}", self.format_report());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag(severity: Severity, message: &str) -> Diagnostic {
        Diagnostic::new(severity, "structural-balance", "src/App.tsx", message)
    }

    #[test]
    fn severity_orders_error_above_warning() {
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Error).expect("serialize");
        assert_eq!(json, "\"error\"");
    }

    #[test]
    fn with_line_sets_line() {
        let d = diag(Severity::Error, "x").with_line(12);
        assert_eq!(d.line, Some(12));
    }

    #[test]
    fn display_includes_line_when_present() {
        let d = diag(Severity::Error, "broken").with_line(3);
        assert_eq!(
            d.to_string(),
            "src/App.tsx:3: error [structural-balance] broken"
        );
    }

    #[test]
    fn display_omits_line_when_absent() {
        let d = diag(Severity::Warning, "odd");
        assert_eq!(d.to_string(), "src/App.tsx: warning [structural-balance] odd");
    }

    #[test]
    fn partition_routes_by_severity_preserving_order() {
        let result = ValidationResult::from_diagnostics(vec![
            diag(Severity::Warning, "w1"),
            diag(Severity::Error, "e1"),
            diag(Severity::Warning, "w2"),
            diag(Severity::Error, "e2"),
        ]);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].message, "e1");
        assert_eq!(result.errors[1].message, "e2");
        assert_eq!(result.warnings[0].message, "w1");
        assert_eq!(result.warnings[1].message, "w2");
    }

    #[test]
    fn errors_invalidate_result() {
        let result = ValidationResult::from_diagnostics(vec![diag(Severity::Error, "e")]);
        assert!(!result.is_valid);
    }

    #[test]
    fn warnings_alone_keep_result_valid() {
        let result = ValidationResult::from_diagnostics(vec![diag(Severity::Warning, "w")]);
        assert!(result.is_valid);
        assert!(result.has_warnings());
        assert_eq!(result.diagnostic_count(), 1);
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::from_diagnostics(Vec::new());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn format_report_lists_errors_before_warnings() {
        let result = ValidationResult::from_diagnostics(vec![
            diag(Severity::Warning, "later"),
            diag(Severity::Error, "first"),
        ]);
        let report = result.format_report();
        let first = report.find("first").expect("error line present");
        let later = report.find("later").expect("warning line present");
        assert!(first < later);
        assert!(report.contains("1 error(s), 1 warning(s); render blocked"));
    }

    #[test]
    fn diagnostic_round_trips_through_json() {
        let d = diag(Severity::Error, "broken").with_line(7);
        let json = serde_json::to_string(&d).expect("serialize");
        let back: Diagnostic = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, d);
    }
}
