//! Pipeline that dispatches files to rules and aggregates diagnostics.

use crate::config::Config;
use crate::fileset::{FileKind, FileSet};
use crate::rule::{FileContext, FileRule, FileRuleBox};
use crate::types::{Diagnostic, ValidationResult};

use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, info, warn};

/// Rule name attached to manifest parse failures.
pub const MANIFEST_RULE: &str = "manifest-parse";

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    markup_rules: Vec<FileRuleBox>,
    script_rules: Vec<FileRuleBox>,
    config: Option<Config>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule applied to component-markup sources.
    #[must_use]
    pub fn markup_rule<R: FileRule + 'static>(self, rule: R) -> Self {
        self.markup_rule_box(Box::new(rule))
    }

    /// Adds a boxed rule applied to component-markup sources.
    #[must_use]
    pub fn markup_rule_box(mut self, rule: FileRuleBox) -> Self {
        self.markup_rules.push(rule);
        self
    }

    /// Adds a rule applied to plain script/module sources.
    #[must_use]
    pub fn script_rule<R: FileRule + 'static>(self, rule: R) -> Self {
        self.script_rule_box(Box::new(rule))
    }

    /// Adds a boxed rule applied to plain script/module sources.
    #[must_use]
    pub fn script_rule_box(mut self, rule: FileRuleBox) -> Self {
        self.script_rules.push(rule);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        Validator {
            markup_rules: self.markup_rules,
            script_rules: self.script_rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Orchestrates one validation run over a [`FileSet`].
///
/// The validator owns no mutable state: [`Validator::validate`] is a pure
/// function of the borrowed set, so interleaved runs cannot interfere and a
/// run, once started, always completes.
pub struct Validator {
    markup_rules: Vec<FileRuleBox>,
    script_rules: Vec<FileRuleBox>,
    config: Config,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Returns the number of registered rules across both kinds.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.markup_rules.len() + self.script_rules.len()
    }

    /// Validates every entry of the set and aggregates a fresh result.
    ///
    /// Entries without content are skipped; they stand for directories or
    /// files that are not loaded yet, not for defects. Diagnostics
    /// concatenate in file-dispatch order before partitioning.
    #[must_use]
    pub fn validate(&self, files: &FileSet) -> ValidationResult {
        info!("Starting validation of {} entries", files.len());

        let mut diagnostics = Vec::new();
        let mut checked = 0usize;

        for (path, entry) in files.iter() {
            let Some(content) = entry.content.as_deref() else {
                debug!("Skipping {path}: no content");
                continue;
            };
            checked += 1;
            diagnostics.extend(self.validate_file(path, content, files));
        }

        let result = ValidationResult::from_diagnostics(diagnostics);
        info!(
            "Validation complete: {} error(s), {} warning(s) in {} file(s)",
            result.errors.len(),
            result.warnings.len(),
            checked
        );
        result
    }

    fn validate_file(&self, path: &str, content: &str, files: &FileSet) -> Vec<Diagnostic> {
        debug!("Validating: {path}");

        match FileKind::of(path) {
            FileKind::Markup => self.run_rules(&self.markup_rules, path, content, files),
            FileKind::Script => self.run_rules(&self.script_rules, path, content, files),
            FileKind::Manifest => check_manifest(path, content),
            FileKind::Other => Vec::new(),
        }
    }

    /// Runs a rule batch against one file.
    ///
    /// A panicking rule degrades to "no diagnostics for this file" rather
    /// than aborting the run; under-reporting beats crashing the caller.
    fn run_rules(
        &self,
        rules: &[FileRuleBox],
        path: &str,
        content: &str,
        files: &FileSet,
    ) -> Vec<Diagnostic> {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let ctx = FileContext::new(path, content);
            let mut found = Vec::new();
            for rule in rules {
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }
                let diagnostics = rule.check(&ctx, files);
                found.extend(self.apply_severity_override(rule.name(), diagnostics));
            }
            found
        }));

        match outcome {
            Ok(found) => found,
            Err(_) => {
                warn!("Rule execution panicked on {path}; dropping its diagnostics");
                Vec::new()
            }
        }
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Vec<Diagnostic> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for diagnostic in &mut diagnostics {
                diagnostic.severity = severity;
            }
        }
        diagnostics
    }
}

/// Parses the manifest as JSON.
///
/// This is the one place a caught failure surfaces as a diagnostic instead
/// of being swallowed: a malformed manifest is itself the defect being
/// reported. No line is attached; the parser message carries the position.
fn check_manifest(path: &str, content: &str) -> Vec<Diagnostic> {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(_) => Vec::new(),
        Err(e) => vec![Diagnostic::error(
            MANIFEST_RULE,
            path,
            format!("Invalid JSON: {e}"),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    /// Emits one finding per file with this rule's default severity.
    struct StubRule {
        severity: Severity,
    }

    impl FileRule for StubRule {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn default_severity(&self) -> Severity {
            self.severity
        }
        fn check(&self, ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
            vec![Diagnostic::new(self.severity, self.name(), ctx.path, "stub finding")]
        }
    }

    struct PanickingRule;

    impl FileRule for PanickingRule {
        fn name(&self) -> &'static str {
            "panics"
        }
        fn check(&self, _ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
            panic!("rule blew up");
        }
    }

    fn markup_set(paths: &[&str]) -> FileSet {
        paths.iter().map(|p| (*p, "const x = 1;")).collect()
    }

    #[test]
    fn empty_set_yields_empty_valid_result() {
        let validator = Validator::builder().build();
        let result = validator.validate(&FileSet::new());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn unknown_file_kinds_are_ignored() {
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let files: FileSet = [("styles.css", "a { b }"), ("README.md", "# hi")]
            .into_iter()
            .collect();
        assert!(validator.validate(&files).is_valid);
    }

    #[test]
    fn contentless_entries_are_skipped() {
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let mut files = FileSet::new();
        files.insert_unloaded("src/App.tsx");
        assert!(validator.validate(&files).is_valid);
    }

    #[test]
    fn markup_rules_do_not_run_on_scripts() {
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let files = markup_set(&["src/util.ts"]);
        assert!(validator.validate(&files).is_valid);
    }

    #[test]
    fn script_rules_run_on_scripts() {
        let validator = Validator::builder()
            .script_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let files = markup_set(&["src/util.ts"]);
        let result = validator.validate(&files);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].file, "src/util.ts");
    }

    #[test]
    fn diagnostics_follow_dispatch_order() {
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let files = markup_set(&["src/b.tsx", "src/a.tsx"]);
        let result = validator.validate(&files);
        let order: Vec<&str> = result.errors.iter().map(|d| d.file.as_str()).collect();
        assert_eq!(order, vec!["src/a.tsx", "src/b.tsx"]);
    }

    #[test]
    fn malformed_manifest_is_a_blocking_diagnostic() {
        let validator = Validator::builder().build();
        let files: FileSet = [("package.json", "{ invalid json")].into_iter().collect();
        let result = validator.validate(&files);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule, MANIFEST_RULE);
        assert_eq!(result.errors[0].line, None);
        assert!(result.errors[0].message.starts_with("Invalid JSON:"));
    }

    #[test]
    fn wellformed_manifest_is_clean() {
        let validator = Validator::builder().build();
        let files: FileSet = [("package.json", r#"{"name": "demo", "private": true}"#)]
            .into_iter()
            .collect();
        assert!(validator.validate(&files).is_valid);
    }

    #[test]
    fn panicking_rule_degrades_to_no_diagnostics_for_that_file() {
        let validator = Validator::builder()
            .markup_rule(PanickingRule)
            .script_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        let files: FileSet = [("src/App.tsx", "boom"), ("src/util.ts", "ok")]
            .into_iter()
            .collect();
        let result = validator.validate(&files);
        // The markup file's batch is dropped; the script file still reports.
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].file, "src/util.ts");
    }

    #[test]
    fn disabled_rules_are_skipped() {
        let config = Config::parse("[rules.stub]\nenabled = false").expect("parse");
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .config(config)
            .build();
        let files = markup_set(&["src/App.tsx"]);
        assert!(validator.validate(&files).is_valid);
    }

    #[test]
    fn severity_override_reclassifies_findings() {
        let config = Config::parse("[rules.stub]\nseverity = \"error\"").expect("parse");
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Warning,
            })
            .config(config)
            .build();
        let files = markup_set(&["src/App.tsx"]);
        let result = validator.validate(&files);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn rule_count_spans_both_kinds() {
        let validator = Validator::builder()
            .markup_rule(StubRule {
                severity: Severity::Error,
            })
            .script_rule(StubRule {
                severity: Severity::Error,
            })
            .build();
        assert_eq!(validator.rule_count(), 2);
    }
}
