//! Rule seam for per-file validation rules.

use crate::fileset::FileSet;
use crate::types::{Diagnostic, Severity};

/// Context for one file under validation.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// Path of the file within the set.
    pub path: &'a str,
    /// Loaded text content.
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a str, content: &'a str) -> Self {
        Self { path, content }
    }

    /// 1-based line of a byte offset, counting newline bytes before it.
    ///
    /// Offsets past the end of the content clamp to the last line.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> usize {
        let end = offset.min(self.content.len());
        self.content.as_bytes()[..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1
    }
}

/// A per-file validation rule.
///
/// Rules are pure functions of the file's content, its path, and the full
/// file set; they hold no state across invocations and emit findings with
/// the severity partition already decided (the pipeline never reclassifies
/// a finding, it only applies configured overrides).
///
/// # Example
///
/// ```ignore
/// use preview_lint_core::{Diagnostic, FileContext, FileRule, FileSet};
///
/// pub struct NoTabs;
///
/// impl FileRule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///
///     fn check(&self, ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
///         ctx.content
///             .match_indices('\t')
///             .map(|(offset, _)| {
///                 Diagnostic::warning(self.name(), ctx.path, "tab character")
///                     .with_line(ctx.line_at(offset))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait FileRule: Send + Sync {
    /// Kebab-case name of this rule (e.g. `"structural-balance"`).
    fn name(&self) -> &'static str;

    /// Brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Severity this rule's findings carry by default.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any findings.
    fn check(&self, ctx: &FileContext<'_>, files: &FileSet) -> Vec<Diagnostic>;
}

/// Type alias for boxed [`FileRule`] trait objects.
pub type FileRuleBox = Box<dyn FileRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl FileRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
            vec![Diagnostic::error(self.name(), ctx.path, "test finding").with_line(1)]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.description(), "A test rule");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn check_receives_path_and_content() {
        let ctx = FileContext::new("src/a.ts", "let x = 1;");
        let found = TestRule.check(&ctx, &FileSet::new());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file, "src/a.ts");
    }

    #[test]
    fn line_at_counts_preceding_newlines() {
        let ctx = FileContext::new("a.ts", "one\ntwo\nthree");
        assert_eq!(ctx.line_at(0), 1);
        assert_eq!(ctx.line_at(3), 1); // the newline itself still ends line 1
        assert_eq!(ctx.line_at(4), 2);
        assert_eq!(ctx.line_at(8), 3);
    }

    #[test]
    fn line_at_clamps_past_end() {
        let ctx = FileContext::new("a.ts", "one\ntwo");
        assert_eq!(ctx.line_at(999), 2);
    }
}
