//! Structural sanity checks: bracket balance and known malformed calls.
//!
//! # Rationale
//!
//! The preview must refuse files that cannot possibly parse, but a real
//! parser is out of scope. Instead, each bracket kind is counted globally
//! across the file (no stack scan, so a mismatch cannot be localized to a
//! line), and a short catalogue of calls that are wrong on their face is
//! pattern-matched directly.
//!
//! Brackets inside string and comment literals are counted too. That
//! imprecision is the accepted cost of staying a text scan; do not "fix"
//! it into a parser.

use preview_lint_core::{Diagnostic, FileContext, FileRule, FileSet};
use regex::Regex;
use std::sync::LazyLock;

/// Rule name for structural balance.
pub const NAME: &str = "structural-balance";

/// Bracket kinds counted by this rule.
const BRACKET_KINDS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

/// Calls that are malformed regardless of surrounding context.
static MALFORMED_CALLS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            compile(r"useState\s*\(\s*\)"),
            "useState requires an initial value or undefined",
        ),
        (
            compile(r"useEffect\s*\(\s*\)"),
            "useEffect requires at least one argument",
        ),
        (
            compile(r"export\s+default\s+function\s*\(\)"),
            "Component function needs a name",
        ),
    ]
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("invalid built-in pattern: {pattern}"))
}

/// Flags files whose bracket counts cannot balance, and calls that are
/// malformed on their face.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralBalance;

impl StructuralBalance {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for StructuralBalance {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Detects unbalanced bracket groups and known malformed calls"
    }

    fn check(&self, ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for &(open, close) in BRACKET_KINDS {
            let opens = ctx.content.matches(open).count();
            let closes = ctx.content.matches(close).count();
            if opens != closes {
                // Whole-file count; no single line applies.
                diagnostics.push(Diagnostic::error(
                    NAME,
                    ctx.path,
                    format!("Unmatched {open}{close} brackets: {opens} opening, {closes} closing"),
                ));
            }
        }

        for (pattern, message) in MALFORMED_CALLS.iter() {
            for found in pattern.find_iter(ctx.content) {
                diagnostics.push(
                    Diagnostic::error(NAME, ctx.path, *message)
                        .with_line(ctx.line_at(found.start())),
                );
            }
        }

        diagnostics
    }
}
