//! Advisory check for utility-class tokens in markup attributes.
//!
//! # Rationale
//!
//! A typo in a utility class renders silently as "no styling", which is
//! cheap to miss in a live preview. The grammar list below is a coarse
//! allow-list of the naming families Tailwind ships, so valid-but-exotic
//! tokens will be flagged and arbitrary variants will slip through. Both
//! are acceptable for an advisory hint; that is why this rule only ever
//! warns and can never block a render.

use preview_lint_core::{Diagnostic, FileContext, FileRule, FileSet, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Rule name for the utility-class check.
pub const NAME: &str = "utility-classes";

/// Matches a `className` attribute with a statically quoted value.
static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"className\s*=\s*["']([^"']+)["']"#)
        .unwrap_or_else(|_| panic!("invalid built-in pattern"))
});

/// Recognized utility-naming grammars, probed in order.
static TOKEN_GRAMMARS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Prefix-plus-dash families (spacing, sizing, color, layout).
        r"^(m|p|w|h|text|bg|border|rounded|flex|grid|gap|space)[-:]",
        // Standalone positional keywords.
        r"^(absolute|relative|fixed|static|sticky)$",
        // Standalone display keywords.
        r"^(block|inline|inline-block|flex|grid|hidden)$",
        // Numeric-suffixed utilities like `p-4`.
        r"^[a-z]+-\d+$",
        // Color-plus-numeric utilities like `bg-blue-500`.
        r"^[a-z]+-[a-z]+-\d+$",
    ]
    .iter()
    .map(|pattern| {
        Regex::new(pattern).unwrap_or_else(|_| panic!("invalid built-in pattern: {pattern}"))
    })
    .collect()
});

/// Flags utility-class tokens that match no recognized naming grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilityClassCheck;

impl UtilityClassCheck {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileRule for UtilityClassCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags utility-class tokens outside the recognized naming grammars"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext<'_>, _files: &FileSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for caps in CLASS_ATTR_RE.captures_iter(ctx.content) {
            let (Some(whole), Some(value)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            // The whole attribute locates the finding, not the token.
            let line = ctx.line_at(whole.start());

            for token in value.as_str().split_whitespace() {
                // Interpolated tokens have no statically known value.
                if token.contains("${") || token.contains('{') {
                    continue;
                }
                if TOKEN_GRAMMARS.iter().any(|grammar| grammar.is_match(token)) {
                    continue;
                }
                if token.starts_with('!') {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::warning(
                        NAME,
                        ctx.path,
                        format!("Potentially invalid Tailwind class: \"{token}\""),
                    )
                    .with_line(line),
                );
            }
        }

        diagnostics
    }
}
