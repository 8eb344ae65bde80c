//! # preview-lint
//!
//! Pre-render validation gate for live code previews.
//!
//! Given an in-memory [`FileSet`] (path → text content), preview-lint
//! decides whether the set is safe to hand to a live preview and reports
//! blocking errors alongside advisory warnings. It is a fast, best-effort,
//! heuristic gate — not a parser, type-checker, or compiler.
//!
//! ## Quick start
//!
//! ```
//! use preview_lint::FileSet;
//!
//! let mut files = FileSet::new();
//! files.insert(
//!     "src/App.tsx",
//!     "export default function App() { return null; }",
//! );
//!
//! let result = preview_lint::validate(&files);
//! assert!(result.is_valid);
//! ```
//!
//! ## Holding results for a UI
//!
//! ```
//! use preview_lint::{Config, FileSet, ValidationStatus};
//!
//! let mut session = preview_lint::session(Config::default());
//! let files = FileSet::new();
//!
//! session.validate(&files);
//! assert_eq!(session.status(), ValidationStatus::Done);
//!
//! session.clear();
//! assert!(session.last_result().is_none());
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits.
pub use preview_lint_core::*;

/// Built-in rules.
pub mod rules {
    pub use preview_lint_rules::*;
}

/// Builds a validator wired with the standard rule sets for the given
/// configuration: structural balance and import resolution for every
/// source file, plus the utility-class check for markup.
#[must_use]
pub fn standard_validator(config: Config) -> Validator {
    let mut builder = Validator::builder();
    for rule in preview_lint_rules::markup_rules(&config.resolver) {
        builder = builder.markup_rule_box(rule);
    }
    for rule in preview_lint_rules::script_rules(&config.resolver) {
        builder = builder.script_rule_box(rule);
    }
    builder.config(config).build()
}

/// Validates a file set with the default configuration.
///
/// A pure function: no state survives the call. Callers that want the
/// busy-status/last-result bookkeeping should use [`session`] instead.
#[must_use]
pub fn validate(files: &FileSet) -> ValidationResult {
    standard_validator(Config::default()).validate(files)
}

/// Creates a [`ValidationSession`] around the standard validator.
#[must_use]
pub fn session(config: Config) -> ValidationSession {
    ValidationSession::new(standard_validator(config))
}
