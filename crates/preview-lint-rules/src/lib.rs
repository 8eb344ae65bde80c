//! # preview-lint-rules
//!
//! Built-in validation rules for preview-lint.
//!
//! ## Available rules
//!
//! | Name | Severity | Description |
//! |------|----------|-------------|
//! | `structural-balance` | error | Unbalanced bracket groups and known malformed calls |
//! | `import-resolution` | error | Relative/alias imports that resolve to no file in the set |
//! | `utility-classes` | warning | Utility-class tokens outside the recognized grammars |
//!
//! The rules are deliberately heuristic text scans, not parsers: the
//! blocking/advisory split above was designed around their known
//! imprecision.
//!
//! ## Usage
//!
//! ```ignore
//! use preview_lint_core::Validator;
//! use preview_lint_rules::{ImportResolution, StructuralBalance};
//!
//! let validator = Validator::builder()
//!     .markup_rule(StructuralBalance::new())
//!     .markup_rule(ImportResolution::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod import_resolution;
mod presets;
mod structural_balance;
mod utility_classes;

pub use import_resolution::ImportResolution;
pub use presets::{markup_rules, script_rules};
pub use structural_balance::StructuralBalance;
pub use utility_classes::UtilityClassCheck;

/// Re-export core types for convenience.
pub use preview_lint_core::{Diagnostic, FileRule, Severity};
