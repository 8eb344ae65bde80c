//! # preview-lint-core
//!
//! Core framework for pre-render preview validation.
//!
//! This crate provides the foundational types for deciding whether an
//! in-memory set of source files is safe to hand to a live preview:
//!
//! - [`Diagnostic`] / [`ValidationResult`] for representing findings
//! - [`FileSet`] for the borrowed virtual project tree
//! - [`FileRule`] trait for per-file validation rules
//! - [`Validator`] for orchestrating one run
//! - [`ValidationSession`] as the caller-side status/result container
//!
//! ## Example
//!
//! ```ignore
//! use preview_lint_core::{FileSet, Validator};
//!
//! let validator = Validator::builder()
//!     .markup_rule(MyRule::new())
//!     .build();
//!
//! let result = validator.validate(&files);
//! if !result.is_valid {
//!     result.print_report();
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fileset;
mod rule;
mod session;
mod types;
mod validator;

pub use config::{Config, ConfigError, ResolverConfig, RuleConfig};
pub use fileset::{FileEntry, FileKind, FileSet, MANIFEST_FILE};
pub use rule::{FileContext, FileRule, FileRuleBox};
pub use session::{ValidationSession, ValidationStatus};
pub use types::{Diagnostic, Severity, ValidationResult};
pub use validator::{Validator, ValidatorBuilder, MANIFEST_RULE};
