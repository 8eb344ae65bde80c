//! Standard rule wiring per file kind.
//!
//! The dispatch order within each set is fixed: structural balance first,
//! then import resolution, then (for markup only) the utility-class check.
//! Diagnostics inside one file follow this order.

use crate::{ImportResolution, StructuralBalance, UtilityClassCheck};
use preview_lint_core::{FileRuleBox, ResolverConfig};

/// Returns the rules applied to component-markup sources, in dispatch order.
#[must_use]
pub fn markup_rules(resolver: &ResolverConfig) -> Vec<FileRuleBox> {
    vec![
        Box::new(StructuralBalance::new()),
        Box::new(ImportResolution::with_resolver(resolver.clone())),
        Box::new(UtilityClassCheck::new()),
    ]
}

/// Returns the rules applied to plain script/module sources, in dispatch
/// order. Scripts carry no markup attributes, so the utility-class check
/// does not apply.
#[must_use]
pub fn script_rules(resolver: &ResolverConfig) -> Vec<FileRuleBox> {
    vec![
        Box::new(StructuralBalance::new()),
        Box::new(ImportResolution::with_resolver(resolver.clone())),
    ]
}
