//! Resolves static import targets against the virtual file set.
//!
//! Only relative and alias-rooted targets are probed; anything else is
//! assumed to come from an installed package, which this engine cannot
//! see and therefore never flags. Resolution probes a fixed, ordered list
//! of candidate suffixes and the first key present in the set wins.

use preview_lint_core::{Diagnostic, FileContext, FileRule, FileSet, ResolverConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Rule name for import resolution.
pub const NAME: &str = "import-resolution";

/// Matches `import … from '<target>'` with either quote style.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+.*?\s+from\s+["']([^"']+)["']"#)
        .unwrap_or_else(|_| panic!("invalid built-in pattern"))
});

/// Flags imports whose target resolves to no key of the file set.
#[derive(Debug, Clone, Default)]
pub struct ImportResolution {
    resolver: ResolverConfig,
}

impl ImportResolution {
    /// Creates the rule with default resolver settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the rule with explicit resolver settings.
    #[must_use]
    pub fn with_resolver(resolver: ResolverConfig) -> Self {
        Self { resolver }
    }

    fn is_resolvable_target(&self, target: &str) -> bool {
        target.starts_with('.') || target.starts_with(&self.resolver.alias_prefix)
    }

    fn resolves(&self, target: &str, importer: &str, files: &FileSet) -> bool {
        let base = self.rewrite(target, importer);
        self.resolver
            .probe_suffixes
            .iter()
            .any(|suffix| files.contains(&format!("{base}{suffix}")))
    }

    /// Maps an import target to the base path probed against the set.
    fn rewrite(&self, target: &str, importer: &str) -> String {
        if let Some(rest) = target.strip_prefix(&self.resolver.alias_prefix) {
            return join_segments(&self.resolver.alias_root, rest);
        }
        join_segments(parent_dir(importer), target)
    }
}

impl FileRule for ImportResolution {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Flags relative and alias imports that resolve to no file in the set"
    }

    fn check(&self, ctx: &FileContext<'_>, files: &FileSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for caps in IMPORT_RE.captures_iter(ctx.content) {
            let (Some(whole), Some(target)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let target = target.as_str();
            if !self.is_resolvable_target(target) {
                continue;
            }
            if self.resolves(target, ctx.path, files) {
                continue;
            }
            // Name the target as written, not the rewritten probe path.
            diagnostics.push(
                Diagnostic::error(NAME, ctx.path, format!("Cannot resolve import: {target}"))
                    .with_line(ctx.line_at(whole.start())),
            );
        }

        diagnostics
    }
}

/// Directory portion of a path, or `""` for a root-level file.
fn parent_dir(path: &str) -> &str {
    path.rfind('/').map_or("", |idx| &path[..idx])
}

/// Joins `target` onto `dir`, folding `.` and `..` segments textually.
fn join_segments(dir: &str, target: &str) -> String {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
