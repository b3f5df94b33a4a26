//! Registry-wide validation.

use tracing::warn;

use skill_bundle::{Severity, ValidationIssue, validate_bundle};

use crate::registry::Registry;

/// Marketplace entry name differs from the plugin's own manifest name.
pub const CODE_NAME_MISMATCH: &str = "plugin.name_mismatch";

/// Validate every plugin in `registry`, collecting all issues.
///
/// Issue fields are prefixed with the plugin's declared name, so a flat
/// list stays unambiguous across plugins. Warnings are also logged
/// through `tracing`; hosts that never inspect the returned list still
/// surface soft problems like dangling resource references.
#[must_use]
pub fn lint_registry(registry: &Registry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (entry, bundle) in registry.manifest().plugins.iter().zip(registry.plugins()) {
        if entry.name != bundle.manifest.name {
            issues.push(ValidationIssue::warning(
                format!("{}.name", entry.name),
                format!(
                    "marketplace lists '{}' but the plugin manifest says '{}'",
                    entry.name, bundle.manifest.name
                ),
                Some(CODE_NAME_MISMATCH),
            ));
        }
        for issue in validate_bundle(bundle) {
            issues.push(issue.prefixed(&entry.name));
        }
    }

    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!(field = %issue.field, code = ?issue.code, "{}", issue.message);
    }

    issues
}
