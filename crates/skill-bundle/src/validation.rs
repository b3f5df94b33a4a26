//! Non-fatal bundle validation.
//!
//! Loading (see [`crate::bundle`]) fails fast on contract violations a
//! host cannot work around. Validation covers the rest: shape problems
//! worth surfacing that do not make a bundle unusable. Unlike the
//! fail-fast loader, validation collects every issue found, so callers
//! see the complete picture rather than the first problem.
//!
//! # Example
//!
//! ```
//! use skill_bundle::{PluginManifest, validate_plugin_manifest};
//!
//! let manifest: PluginManifest = serde_json::from_str(
//!     r#"{"name": "Rust Skills", "description": "d", "version": "one", "author": "a"}"#,
//! )
//! .unwrap();
//!
//! let issues = validate_plugin_manifest(&manifest);
//! assert_eq!(issues.len(), 2); // name not kebab-case, version not semver
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::bundle::PluginBundle;
use crate::manifest::PluginManifest;
use crate::resource::markdown_references;
use crate::skill::Skill;

// Issue code constants for machine-readable classification.

/// Name is not kebab-case.
pub const CODE_NAME_FORMAT: &str = "name.format";

/// Name exceeds [`NAME_MAX_LEN`].
pub const CODE_NAME_LENGTH: &str = "name.length";

/// Version is not a semantic version.
pub const CODE_VERSION_FORMAT: &str = "version.format";

/// Homepage is not an http(s) URL.
pub const CODE_HOMEPAGE_INVALID: &str = "homepage.invalid";

/// Activation description exceeds [`DESCRIPTION_MAX_LEN`].
pub const CODE_DESCRIPTION_LENGTH: &str = "description.length";

/// Skill name differs from its directory name.
pub const CODE_DIRECTORY_MISMATCH: &str = "skill.directory_mismatch";

/// Skill body references a resource file that was not loaded.
pub const CODE_RESOURCE_DANGLING: &str = "resource.dangling";

/// Maximum length for plugin and skill names.
pub const NAME_MAX_LEN: usize = 64;

/// Maximum length for activation descriptions.
///
/// Descriptions are injected into host prompts when skills are listed,
/// so an oversized one crowds out the context it is meant to win.
pub const DESCRIPTION_MAX_LEN: usize = 1024;

/// Kebab-case: lowercase alphanumeric segments joined by single dashes.
pub static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid literal regex"));

/// `major.minor.patch` with optional pre-release and build tags.
static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$")
        .expect("valid literal regex")
});

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The bundle violates its published contract; hosts may refuse it.
    Error,

    /// Worth reviewing, but the bundle remains usable as-is.
    Warning,
}

/// A single problem found while validating a bundle.
///
/// An empty result from any `validate_*` function means the input
/// passed every check. Construct issues through [`ValidationIssue::error`]
/// and [`ValidationIssue::warning`] rather than field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ValidationIssue {
    /// Severity of the issue.
    pub severity: Severity,

    /// Field path where the issue was found, e.g. `skills/rust-review.name`.
    pub field: String,

    /// Human-readable description of the issue.
    pub message: String,

    /// Machine-readable code; see the `CODE_*` constants in this module.
    pub code: Option<&'static str>,
}

impl ValidationIssue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(
        field: impl Into<String>,
        message: impl Into<String>,
        code: Option<&'static str>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    /// Creates a warning-level issue.
    #[must_use]
    pub fn warning(
        field: impl Into<String>,
        message: impl Into<String>,
        code: Option<&'static str>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    /// Returns the issue with `prefix.` prepended to its field path.
    #[must_use]
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{prefix}.{}", self.field);
        self
    }
}

/// Validates a plugin manifest.
///
/// Checks the name format, the version shape, and the homepage URL.
/// Returns every issue found; empty means the manifest passed.
#[must_use]
pub fn validate_plugin_manifest(manifest: &PluginManifest) -> Vec<ValidationIssue> {
    let mut issues = validate_name(&manifest.name, "name");

    if !SEMVER_REGEX.is_match(&manifest.version) {
        issues.push(ValidationIssue::error(
            "version",
            format!("'{}' is not a semantic version", manifest.version),
            Some(CODE_VERSION_FORMAT),
        ));
    }

    if let Some(homepage) = &manifest.homepage {
        match Url::parse(homepage) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
            Ok(parsed) => issues.push(ValidationIssue::warning(
                "homepage",
                format!("homepage scheme must be http or https, got '{}'", parsed.scheme()),
                Some(CODE_HOMEPAGE_INVALID),
            )),
            Err(e) => issues.push(ValidationIssue::warning(
                "homepage",
                format!("invalid homepage URL: {e}"),
                Some(CODE_HOMEPAGE_INVALID),
            )),
        }
    }

    issues
}

/// Validates a loaded skill.
///
/// Checks the name format, the description length, the name/directory
/// agreement, and that every relative `.md` reference in the body has a
/// matching loaded resource. Dangling references are warnings, never
/// errors: this crate cannot link-check prose.
#[must_use]
pub fn validate_skill(skill: &Skill) -> Vec<ValidationIssue> {
    let mut issues = validate_name(&skill.name, "name");

    if skill.description.len() > DESCRIPTION_MAX_LEN {
        issues.push(ValidationIssue::warning(
            "description",
            format!(
                "description is {} bytes, over the {DESCRIPTION_MAX_LEN} byte cap",
                skill.description.len()
            ),
            Some(CODE_DESCRIPTION_LENGTH),
        ));
    }

    if let Some(directory) = skill
        .path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        && directory != skill.name
    {
        issues.push(ValidationIssue::warning(
            "name",
            format!("skill '{}' lives in directory '{directory}'", skill.name),
            Some(CODE_DIRECTORY_MISMATCH),
        ));
    }

    for reference in markdown_references(&skill.body) {
        let loaded = skill
            .resources
            .iter()
            .any(|resource| resource.path == Path::new(&reference));
        if !loaded {
            issues.push(ValidationIssue::warning(
                format!("resources.{reference}"),
                format!("body references '{reference}' but no such file was loaded"),
                Some(CODE_RESOURCE_DANGLING),
            ));
        }
    }

    issues
}

/// Validates a loaded bundle: its manifest plus every skill.
///
/// Skill issues get a `skills/<name>.` field prefix so a flat issue
/// list still reads unambiguously.
#[must_use]
pub fn validate_bundle(bundle: &PluginBundle) -> Vec<ValidationIssue> {
    let mut issues = validate_plugin_manifest(&bundle.manifest);

    for skill in &bundle.skills {
        for issue in validate_skill(skill) {
            issues.push(issue.prefixed(&format!("skills/{}", skill.name)));
        }
    }

    issues
}

fn validate_name(name: &str, field: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !NAME_REGEX.is_match(name) {
        issues.push(ValidationIssue::error(
            field,
            format!("'{name}' is not kebab-case"),
            Some(CODE_NAME_FORMAT),
        ));
    }
    if name.len() > NAME_MAX_LEN {
        issues.push(ValidationIssue::error(
            field,
            format!("name is {} bytes, over the {NAME_MAX_LEN} byte cap", name.len()),
            Some(CODE_NAME_LENGTH),
        ));
    }

    issues
}
