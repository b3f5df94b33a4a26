//! Resource attachments owned by skills.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A markdown attachment owned by a skill.
///
/// Resources hold overflow content the skill body points at by relative
/// path. They have no lifecycle of their own: they load with the owning
/// skill and are never required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ResourceFile {
    /// Path relative to the skill directory.
    pub path: PathBuf,

    /// File contents.
    #[serde(skip)]
    pub contents: String,
}

/// Matches markdown link targets: `](target)`.
static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^()\s]+)\)").expect("valid literal regex"));

/// Extract relative `.md` references from a markdown body.
///
/// Returns link targets that could name a file inside the skill
/// directory: URLs and absolute paths are skipped, fragments and query
/// strings are stripped, a leading `./` is dropped, and duplicates are
/// collapsed (first occurrence wins).
#[must_use]
pub fn markdown_references(body: &str) -> Vec<String> {
    let mut references: Vec<String> = Vec::new();

    for caps in MD_LINK.captures_iter(body) {
        let target = caps[1].split(['#', '?']).next().unwrap_or_default();
        if !target.ends_with(".md") || target.starts_with('/') || target.contains("://") {
            continue;
        }
        let target = target.trim_start_matches("./").to_string();
        if !references.contains(&target) {
            references.push(target);
        }
    }

    references
}
