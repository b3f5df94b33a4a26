//! Skill file parsing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::frontmatter::split_document;
use crate::resource::ResourceFile;
use crate::{Error, Result};

/// File name that marks a directory under [`SKILLS_DIR`] as a skill.
pub const SKILL_FILE: &str = "SKILL.md";

/// Directory holding skills, relative to the bundle root.
pub const SKILLS_DIR: &str = "skills";

/// A skill: activation metadata plus a markdown body.
///
/// The host matches `description` against the task at hand to decide
/// whether to inject `body` into model context; a skill without a
/// description can never activate, which is why the field is mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Skill {
    /// Skill name, from the header or the skill directory.
    pub name: String,

    /// Activation description.
    pub description: String,

    /// Trigger phrases, when the header declares them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,

    /// The markdown body after the header.
    #[serde(skip)]
    pub body: String,

    /// Markdown attachments found next to the skill file.
    #[serde(skip)]
    pub resources: Vec<ResourceFile>,

    /// On-disk location of the `SKILL.md` this was parsed from.
    #[serde(skip)]
    pub path: PathBuf,

    /// Header fields not captured above.
    #[serde(flatten)]
    pub metadata: HashMap<String, serde_yaml::Value>,
}

impl Skill {
    /// Render the skill back to markdown with a YAML header.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let yaml = serde_yaml::to_string(self).unwrap_or_default();
        format!("---\n{}\n---\n{}", yaml.trim_end(), self.body)
    }
}

#[derive(Debug, Deserialize)]
struct SkillHeader {
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    triggers: Vec<String>,
    #[serde(flatten)]
    metadata: HashMap<String, serde_yaml::Value>,
}

/// Parse the `SKILL.md` at `path` from `content`.
///
/// A header without a `name` takes the name of the directory containing
/// the file, the same way command names fall back to their file stem.
///
/// # Errors
///
/// Returns `Error::MalformedSkill` when the header is missing or blank,
/// the YAML is invalid, or `name`/`description` resolve to empty.
pub fn parse_skill(content: &str, path: &Path) -> Result<Skill> {
    let doc = split_document(content);

    let raw = match doc.header {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Err(malformed(path, "missing frontmatter header")),
    };
    let value: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|e| malformed(path, format!("invalid header: {e}")))?;
    let header: SkillHeader = serde_yaml::from_value(value)
        .map_err(|e| malformed(path, format!("invalid header: {e}")))?;

    let name = match header.name {
        Some(name) => name,
        None => directory_name(path),
    };
    if name.is_empty() {
        return Err(malformed(path, "name must not be empty"));
    }

    let description = header.description.unwrap_or_default();
    if description.trim().is_empty() {
        return Err(malformed(path, "missing required field: description"));
    }

    Ok(Skill {
        name,
        description,
        triggers: header.triggers,
        body: doc.body.to_string(),
        resources: Vec::new(),
        path: path.to_path_buf(),
        metadata: header.metadata,
    })
}

fn directory_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string()
}

fn malformed(path: &Path, reason: impl Into<String>) -> Error {
    Error::MalformedSkill {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
