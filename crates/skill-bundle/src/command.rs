//! Command file parsing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::frontmatter::split_document;
use crate::{Error, Result};

/// Directory holding command files, relative to the bundle root.
pub const COMMANDS_DIR: &str = "commands";

/// A slash-command contract.
///
/// The body tells the host's model what to do when the user invokes
/// `/name`; nothing in the bundle executes it. The header is optional:
/// a bare markdown file is a command named after its file stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Command {
    /// Command name (what the user types after the slash).
    pub name: String,

    /// What the command does.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Invocation syntax, e.g. `/rust-review <path>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Tools the host should permit while running the command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_tools: Vec<String>,

    /// The markdown body after the header.
    #[serde(skip)]
    pub body: String,

    /// On-disk location of the command file.
    #[serde(skip)]
    pub path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct CommandHeader {
    name: Option<String>,
    description: Option<String>,
    usage: Option<String>,
    #[serde(default)]
    allowed_tools: Vec<String>,
}

/// Parse the command file at `path` from `content`.
///
/// # Errors
///
/// Returns `Error::MalformedCommand` when the header YAML is invalid or
/// the name resolves to empty.
pub fn parse_command(content: &str, path: &Path) -> Result<Command> {
    let doc = split_document(content);

    let header = match doc.header {
        Some(raw) if !raw.trim().is_empty() => serde_yaml::from_str::<CommandHeader>(raw)
            .map_err(|e| malformed(path, format!("invalid header: {e}")))?,
        _ => CommandHeader::default(),
    };

    let name = header.name.unwrap_or_else(|| file_stem(path));
    if name.is_empty() {
        return Err(malformed(path, "name must not be empty"));
    }

    Ok(Command {
        name,
        description: header.description,
        usage: header.usage,
        allowed_tools: header.allowed_tools,
        body: doc.body.to_string(),
        path: path.to_path_buf(),
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string()
}

fn malformed(path: &Path, reason: impl Into<String>) -> Error {
    Error::MalformedCommand {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_with_full_header() {
        let content = r#"---
name: rust-review
description: Review Rust code for guideline violations
usage: /rust-review <path>
allowed_tools:
  - Read
  - Grep
---
# Steps
"#;
        let command = parse_command(content, Path::new("commands/other.md")).unwrap();
        assert_eq!(command.name, "rust-review");
        assert_eq!(
            command.description,
            Some("Review Rust code for guideline violations".to_string())
        );
        assert_eq!(command.usage, Some("/rust-review <path>".to_string()));
        assert_eq!(command.allowed_tools, vec!["Read", "Grep"]);
        assert_eq!(command.body, "# Steps\n");
    }

    #[test]
    fn name_falls_back_to_file_stem() {
        let content = "---\ndescription: A command\n---\nbody\n";
        let command = parse_command(content, Path::new("commands/do-stuff.md")).unwrap();
        assert_eq!(command.name, "do-stuff");
    }

    #[test]
    fn headerless_file_is_a_command() {
        let content = "# Review the given path\n";
        let command = parse_command(content, Path::new("commands/review.md")).unwrap();
        assert_eq!(command.name, "review");
        assert!(command.description.is_none());
        assert_eq!(command.body, content);
    }

    #[test]
    fn rejects_empty_explicit_name() {
        let content = "---\nname: \"\"\n---\nbody\n";
        let err = parse_command(content, Path::new("commands/x.md")).unwrap_err();
        assert!(matches!(err, Error::MalformedCommand { .. }));
    }

    #[test]
    fn rejects_invalid_header_yaml() {
        let content = "---\nallowed_tools: {broken\n---\nbody\n";
        let err = parse_command(content, Path::new("commands/x.md")).unwrap_err();
        match err {
            Error::MalformedCommand { path, reason } => {
                assert_eq!(path, Path::new("commands/x.md"));
                assert!(reason.contains("invalid header"));
            }
            other => panic!("expected MalformedCommand, got {other:?}"),
        }
    }
}
