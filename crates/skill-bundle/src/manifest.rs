use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory holding the plugin manifest, relative to the bundle root.
pub const MANIFEST_DIR: &str = ".claude-plugin";

/// Manifest file name inside [`MANIFEST_DIR`].
pub const MANIFEST_FILE: &str = "plugin.json";

/// Plugin metadata parsed from `.claude-plugin/plugin.json`.
///
/// `name`, `description`, `version`, and `author` are the required
/// surface; the rest is optional packaging metadata. Manifests are
/// write-once: contributors author them and nothing mutates them after
/// loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PluginManifest {
    /// Plugin name, unique within a marketplace.
    pub name: String,

    /// What the plugin provides.
    pub description: String,

    /// Semantic version string.
    pub version: String,

    /// Plugin author.
    pub author: String,

    /// Project homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    /// License identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Keywords for searchability.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl PluginManifest {
    /// The first required field that is present but blank, if any.
    fn first_blank_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("description", &self.description),
            ("version", &self.version),
            ("author", &self.author),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Parse a plugin manifest from a JSON string.
///
/// # Errors
///
/// Returns `Error::Json` when the JSON is invalid or a required field
/// is absent.
pub fn parse_plugin_manifest(json: &str) -> Result<PluginManifest> {
    serde_json::from_str(json).map_err(Error::Json)
}

/// Read and validate the manifest of the bundle rooted at `dir`.
///
/// # Errors
///
/// Returns `Error::MalformedManifest` when the file is absent, is not
/// valid JSON, or a required field is missing or blank.
pub fn read_plugin_manifest(dir: &Path) -> Result<PluginManifest> {
    let path = dir.join(MANIFEST_DIR).join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(Error::MalformedManifest {
            reason: format!("missing {MANIFEST_DIR}/{MANIFEST_FILE}"),
            path,
        });
    }

    let content = fs::read_to_string(&path)?;
    let manifest: PluginManifest =
        serde_json::from_str(&content).map_err(|e| Error::MalformedManifest {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    if let Some(field) = manifest.first_blank_field() {
        return Err(Error::MalformedManifest {
            reason: format!("required field '{field}' is empty"),
            path,
        });
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "name": "rust-skills",
            "description": "Rust coding guidelines",
            "version": "1.2.0",
            "author": "Acme",
            "homepage": "https://example.com",
            "license": "MIT",
            "keywords": ["rust", "guidelines"]
        }"#;

        let manifest = parse_plugin_manifest(json).unwrap();
        assert_eq!(manifest.name, "rust-skills");
        assert_eq!(manifest.description, "Rust coding guidelines");
        assert_eq!(manifest.version, "1.2.0");
        assert_eq!(manifest.author, "Acme");
        assert_eq!(manifest.homepage, Some("https://example.com".to_string()));
        assert_eq!(manifest.keywords, vec!["rust", "guidelines"]);
    }

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{"name": "m", "description": "d", "version": "0.1.0", "author": "a"}"#;
        let manifest = parse_plugin_manifest(json).unwrap();
        assert!(manifest.homepage.is_none());
        assert!(manifest.license.is_none());
        assert!(manifest.keywords.is_empty());
    }

    #[test]
    fn parse_missing_required_field() {
        let json = r#"{"name": "m", "description": "d", "version": "0.1.0"}"#;
        assert!(parse_plugin_manifest(json).is_err());
    }

    #[test]
    fn read_valid_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_dir = dir.path().join(MANIFEST_DIR);
        fs::create_dir_all(&manifest_dir).unwrap();
        fs::write(
            manifest_dir.join(MANIFEST_FILE),
            r#"{"name": "rust-skills", "description": "d", "version": "1.0.0", "author": "a"}"#,
        )
        .unwrap();

        let manifest = read_plugin_manifest(dir.path()).unwrap();
        assert_eq!(manifest.name, "rust-skills");
    }

    #[test]
    fn read_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_plugin_manifest(dir.path()).unwrap_err();
        match err {
            Error::MalformedManifest { path, reason } => {
                assert!(path.ends_with(".claude-plugin/plugin.json"));
                assert!(reason.contains("missing"));
            }
            other => panic!("expected MalformedManifest, got {other:?}"),
        }
    }

    #[test]
    fn read_blank_required_field() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_dir = dir.path().join(MANIFEST_DIR);
        fs::create_dir_all(&manifest_dir).unwrap();
        fs::write(
            manifest_dir.join(MANIFEST_FILE),
            r#"{"name": "m", "description": "  ", "version": "1.0.0", "author": "a"}"#,
        )
        .unwrap();

        let err = read_plugin_manifest(dir.path()).unwrap_err();
        match err {
            Error::MalformedManifest { reason, .. } => {
                assert!(reason.contains("'description'"));
            }
            other => panic!("expected MalformedManifest, got {other:?}"),
        }
    }

    #[test]
    fn read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_dir = dir.path().join(MANIFEST_DIR);
        fs::create_dir_all(&manifest_dir).unwrap();
        fs::write(manifest_dir.join(MANIFEST_FILE), "not json").unwrap();

        assert!(matches!(
            read_plugin_manifest(dir.path()),
            Err(Error::MalformedManifest { .. })
        ));
    }
}
