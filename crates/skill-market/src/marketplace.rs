use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory conventionally holding the marketplace manifest.
pub const MARKETPLACE_DIR: &str = ".claude-plugin";

/// Marketplace manifest file name.
pub const MARKETPLACE_FILE: &str = "marketplace.json";

/// Marketplace index parsed from `marketplace.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MarketplaceManifest {
    /// Marketplace name.
    pub name: String,

    /// Who maintains the marketplace.
    pub owner: MarketplaceOwner,

    /// What the marketplace distributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Plugin entries, in listing order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginRef>,
}

/// Marketplace owner information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct MarketplaceOwner {
    /// Owner name.
    pub name: String,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One marketplace entry: a plugin name and where its bundle lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PluginRef {
    /// Plugin name, unique within the marketplace.
    pub name: String,

    /// Bundle directory, relative to the marketplace root.
    pub source: String,

    /// Listing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for searchability.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Parse a marketplace manifest from a JSON string.
///
/// # Errors
///
/// Returns `Error::Json` when the JSON is invalid or a required field
/// is absent.
pub fn parse_marketplace(json: &str) -> Result<MarketplaceManifest> {
    serde_json::from_str(json).map_err(Error::Json)
}

/// Read the marketplace manifest at `path`.
///
/// # Errors
///
/// Returns `Error::MalformedManifest` when the file is absent, is not
/// valid JSON, or the marketplace name is blank.
pub fn read_marketplace(path: &Path) -> Result<MarketplaceManifest> {
    if !path.is_file() {
        return Err(Error::MalformedManifest {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let manifest: MarketplaceManifest =
        serde_json::from_str(&content).map_err(|e| Error::MalformedManifest {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if manifest.name.trim().is_empty() {
        return Err(Error::MalformedManifest {
            path: path.to_path_buf(),
            reason: "required field 'name' is empty".to_string(),
        });
    }

    Ok(manifest)
}

/// Root directory that plugin sources resolve against.
///
/// Conventionally the manifest lives at
/// `<root>/.claude-plugin/marketplace.json` and sources are relative to
/// `<root>`. A manifest anywhere else resolves against its own
/// directory.
#[must_use]
pub fn marketplace_root(manifest_path: &Path) -> PathBuf {
    let parent = manifest_path.parent().unwrap_or(Path::new("."));
    if parent.file_name().is_some_and(|name| name == MARKETPLACE_DIR) {
        parent.parent().unwrap_or(parent).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_marketplace() {
        let json = r#"{
            "name": "demo",
            "owner": { "name": "Acme", "email": "plugins@acme.dev" },
            "plugins": [
                {
                    "name": "rust-skills",
                    "source": "./plugins/rust-skills",
                    "description": "Rust coding guidelines",
                    "tags": ["rust", "review"]
                },
                {
                    "name": "minimal",
                    "source": "./plugins/minimal"
                }
            ]
        }"#;

        let manifest = parse_marketplace(json).unwrap();
        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.owner.name, "Acme");
        assert_eq!(manifest.owner.email, Some("plugins@acme.dev".to_string()));
        assert_eq!(manifest.plugins.len(), 2);
        assert_eq!(manifest.plugins[0].name, "rust-skills");
        assert_eq!(manifest.plugins[0].source, "./plugins/rust-skills");
        assert_eq!(manifest.plugins[0].tags, vec!["rust", "review"]);
        assert!(manifest.plugins[1].description.is_none());
    }

    #[test]
    fn parse_missing_source_field() {
        let json = r#"{"name": "m", "owner": {"name": "o"}, "plugins": [{"name": "p"}]}"#;
        assert!(parse_marketplace(json).is_err());
    }

    #[test]
    fn parse_missing_owner() {
        let json = r#"{"name": "m", "plugins": []}"#;
        assert!(parse_marketplace(json).is_err());
    }

    #[test]
    fn parse_empty_plugins() {
        let json = r#"{"name": "m", "owner": {"name": "o"}}"#;
        let manifest = parse_marketplace(json).unwrap();
        assert!(manifest.plugins.is_empty());
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_marketplace(&dir.path().join("marketplace.json")).unwrap_err();
        match err {
            Error::MalformedManifest { reason, .. } => assert_eq!(reason, "file not found"),
            other => panic!("expected MalformedManifest, got {other:?}"),
        }
    }

    #[test]
    fn read_blank_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marketplace.json");
        fs::write(&path, r#"{"name": " ", "owner": {"name": "o"}}"#).unwrap();

        assert!(matches!(
            read_marketplace(&path),
            Err(Error::MalformedManifest { .. })
        ));
    }

    #[test]
    fn root_of_conventional_layout_is_the_grandparent() {
        let path = Path::new("market/.claude-plugin/marketplace.json");
        assert_eq!(marketplace_root(path), Path::new("market"));
    }

    #[test]
    fn root_of_bare_layout_is_the_parent() {
        let path = Path::new("market/marketplace.json");
        assert_eq!(marketplace_root(path), Path::new("market"));
    }
}
