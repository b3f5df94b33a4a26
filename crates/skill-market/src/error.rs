//! Error types for marketplace loading.

use std::path::PathBuf;

/// Errors that can occur while loading a marketplace and its plugins.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The marketplace manifest is missing, unparsable, or lacks a
    /// required field.
    #[error("malformed manifest at {path}: {reason}")]
    MalformedManifest {
        /// Where the manifest was found (or expected).
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Two marketplace entries declare the same plugin name.
    #[error("duplicate plugin '{name}' in marketplace")]
    DuplicatePlugin {
        /// The colliding plugin name.
        name: String,
    },

    /// A marketplace entry points at a directory that does not exist.
    #[error("missing plugin directory for '{name}': {path}")]
    MissingPluginDirectory {
        /// The plugin whose source is dangling.
        name: String,
        /// The directory the entry resolved to.
        path: PathBuf,
    },

    /// A referenced plugin bundle failed to load.
    #[error("bundle error: {0}")]
    Bundle(#[from] skill_bundle::Error),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for marketplace operations.
pub type Result<T> = std::result::Result<T, Error>;
