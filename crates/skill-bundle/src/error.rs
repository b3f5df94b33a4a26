//! Error types for plugin bundle loading.

use std::path::PathBuf;

/// Errors that can occur while loading a plugin bundle from disk.
///
/// All variants describe load-time structural failures. Loading is
/// read-only and idempotent, so rerunning after fixing the offending
/// file is always safe.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The plugin manifest is missing, unparsable, or lacks a required field.
    #[error("malformed manifest at {path}: {reason}")]
    MalformedManifest {
        /// Where the manifest was found (or expected).
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A skill file violates the skill contract.
    #[error("malformed skill at {path}: {reason}")]
    MalformedSkill {
        /// The offending `SKILL.md`.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// A command file violates the command contract.
    #[error("malformed command at {path}: {reason}")]
    MalformedCommand {
        /// The offending command file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Two skills in the same bundle declare the same name.
    #[error("duplicate skill '{name}' at {path}")]
    DuplicateSkill {
        /// The colliding skill name.
        name: String,
        /// The second `SKILL.md` claiming it.
        path: PathBuf,
    },

    /// Two commands in the same bundle declare the same name.
    #[error("duplicate command '{name}' at {path}")]
    DuplicateCommand {
        /// The colliding command name.
        name: String,
        /// The second command file claiming it.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A specialized Result type for bundle operations.
pub type Result<T> = std::result::Result<T, Error>;
