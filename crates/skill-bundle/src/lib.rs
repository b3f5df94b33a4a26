#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`bundle`] - Plugin bundle loading
//! - [`command`] - Command file parsing
//! - [`error`] - Error types
//! - [`frontmatter`] - Markdown header splitting
//! - [`manifest`] - Plugin manifest parsing
//! - [`resource`] - Resource attachments
//! - [`skill`] - Skill file parsing
//! - [`validation`] - Non-fatal bundle validation

pub mod bundle;
pub mod command;
pub mod error;
pub mod frontmatter;
pub mod manifest;
pub mod resource;
pub mod skill;
pub mod validation;

pub use bundle::{PluginBundle, load_bundle};
pub use command::{COMMANDS_DIR, Command, parse_command};
pub use error::{Error, Result};
pub use frontmatter::{Document, split_document};
pub use manifest::{
    MANIFEST_DIR, MANIFEST_FILE, PluginManifest, parse_plugin_manifest, read_plugin_manifest,
};
pub use resource::{ResourceFile, markdown_references};
pub use skill::{SKILL_FILE, SKILLS_DIR, Skill, parse_skill};
pub use validation::{
    CODE_DESCRIPTION_LENGTH, CODE_DIRECTORY_MISMATCH, CODE_HOMEPAGE_INVALID, CODE_NAME_FORMAT,
    CODE_NAME_LENGTH, CODE_RESOURCE_DANGLING, CODE_VERSION_FORMAT, DESCRIPTION_MAX_LEN,
    NAME_MAX_LEN, NAME_REGEX, Severity, ValidationIssue, validate_bundle,
    validate_plugin_manifest, validate_skill,
};
