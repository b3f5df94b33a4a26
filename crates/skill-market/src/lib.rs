#![doc = include_str!("../README.md")]
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`lint`] - Registry-wide validation
//! - [`marketplace`] - Marketplace manifest parsing
//! - [`registry`] - Ordered plugin loading

pub mod error;
pub mod lint;
pub mod marketplace;
pub mod registry;

pub use error::{Error, Result};
pub use lint::{CODE_NAME_MISMATCH, lint_registry};
pub use marketplace::{
    MARKETPLACE_DIR, MARKETPLACE_FILE, MarketplaceManifest, MarketplaceOwner, PluginRef,
    marketplace_root, parse_marketplace, read_marketplace,
};
pub use registry::Registry;
