//! The loaded marketplace registry.

use std::path::{Path, PathBuf};

use tracing::debug;

use skill_bundle::{PluginBundle, Skill, load_bundle};

use crate::marketplace::{MarketplaceManifest, marketplace_root, read_marketplace};
use crate::{Error, Result};

/// A marketplace with every referenced plugin loaded.
///
/// Plugins keep the order the marketplace declares them in, so listings
/// derived from a registry are deterministic. Loading is read-only and
/// touches no shared state: loading the same manifest twice yields an
/// equal registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    root: PathBuf,
    manifest: MarketplaceManifest,
    plugins: Vec<PluginBundle>,
}

impl Registry {
    /// Load the marketplace manifest at `manifest_path` and every
    /// plugin bundle it references.
    ///
    /// Sources resolve against the marketplace root (see
    /// [`marketplace_root`]). The load fails fast: the first offending
    /// file aborts it with its path.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedManifest` for an unreadable index,
    /// `Error::DuplicatePlugin` when two entries share a name,
    /// `Error::MissingPluginDirectory` when a source resolves to a
    /// directory that does not exist, or `Error::Bundle` when a
    /// referenced plugin fails to load.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = read_marketplace(manifest_path)?;
        let root = marketplace_root(manifest_path);

        for (index, entry) in manifest.plugins.iter().enumerate() {
            if manifest.plugins[..index]
                .iter()
                .any(|other| other.name == entry.name)
            {
                return Err(Error::DuplicatePlugin {
                    name: entry.name.clone(),
                });
            }
        }

        let mut plugins = Vec::with_capacity(manifest.plugins.len());
        for entry in &manifest.plugins {
            let dir = root.join(&entry.source);
            if !dir.is_dir() {
                return Err(Error::MissingPluginDirectory {
                    name: entry.name.clone(),
                    path: dir,
                });
            }
            plugins.push(load_bundle(&dir)?);
        }

        debug!(
            marketplace = %manifest.name,
            plugins = plugins.len(),
            "loaded marketplace registry"
        );

        Ok(Self {
            root,
            manifest,
            plugins,
        })
    }

    /// The directory plugin sources were resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The marketplace index this registry was loaded from.
    #[must_use]
    pub fn manifest(&self) -> &MarketplaceManifest {
        &self.manifest
    }

    /// Loaded plugins, in marketplace order.
    #[must_use]
    pub fn plugins(&self) -> &[PluginBundle] {
        &self.plugins
    }

    /// Look up a plugin by its marketplace-declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PluginBundle> {
        self.manifest
            .plugins
            .iter()
            .position(|entry| entry.name == name)
            .map(|index| &self.plugins[index])
    }

    /// Iterate every skill with its owning plugin's declared name.
    pub fn skills(&self) -> impl Iterator<Item = (&str, &Skill)> {
        self.manifest
            .plugins
            .iter()
            .zip(&self.plugins)
            .flat_map(|(entry, bundle)| {
                bundle
                    .skills
                    .iter()
                    .map(move |skill| (entry.name.as_str(), skill))
            })
    }

    /// Number of loaded plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the marketplace lists no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
