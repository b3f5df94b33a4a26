//! Plugin bundle loading.
//!
//! A bundle is a self-contained plugin directory: a manifest under
//! `.claude-plugin/`, zero or more skills under `skills/`, zero or more
//! commands under `commands/`. Loading is a single pass from filesystem
//! to records. Nothing is written and no state is kept, so a failed
//! load can always be retried after fixing the offending file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::command::{COMMANDS_DIR, Command, parse_command};
use crate::manifest::{PluginManifest, read_plugin_manifest};
use crate::resource::ResourceFile;
use crate::skill::{SKILL_FILE, SKILLS_DIR, Skill, parse_skill};
use crate::{Error, Result};

/// A fully loaded plugin: manifest plus its skills and commands.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct PluginBundle {
    /// Bundle root directory.
    pub root: PathBuf,

    /// Parsed `.claude-plugin/plugin.json`.
    pub manifest: PluginManifest,

    /// Skills, in directory-name order.
    pub skills: Vec<Skill>,

    /// Commands, in file-name order.
    pub commands: Vec<Command>,
}

impl PluginBundle {
    /// Look up a skill by name.
    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name == name)
    }

    /// Look up a command by name.
    #[must_use]
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name == name)
    }
}

/// Load the plugin bundle rooted at `dir`.
///
/// Directory listings are sorted by file name so a bundle loads
/// identically on every platform. `skills/` and `commands/` may be
/// absent; the manifest may not.
///
/// # Errors
///
/// Returns `Error::MalformedManifest`, `Error::MalformedSkill`,
/// `Error::MalformedCommand`, or the duplicate-name variants, each
/// carrying the offending path. I/O failures map to `Error::Io`.
pub fn load_bundle(dir: &Path) -> Result<PluginBundle> {
    let manifest = read_plugin_manifest(dir)?;
    let skills = load_skills(&dir.join(SKILLS_DIR))?;
    let commands = load_commands(&dir.join(COMMANDS_DIR))?;

    debug!(
        plugin = %manifest.name,
        skills = skills.len(),
        commands = commands.len(),
        "loaded plugin bundle"
    );

    Ok(PluginBundle {
        root: dir.to_path_buf(),
        manifest,
        skills,
        commands,
    })
}

fn load_skills(dir: &Path) -> Result<Vec<Skill>> {
    let mut skills: Vec<Skill> = Vec::new();

    for entry in sorted_entries(dir)? {
        if !entry.is_dir() {
            continue;
        }
        let skill_file = entry.join(SKILL_FILE);
        if !skill_file.is_file() {
            debug!(path = %entry.display(), "skills subdirectory without SKILL.md, skipping");
            continue;
        }

        let content = fs::read_to_string(&skill_file)?;
        let mut skill = parse_skill(&content, &skill_file)?;
        if skills.iter().any(|loaded| loaded.name == skill.name) {
            return Err(Error::DuplicateSkill {
                name: skill.name,
                path: skill_file,
            });
        }

        skill.resources = load_resources(&entry)?;
        skills.push(skill);
    }

    Ok(skills)
}

/// Collect every `.md` under `skill_dir` except the skill file itself.
fn load_resources(skill_dir: &Path) -> Result<Vec<ResourceFile>> {
    let mut resources = Vec::new();

    for entry in WalkDir::new(skill_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.depth() == 1 && entry.file_name() == SKILL_FILE {
            continue;
        }
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "md") {
            continue;
        }

        let contents = fs::read_to_string(path)?;
        let relative = path.strip_prefix(skill_dir).unwrap_or(path).to_path_buf();
        resources.push(ResourceFile {
            path: relative,
            contents,
        });
    }

    Ok(resources)
}

fn load_commands(dir: &Path) -> Result<Vec<Command>> {
    let mut commands: Vec<Command> = Vec::new();

    for entry in sorted_entries(dir)? {
        if !entry.is_file() || !entry.extension().is_some_and(|ext| ext == "md") {
            continue;
        }

        let content = fs::read_to_string(&entry)?;
        let command = parse_command(&content, &entry)?;
        if commands.iter().any(|loaded| loaded.name == command.name) {
            return Err(Error::DuplicateCommand {
                name: command.name,
                path: entry,
            });
        }

        commands.push(command);
    }

    Ok(commands)
}

/// Directory entries sorted by path; an absent directory is empty.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}
