//! Slipway.toml project descriptor parsing and schema.
//!
//! The project descriptor is the single configuration file for a Slipway
//! project: `[project]` metadata plus one `[targets.<name>]` table per
//! build target.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::errors::ConfigError;
use crate::core::target::{validate_target_name, TargetDeclaration};

/// Canonical project descriptor filename.
pub const PROJECT_FILE_NAME: &str = "Slipway.toml";

/// Error locating a project descriptor.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("could not find {PROJECT_FILE_NAME} in `{dir}` or any parent directory")]
    NotFound { dir: PathBuf },
}

/// Look for a project descriptor in a single directory.
pub fn find_project(dir: &Path) -> Result<PathBuf, ProjectError> {
    let candidate = dir.join(PROJECT_FILE_NAME);
    if candidate.is_file() {
        Ok(candidate)
    } else {
        Err(ProjectError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

/// Project metadata from the [project] section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,

    /// Project version (semver)
    pub version: String,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectMetadata {
    /// Parse the version string as semver.
    pub fn version(&self) -> Result<Version> {
        self.version
            .parse()
            .with_context(|| format!("invalid version: {}", self.version))
    }
}

/// Raw descriptor as deserialized from TOML.
///
/// Targets land in a BTreeMap so parse output is deterministic regardless
/// of table order in the file.
#[derive(Debug, Deserialize)]
struct RawProject {
    project: ProjectMetadata,

    #[serde(default)]
    targets: BTreeMap<String, TargetDeclaration>,
}

/// The parsed Slipway.toml descriptor.
#[derive(Debug, Clone)]
pub struct Project {
    /// Project metadata
    pub metadata: ProjectMetadata,

    /// Declared targets, name-sorted
    targets: Vec<(String, TargetDeclaration)>,

    /// The directory containing this descriptor
    pub project_dir: PathBuf,
}

impl Project {
    /// Load a project descriptor from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read project descriptor: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse descriptor content.
    ///
    /// Target names are validated here; module lists are validated when a
    /// target is resolved into a descriptor.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawProject = toml::from_str(content)
            .with_context(|| format!("failed to parse {}", PROJECT_FILE_NAME))?;

        let project_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        for name in raw.targets.keys() {
            validate_target_name(name)
                .with_context(|| format!("in {}", path.display()))?;
        }

        Ok(Project {
            metadata: raw.project,
            targets: raw.targets.into_iter().collect(),
            project_dir,
        })
    }

    /// Create an empty project, for building descriptors in code.
    pub fn new(metadata: ProjectMetadata, project_dir: impl Into<PathBuf>) -> Self {
        Project {
            metadata,
            targets: Vec::new(),
            project_dir: project_dir.into(),
        }
    }

    /// Declare a target. Names must be unique and well-formed.
    pub fn add_target(
        &mut self,
        name: impl Into<String>,
        declaration: TargetDeclaration,
    ) -> Result<(), ConfigError> {
        let name = name.into();
        validate_target_name(&name)?;
        if self.targets.iter().any(|(n, _)| *n == name) {
            return Err(ConfigError::DuplicateTarget { name });
        }
        self.targets.push((name, declaration));
        Ok(())
    }

    /// Get a declared target by name.
    pub fn target(&self, name: &str) -> Option<&TargetDeclaration> {
        self.targets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Iterate declared targets in deterministic order.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &TargetDeclaration)> {
        self.targets.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Names of all declared targets.
    pub fn target_names(&self) -> Vec<String> {
        self.targets.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Number of declared targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the descriptor declares no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Generate a default Slipway.toml for a new project.
///
/// The scaffold declares the editor target for the named game module, the
/// minimal shape an engine plugin project needs to open in the editor.
pub fn generate_default_project(name: &str) -> String {
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"

[targets.{name}Editor]
kind = "editor"
settings = "v2"
modules = ["{name}"]
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::{SettingsVersion, TargetKind};
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_project() {
        let content = r#"
[project]
name = "ProceduralLandscape"
version = "0.1.0"

[targets.ProceduralLandscapeEditor]
kind = "editor"
settings = "v2"
modules = ["ProceduralLandscape"]
"#;
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(PROJECT_FILE_NAME);

        let project = Project::parse(content, &path).unwrap();
        assert_eq!(project.metadata.name, "ProceduralLandscape");
        assert_eq!(project.metadata.version().unwrap(), Version::new(0, 1, 0));
        assert_eq!(project.len(), 1);

        let decl = project.target("ProceduralLandscapeEditor").unwrap();
        assert_eq!(decl.kind, TargetKind::Editor);
        assert_eq!(decl.settings_version, SettingsVersion::V2);
        assert_eq!(decl.modules, vec!["ProceduralLandscape"]);
    }

    #[test]
    fn test_parse_defaults() {
        // kind, settings, and modules all have defaults.
        let content = r#"
[project]
name = "Bare"
version = "1.0.0"

[targets.Bare]
"#;
        let tmp = TempDir::new().unwrap();
        let project = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME)).unwrap();

        let decl = project.target("Bare").unwrap();
        assert_eq!(decl.kind, TargetKind::Game);
        assert_eq!(decl.settings_version, SettingsVersion::latest());
        assert!(decl.modules.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let content = r#"
[project]
name = "Bad"
version = "1.0.0"

[targets.Bad]
kind = "plugin"
"#;
        let tmp = TempDir::new().unwrap();
        let result = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_settings_version() {
        let content = r#"
[project]
name = "Bad"
version = "1.0.0"

[targets.Bad]
settings = "v9"
"#;
        let tmp = TempDir::new().unwrap();
        let result = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_target_name() {
        let content = r#"
[project]
name = "Bad"
version = "1.0.0"

[targets."my game"]
kind = "game"
"#;
        let tmp = TempDir::new().unwrap();
        let result = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME));
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("malformed target name"));
    }

    #[test]
    fn test_parse_requires_project_section() {
        let content = r#"
[targets.Orphan]
kind = "game"
"#;
        let tmp = TempDir::new().unwrap();
        let result = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME));
        assert!(result.is_err());
    }

    #[test]
    fn test_add_target_rejects_duplicates() {
        let metadata = ProjectMetadata {
            name: "Dup".to_string(),
            version: "0.1.0".to_string(),
            description: None,
        };
        let mut project = Project::new(metadata, ".");

        project
            .add_target("DupEditor", TargetDeclaration::editor())
            .unwrap();
        let result = project.add_target("DupEditor", TargetDeclaration::editor());
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateTarget { .. })
        ));
    }

    #[test]
    fn test_targets_are_name_sorted() {
        let content = r#"
[project]
name = "Multi"
version = "0.1.0"

[targets.Zeta]
kind = "server"

[targets.Alpha]
kind = "game"
"#;
        let tmp = TempDir::new().unwrap();
        let project = Project::parse(content, &tmp.path().join(PROJECT_FILE_NAME)).unwrap();
        assert_eq!(project.target_names(), vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_find_project() {
        let tmp = TempDir::new().unwrap();
        assert!(find_project(tmp.path()).is_err());

        let path = tmp.path().join(PROJECT_FILE_NAME);
        std::fs::write(&path, generate_default_project("Demo")).unwrap();
        assert_eq!(find_project(tmp.path()).unwrap(), path);
    }

    #[test]
    fn test_generate_default_project_parses() {
        let tmp = TempDir::new().unwrap();
        let content = generate_default_project("ProceduralLandscape");
        let project = Project::parse(content.as_str(), &tmp.path().join(PROJECT_FILE_NAME)).unwrap();

        assert_eq!(project.target_names(), vec!["ProceduralLandscapeEditor"]);
        let decl = project.target("ProceduralLandscapeEditor").unwrap();
        assert_eq!(decl.kind, TargetKind::Editor);
        assert_eq!(decl.modules, vec!["ProceduralLandscape"]);
    }
}
