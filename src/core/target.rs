//! Target definitions - what the orchestrator is asked to produce.
//!
//! A TargetDescriptor is the fully-resolved configuration for one build
//! target: its name, the flavor of binary to emit, the default-settings
//! schema to apply, and the extra modules to link in.

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigError;
use crate::core::target_info::TargetInfo;

/// The flavor of binary the orchestrator produces for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Standalone game binary
    Game,

    /// Editor tooling binary
    Editor,

    /// Networked client (no server logic)
    Client,

    /// Dedicated server (no rendering)
    Server,

    /// Standalone utility program
    Program,
}

impl Default for TargetKind {
    fn default() -> Self {
        TargetKind::Game
    }
}

impl TargetKind {
    /// Get the conventional output name for a target of this kind.
    ///
    /// Editor, client, and server binaries carry a kind suffix so they can
    /// sit next to the game binary in the same output directory.
    pub fn output_name(&self, project: &str) -> String {
        match self {
            TargetKind::Game | TargetKind::Program => project.to_string(),
            TargetKind::Editor => format!("{}Editor", project),
            TargetKind::Client => format!("{}Client", project),
            TargetKind::Server => format!("{}Server", project),
        }
    }

    /// Check if this kind links editor-only data and tooling modules.
    pub fn includes_editor_data(&self) -> bool {
        matches!(self, TargetKind::Editor)
    }

    /// Check if this kind runs against cooked (pre-processed) content.
    pub fn requires_cooked_content(&self) -> bool {
        matches!(self, TargetKind::Game | TargetKind::Client | TargetKind::Server)
    }

    /// Stable lowercase name, matching the descriptor syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Game => "game",
            TargetKind::Editor => "editor",
            TargetKind::Client => "client",
            TargetKind::Server => "server",
            TargetKind::Program => "program",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which default-settings schema the orchestrator applies to a target.
///
/// The schema affects defaults not encoded in the descriptor itself, so it
/// is pinned explicitly rather than floating with the orchestrator version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsVersion {
    /// Legacy defaults
    #[serde(alias = "1")]
    V1,

    /// Current defaults
    #[serde(alias = "2")]
    V2,
}

impl SettingsVersion {
    /// The most recent settings schema.
    pub fn latest() -> Self {
        SettingsVersion::V2
    }

    /// Stable lowercase name, matching the descriptor syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsVersion::V1 => "v1",
            SettingsVersion::V2 => "v2",
        }
    }
}

impl Default for SettingsVersion {
    fn default() -> Self {
        SettingsVersion::latest()
    }
}

impl std::fmt::Display for SettingsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declared configuration a descriptor is built from.
///
/// This is an explicit value (parsed from `Slipway.toml` or built in code)
/// rather than a compile-time constant, so callers and tests can substitute
/// arbitrary module sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDeclaration {
    /// What flavor of binary to produce
    #[serde(default)]
    pub kind: TargetKind,

    /// Which default-settings schema to apply
    #[serde(default, rename = "settings")]
    pub settings_version: SettingsVersion,

    /// Extra modules to link into the target, in link order
    #[serde(default)]
    pub modules: Vec<String>,
}

impl TargetDeclaration {
    /// Create a declaration for the given kind with latest settings.
    pub fn new(kind: TargetKind) -> Self {
        TargetDeclaration {
            kind,
            settings_version: SettingsVersion::latest(),
            modules: Vec::new(),
        }
    }

    /// Create an editor-target declaration.
    pub fn editor() -> Self {
        Self::new(TargetKind::Editor)
    }

    /// Create a game-target declaration.
    pub fn game() -> Self {
        Self::new(TargetKind::Game)
    }

    /// Set the settings schema version.
    pub fn with_settings(mut self, version: SettingsVersion) -> Self {
        self.settings_version = version;
        self
    }

    /// Set the extra modules, in link order.
    pub fn with_modules(mut self, modules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.modules = modules.into_iter().map(|m| m.into()).collect();
        self
    }
}

/// A fully-resolved build target, ready to hand to the orchestrator.
///
/// Constructed once per evaluation, immutable afterwards, read exactly once
/// by the orchestrator and then discarded. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Unique target name
    pub name: String,

    /// What flavor of binary to produce
    pub kind: TargetKind,

    /// Which default-settings schema to apply
    pub settings_version: SettingsVersion,

    /// Extra modules to link into the target, in declaration order
    pub extra_modules: Vec<String>,
}

impl TargetDescriptor {
    /// Resolve a declaration into a descriptor.
    ///
    /// The `TargetInfo` context is required by the orchestrator contract;
    /// the declared fields do not currently vary with it. Construction is
    /// pure and validates every invariant: non-empty well-formed name, no
    /// empty module entries, no duplicate module entries. Declaration order
    /// of the modules is preserved.
    pub fn new(
        name: impl Into<String>,
        declaration: &TargetDeclaration,
        _info: &TargetInfo,
    ) -> Result<Self, ConfigError> {
        let name = name.into();
        validate_target_name(&name)?;

        let mut seen = std::collections::HashSet::new();
        for (position, module) in declaration.modules.iter().enumerate() {
            if module.is_empty() {
                return Err(ConfigError::EmptyModuleName {
                    target: name,
                    position,
                });
            }
            if !seen.insert(module.as_str()) {
                return Err(ConfigError::DuplicateModule {
                    target: name,
                    module: module.clone(),
                });
            }
        }

        Ok(TargetDescriptor {
            name,
            kind: declaration.kind,
            settings_version: declaration.settings_version,
            extra_modules: declaration.modules.clone(),
        })
    }

    /// Get the conventional output name for this target.
    pub fn output_name(&self) -> String {
        self.kind.output_name(&self.name)
    }
}

/// Check that a target name is non-empty and well-formed.
///
/// Names must start with an ASCII letter and contain only ASCII letters,
/// digits, and underscores, so they are usable as binary and directory
/// names on every supported platform.
pub fn validate_target_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyTargetName);
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::InvalidTargetName {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_declaration() -> TargetDeclaration {
        TargetDeclaration::editor()
            .with_settings(SettingsVersion::V2)
            .with_modules(["ProceduralLandscape"])
    }

    #[test]
    fn test_create_editor_descriptor() {
        let info = TargetInfo::default();
        let descriptor =
            TargetDescriptor::new("ProceduralLandscapeEditor", &editor_declaration(), &info)
                .unwrap();

        assert_eq!(descriptor.kind, TargetKind::Editor);
        assert_eq!(descriptor.settings_version, SettingsVersion::V2);
        assert_eq!(descriptor.extra_modules, vec!["ProceduralLandscape"]);
    }

    #[test]
    fn test_module_order_preserved() {
        let declaration =
            TargetDeclaration::game().with_modules(["Core", "Terrain", "Audio", "Net"]);
        let descriptor =
            TargetDescriptor::new("MyGame", &declaration, &TargetInfo::default()).unwrap();

        assert_eq!(descriptor.extra_modules, vec!["Core", "Terrain", "Audio", "Net"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let result =
            TargetDescriptor::new("", &TargetDeclaration::default(), &TargetInfo::default());
        assert!(matches!(result, Err(ConfigError::EmptyTargetName)));
    }

    #[test]
    fn test_malformed_name_rejected() {
        for name in ["9Lives", "my-game", "a b", "_hidden"] {
            let result = TargetDescriptor::new(
                name,
                &TargetDeclaration::default(),
                &TargetInfo::default(),
            );
            assert!(
                matches!(result, Err(ConfigError::InvalidTargetName { .. })),
                "expected `{}` to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let declaration =
            TargetDeclaration::editor().with_modules(["Terrain", "Audio", "Terrain"]);
        let result =
            TargetDescriptor::new("MyEditor", &declaration, &TargetInfo::default());

        match result {
            Err(ConfigError::DuplicateModule { target, module }) => {
                assert_eq!(target, "MyEditor");
                assert_eq!(module, "Terrain");
            }
            other => panic!("expected DuplicateModule, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_module_rejected() {
        let declaration = TargetDeclaration::editor().with_modules(["Terrain", ""]);
        let result =
            TargetDescriptor::new("MyEditor", &declaration, &TargetInfo::default());

        match result {
            Err(ConfigError::EmptyModuleName { target, position }) => {
                assert_eq!(target, "MyEditor");
                assert_eq!(position, 1);
            }
            other => panic!("expected EmptyModuleName, got {:?}", other),
        }
    }

    #[test]
    fn test_descriptors_are_independent_values() {
        use crate::core::target_info::Platform;

        let declaration = editor_declaration();
        let info_a = TargetInfo::default();
        let info_b = TargetInfo::default().with_platform(Platform::Win64);

        let a = TargetDescriptor::new("ProceduralLandscapeEditor", &declaration, &info_a).unwrap();
        let mut b =
            TargetDescriptor::new("ProceduralLandscapeEditor", &declaration, &info_b).unwrap();

        // Structurally equal but independently owned.
        assert_eq!(a, b);
        b.extra_modules.push("Extra".to_string());
        assert_eq!(a.extra_modules, vec!["ProceduralLandscape"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_output_names() {
        assert_eq!(TargetKind::Game.output_name("Tides"), "Tides");
        assert_eq!(TargetKind::Editor.output_name("Tides"), "TidesEditor");
        assert_eq!(TargetKind::Client.output_name("Tides"), "TidesClient");
        assert_eq!(TargetKind::Server.output_name("Tides"), "TidesServer");
        assert_eq!(TargetKind::Program.output_name("CookWorker"), "CookWorker");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TargetKind::Editor.includes_editor_data());
        assert!(!TargetKind::Game.includes_editor_data());
        assert!(TargetKind::Server.requires_cooked_content());
        assert!(!TargetKind::Editor.requires_cooked_content());
        assert!(!TargetKind::Program.requires_cooked_content());
    }

    #[test]
    fn test_settings_version_latest() {
        assert_eq!(SettingsVersion::default(), SettingsVersion::latest());
        assert_eq!(SettingsVersion::latest(), SettingsVersion::V2);
    }
}
