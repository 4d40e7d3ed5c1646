//! Implementation of `slipway evaluate`.
//!
//! Evaluation resolves declared targets into descriptors for a given
//! orchestrator context. Each invocation produces independently owned
//! descriptors; nothing is cached or shared between evaluations.

use serde::Serialize;

use crate::core::errors::ConfigError;
use crate::core::project::Project;
use crate::core::target::TargetDescriptor;
use crate::core::target_info::TargetInfo;

/// Options for an evaluation run.
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    /// Evaluate only this target (all targets when absent)
    pub target: Option<String>,

    /// Orchestrator context to evaluate against
    pub info: TargetInfo,
}

/// The orchestrator handoff: every resolved target plus the context it was
/// resolved for.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Project name
    pub project: String,

    /// The context the targets were evaluated against
    pub context: TargetInfo,

    /// Resolved targets, in the project's declaration order
    pub targets: Vec<TargetDescriptor>,
}

/// Resolve one declared target into a descriptor.
pub fn evaluate_target(
    project: &Project,
    name: &str,
    info: &TargetInfo,
) -> Result<TargetDescriptor, ConfigError> {
    let declaration = project
        .target(name)
        .ok_or_else(|| ConfigError::TargetNotFound {
            name: name.to_string(),
            available: project.target_names(),
        })?;

    tracing::debug!(target_name = name, platform = %info.platform, "evaluating target");
    TargetDescriptor::new(name, declaration, info)
}

/// Resolve the requested targets of a project into an `Evaluation`.
pub fn evaluate_project(
    project: &Project,
    opts: &EvaluateOptions,
) -> Result<Evaluation, ConfigError> {
    let targets = match &opts.target {
        Some(name) => vec![evaluate_target(project, name, &opts.info)?],
        None => {
            let mut targets = Vec::with_capacity(project.len());
            for (name, _) in project.targets() {
                targets.push(evaluate_target(project, name, &opts.info)?);
            }
            targets
        }
    };

    Ok(Evaluation {
        project: project.metadata.name.clone(),
        context: opts.info.clone(),
        targets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::{generate_default_project, PROJECT_FILE_NAME};
    use crate::core::target::{SettingsVersion, TargetKind};
    use crate::core::target_info::Platform;
    use std::path::Path;

    fn demo_project() -> Project {
        let content = generate_default_project("ProceduralLandscape");
        Project::parse(&content, Path::new(PROJECT_FILE_NAME)).unwrap()
    }

    #[test]
    fn test_evaluate_shipped_shape() {
        let project = demo_project();
        let evaluation = evaluate_project(&project, &EvaluateOptions::default()).unwrap();

        assert_eq!(evaluation.project, "ProceduralLandscape");
        assert_eq!(evaluation.targets.len(), 1);

        let target = &evaluation.targets[0];
        assert_eq!(target.name, "ProceduralLandscapeEditor");
        assert_eq!(target.kind, TargetKind::Editor);
        assert_eq!(target.settings_version, SettingsVersion::V2);
        assert_eq!(target.extra_modules, vec!["ProceduralLandscape"]);
    }

    #[test]
    fn test_evaluate_unknown_target() {
        let project = demo_project();
        let opts = EvaluateOptions {
            target: Some("Missing".to_string()),
            ..Default::default()
        };

        match evaluate_project(&project, &opts) {
            Err(ConfigError::TargetNotFound { name, available }) => {
                assert_eq!(name, "Missing");
                assert_eq!(available, vec!["ProceduralLandscapeEditor"]);
            }
            other => panic!("expected TargetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_evaluations_are_equal_but_independent() {
        let project = demo_project();
        let opts = EvaluateOptions::default();

        let first = evaluate_project(&project, &opts).unwrap();
        let mut second = evaluate_project(&project, &opts).unwrap();

        assert_eq!(first.targets, second.targets);
        second.targets[0].extra_modules.clear();
        assert_eq!(first.targets[0].extra_modules, vec!["ProceduralLandscape"]);
    }

    #[test]
    fn test_context_recorded_in_output() {
        let project = demo_project();
        let opts = EvaluateOptions {
            target: None,
            info: TargetInfo::new().with_platform(Platform::Win64),
        };

        let evaluation = evaluate_project(&project, &opts).unwrap();
        assert_eq!(evaluation.context.platform, Platform::Win64);
    }

    #[test]
    fn test_evaluation_serializes_to_json() {
        let project = demo_project();
        let evaluation = evaluate_project(&project, &EvaluateOptions::default()).unwrap();

        let json = serde_json::to_value(&evaluation).unwrap();
        assert_eq!(json["project"], "ProceduralLandscape");
        assert_eq!(json["targets"][0]["kind"], "editor");
        assert_eq!(json["targets"][0]["settings_version"], "v2");
        assert_eq!(json["targets"][0]["extra_modules"][0], "ProceduralLandscape");
    }
}
