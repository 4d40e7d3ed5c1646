//! Implementation of `slipway check`.

use crate::core::errors::ConfigError;
use crate::core::project::Project;
use crate::core::target::TargetDescriptor;
use crate::core::target_info::TargetInfo;

/// Validate every declared target, collecting all errors instead of
/// stopping at the first one.
///
/// Construction against a default context exercises the same validation an
/// evaluation would, so anything that passes here cannot fail later for
/// configuration reasons.
pub fn check_project(project: &Project) -> Vec<ConfigError> {
    let info = TargetInfo::default();
    let mut errors = Vec::new();

    for (name, declaration) in project.targets() {
        if let Err(err) = TargetDescriptor::new(name, declaration, &info) {
            tracing::debug!(target_name = name, error = %err, "target failed validation");
            errors.push(err);
        }
    }

    errors
}
