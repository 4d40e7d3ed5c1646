//! Implementation of `slipway init`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::project::{generate_default_project, PROJECT_FILE_NAME};
use crate::core::target::validate_target_name;

/// Options for initializing a project descriptor.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project name; also seeds the editor target and module names
    pub name: String,
}

/// Create a project descriptor in an existing directory.
///
/// Returns the path of the descriptor that was written.
pub fn init_project(path: &Path, opts: &InitOptions) -> Result<PathBuf> {
    // The name feeds target names, so it must satisfy the same rules.
    validate_target_name(&opts.name)
        .with_context(|| format!("`{}` is not a valid project name", opts.name))?;

    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    let descriptor_path = path.join(PROJECT_FILE_NAME);
    if descriptor_path.exists() {
        bail!("`{}` already exists in `{}`", PROJECT_FILE_NAME, path.display());
    }

    fs::write(&descriptor_path, generate_default_project(&opts.name))
        .with_context(|| format!("failed to write {}", PROJECT_FILE_NAME))?;

    Ok(descriptor_path)
}
