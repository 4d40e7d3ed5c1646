//! Command implementations for the Slipway CLI.

pub mod check;
pub mod completions;
pub mod evaluate;
pub mod init;
pub mod list;

use anyhow::Result;
use std::path::PathBuf;

use slipway::core::project::Project;
use slipway::util::diagnostic::suggestions;
use slipway::util::GlobalContext;

/// Locate and load the project descriptor for the current directory.
pub(crate) fn load_project(ctx: &GlobalContext) -> Result<(PathBuf, Project)> {
    let path = ctx.find_project().map_err(|e| {
        anyhow::anyhow!("{}\nhelp: {}", e, suggestions::NO_PROJECT)
    })?;

    let project = Project::load(&path)?;
    Ok((path, project))
}
