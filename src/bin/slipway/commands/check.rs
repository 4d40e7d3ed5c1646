//! `slipway check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use slipway::ops::check_project;
use slipway::util::diagnostic::{emit, suggestions, Diagnostic};
use slipway::util::GlobalContext;

pub fn execute(_args: CheckArgs, color: bool) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (path, project) = super::load_project(&ctx)?;

    if project.is_empty() {
        emit(
            &Diagnostic::warning("descriptor declares no targets").with_location(&path),
            color,
        );
    }

    let errors = check_project(&project);
    if errors.is_empty() {
        println!(
            "ok: {} target(s) validated in `{}`",
            project.len(),
            path.display()
        );
        return Ok(());
    }

    for err in &errors {
        emit(&err.to_diagnostic().with_location(&path), color);
    }

    bail!(
        "{} invalid target(s)\nhelp: {}",
        errors.len(),
        suggestions::CHECK_FAILED
    );
}
