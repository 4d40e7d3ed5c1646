//! `slipway init` command

use anyhow::{Context, Result};

use crate::cli::InitArgs;
use slipway::ops::{init_project, InitOptions};
use slipway::util::GlobalContext;

pub fn execute(args: InitArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let path = args
        .path
        .map(|p| if p.is_absolute() { p } else { ctx.cwd().join(p) })
        .unwrap_or_else(|| ctx.cwd().to_path_buf());

    let name = match args.name {
        Some(name) => name,
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string())
            .context("could not derive a project name from the directory; pass --name")?,
    };

    let descriptor_path = init_project(&path, &InitOptions { name: name.clone() })?;
    println!("Created `{}` for project `{}`", descriptor_path.display(), name);

    Ok(())
}
