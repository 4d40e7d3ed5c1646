//! `slipway list` command

use anyhow::Result;

use crate::cli::ListArgs;
use slipway::util::GlobalContext;

pub fn execute(args: ListArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (path, project) = super::load_project(&ctx)?;

    println!(
        "{} v{} ({})",
        project.metadata.name,
        project.metadata.version,
        path.display()
    );

    if project.is_empty() {
        println!("  (no targets declared)");
        return Ok(());
    }

    for (name, declaration) in project.targets() {
        println!(
            "  {} [{} / {}]",
            name,
            declaration.kind,
            declaration.settings_version
        );

        if args.modules {
            for module in &declaration.modules {
                println!("    - {}", module);
            }
        }
    }

    Ok(())
}
