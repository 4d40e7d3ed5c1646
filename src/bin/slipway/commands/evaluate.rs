//! `slipway evaluate` command
//!
//! Prints the orchestrator handoff as JSON on stdout. Diagnostics and
//! logging go to stderr so stdout stays machine-readable.

use anyhow::{anyhow, Result};

use crate::cli::EvaluateArgs;
use slipway::core::target_info::{Configuration, Platform, TargetInfo};
use slipway::ops::{evaluate_project, EvaluateOptions};
use slipway::util::diagnostic::emit;
use slipway::util::GlobalContext;

pub fn execute(args: EvaluateArgs, color: bool) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (path, project) = super::load_project(&ctx)?;

    let mut info = TargetInfo::new();
    if let Some(platform) = args.platform {
        info = info.with_platform(platform.parse::<Platform>().map_err(|e| anyhow!(e))?);
    }
    if let Some(configuration) = args.configuration {
        info = info.with_configuration(
            configuration.parse::<Configuration>().map_err(|e| anyhow!(e))?,
        );
    }
    if let Some(architecture) = args.architecture {
        info = info.with_architecture(architecture);
    }

    let opts = EvaluateOptions {
        target: args.target,
        info,
    };

    let evaluation = match evaluate_project(&project, &opts) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            emit(&err.to_diagnostic().with_location(&path), color);
            return Err(err.into());
        }
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&evaluation)?
    } else {
        serde_json::to_string(&evaluation)?
    };
    println!("{}", json);

    Ok(())
}
