//! Configuration error taxonomy and diagnostics.
//!
//! Every error here is detected at construction or parse time and is fatal
//! to the current evaluation: it is surfaced immediately, never retried,
//! and never silently recovered. A malformed target must not reach the
//! orchestrator.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Invalid target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("target name is empty")]
    #[diagnostic(code(slipway::config::empty_target_name))]
    EmptyTargetName,

    #[error("malformed target name `{name}`")]
    #[diagnostic(
        code(slipway::config::invalid_target_name),
        help("Target names start with an ASCII letter and use only letters, digits, and `_`")
    )]
    InvalidTargetName { name: String },

    #[error("target `{target}` declares an empty module name")]
    #[diagnostic(code(slipway::config::empty_module_name))]
    EmptyModuleName { target: String, position: usize },

    #[error("target `{target}` declares module `{module}` more than once")]
    #[diagnostic(code(slipway::config::duplicate_module))]
    DuplicateModule { target: String, module: String },

    #[error("duplicate target `{name}` in project descriptor")]
    #[diagnostic(code(slipway::config::duplicate_target))]
    DuplicateTarget { name: String },

    #[error("no target named `{name}`")]
    #[diagnostic(code(slipway::config::target_not_found))]
    TargetNotFound { name: String, available: Vec<String> },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::EmptyTargetName => {
                Diagnostic::error("target name is empty")
                    .with_suggestion("Give every [targets.<name>] table a non-empty name")
            }

            ConfigError::InvalidTargetName { name } => {
                Diagnostic::error(format!("malformed target name `{}`", name))
                    .with_context(
                        "names start with an ASCII letter and use only letters, digits, and `_`",
                    )
                    .with_suggestion(format!(
                        "Rename the target, e.g. `{}`",
                        sanitize_name(name)
                    ))
            }

            ConfigError::EmptyModuleName { target, position } => {
                Diagnostic::error(format!(
                    "target `{}` declares an empty module name",
                    target
                ))
                .with_context(format!("entry {} of `modules` is the empty string", position + 1))
                .with_suggestion("Remove the empty entry or fill in the module name")
            }

            ConfigError::DuplicateModule { target, module } => {
                Diagnostic::error(format!(
                    "target `{}` declares module `{}` more than once",
                    target, module
                ))
                .with_context("each module is linked exactly once; the list must be duplicate-free")
                .with_suggestion(format!("Remove the repeated `{}` entry", module))
            }

            ConfigError::DuplicateTarget { name } => {
                Diagnostic::error(format!("duplicate target `{}` in project descriptor", name))
                    .with_suggestion("Rename one of the targets; names must be unique")
            }

            ConfigError::TargetNotFound { name, available } => {
                let mut diag = Diagnostic::error(format!("no target named `{}`", name));
                if !available.is_empty() {
                    diag = diag.with_context(format!(
                        "declared targets: {}",
                        available.join(", ")
                    ));
                }
                diag.with_suggestion(suggestions::TARGET_NOT_FOUND)
            }
        }
    }
}

/// Best-effort fix-up of a malformed name, used only in suggestions.
fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    match cleaned.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => cleaned,
        _ => format!("T{}", cleaned),
    }
}
