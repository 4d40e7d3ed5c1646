//! Global context for Slipway operations.
//!
//! Centralizes the working directory, verbosity, and color settings, and
//! knows how to locate the project descriptor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::project::{find_project, ProjectError};

/// Global context containing paths and output settings.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        Ok(GlobalContext {
            cwd,
            verbose: false,
            color: true,
        })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Find the project descriptor, starting from cwd and searching upward.
    pub fn find_project(&self) -> Result<PathBuf, ProjectError> {
        let mut current = self.cwd.clone();
        loop {
            match find_project(&current) {
                Ok(path) => return Ok(path),
                Err(ProjectError::NotFound { .. }) => {
                    if !current.pop() {
                        return Err(ProjectError::NotFound {
                            dir: self.cwd.clone(),
                        });
                    }
                }
            }
        }
    }

    /// Find the project root (directory containing Slipway.toml).
    pub fn find_project_root(&self) -> Result<PathBuf, ProjectError> {
        self.find_project()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new().expect("failed to create default GlobalContext")
    }
}
