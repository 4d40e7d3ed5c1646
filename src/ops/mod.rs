//! High-level operations.
//!
//! This module contains the implementation of Slipway commands.

pub mod check;
pub mod evaluate;
pub mod init;

pub use check::check_project;
pub use evaluate::{evaluate_project, evaluate_target, EvaluateOptions, Evaluation};
pub use init::{init_project, InitOptions};
