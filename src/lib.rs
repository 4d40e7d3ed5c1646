//! Slipway - build-target rules for game-engine projects
//!
//! This crate provides the core library functionality for Slipway,
//! including target-rules declaration, validation, and evaluation into
//! the descriptors an external build orchestrator consumes.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::errors::ConfigError;
pub use crate::core::project::Project;
pub use crate::core::target::{SettingsVersion, TargetDeclaration, TargetDescriptor, TargetKind};
pub use crate::core::target_info::{Configuration, Platform, TargetInfo};
pub use crate::util::context::GlobalContext;
