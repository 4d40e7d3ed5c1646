//! Core data structures for Slipway.
//!
//! This module contains the foundational types used throughout Slipway:
//! - Target descriptors and their closed enumerations
//! - The opaque orchestrator context (`TargetInfo`)
//! - Project descriptor parsing
//! - The configuration error taxonomy

pub mod errors;
pub mod project;
pub mod target;
pub mod target_info;

pub use errors::ConfigError;
pub use project::{
    find_project, Project, ProjectError, ProjectMetadata, PROJECT_FILE_NAME,
};
pub use target::{SettingsVersion, TargetDeclaration, TargetDescriptor, TargetKind};
pub use target_info::{Configuration, Platform, TargetInfo};
