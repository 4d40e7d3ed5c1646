//! The opaque context the orchestrator supplies when evaluating a target.
//!
//! Target rules receive a `TargetInfo` describing the platform and build
//! configuration being evaluated. The descriptors this crate produces do
//! not currently branch on it, but the contract requires it and the
//! evaluation output records it so the orchestrator can correlate results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The platform a target is being evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// 64-bit Windows
    #[serde(alias = "windows")]
    Win64,
    Linux,
    #[serde(alias = "macos")]
    Mac,
}

impl Platform {
    /// The platform of the machine running the evaluation.
    pub fn host() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Win64,
            "macos" => Platform::Mac,
            _ => Platform::Linux,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win64 => "win64",
            Platform::Linux => "linux",
            Platform::Mac => "mac",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win64" | "windows" => Ok(Platform::Win64),
            "linux" => Ok(Platform::Linux),
            "mac" | "macos" => Ok(Platform::Mac),
            other => Err(format!(
                "unknown platform `{}` (expected win64, linux, or mac)",
                other
            )),
        }
    }
}

/// The build configuration a target is being evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    /// Full debug information, no optimization
    Debug,
    /// Optimized with debug conveniences (default for day-to-day work)
    Development,
    /// Fully optimized, no debug facilities
    Shipping,
}

impl Configuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Debug => "debug",
            Configuration::Development => "development",
            Configuration::Shipping => "shipping",
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::Development
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Configuration::Debug),
            "development" => Ok(Configuration::Development),
            "shipping" => Ok(Configuration::Shipping),
            other => Err(format!(
                "unknown configuration `{}` (expected debug, development, or shipping)",
                other
            )),
        }
    }
}

/// Orchestrator-supplied evaluation context.
///
/// Every field has a default, so `TargetInfo::default()` models an
/// orchestrator that passes no context at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Platform being evaluated
    #[serde(default)]
    pub platform: Platform,

    /// Build configuration being evaluated
    #[serde(default)]
    pub configuration: Configuration,

    /// CPU architecture, when the orchestrator pins one
    #[serde(default)]
    pub architecture: Option<String>,
}

impl TargetInfo {
    /// Context for the host platform with default configuration.
    pub fn new() -> Self {
        TargetInfo::default()
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the build configuration.
    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Set the CPU architecture.
    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.architecture = Some(architecture.into());
        self
    }
}
