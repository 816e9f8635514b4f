//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values for the step budget and load origin.
//! 2. **Structures:** A small hierarchy of `general` and `image` settings.
//! 3. **Parsing:** JSON deserialization with validation.
//!
//! Every field has a default, so `{}` is a complete configuration and
//! `Config::default()` is equivalent to parsing it.

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::MEMORY_WORDS;

/// Default configuration constants for the simulator.
mod defaults {
    /// Step budget for a run (10 000 instructions).
    ///
    /// Large enough for any loop that fits in 256 words of straight-line
    /// initialization plus a few dozen iterations; small enough to stop an
    /// infinite loop quickly.
    pub const MAX_STEPS: u64 = crate::common::constants::DEFAULT_MAX_STEPS;

    /// Load origin for images (word address `$00`).
    pub const ORIGIN: u16 = 0x00;
}

/// Errors produced while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The text is not valid JSON for the configuration schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured origin does not name a memory word.
    #[error("image origin {0:#x} is outside memory")]
    OriginOutOfRange(u16),
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use accsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, 10_000);
/// assert_eq!(config.image.origin, 0);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use accsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 500 },
///     "image": { "origin": 16 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, 500);
/// assert_eq!(config.image.origin, 0x10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Program image placement
    #[serde(default)]
    pub image: ImageConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON or unknown value types and
    /// `ConfigError::OriginOutOfRange` if the origin is not a memory address.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::OriginOutOfRange` if the origin is not a memory address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.origin as usize >= MEMORY_WORDS {
            return Err(ConfigError::OriginOutOfRange(self.image.origin));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Emit a trace event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Maximum number of instructions a run may execute before giving up.
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,
}

impl GeneralConfig {
    /// Returns the default step budget.
    const fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_steps: defaults::MAX_STEPS,
        }
    }
}

/// Program image placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageConfig {
    /// Word address the image is copied to; execution starts here.
    #[serde(default = "ImageConfig::default_origin")]
    pub origin: u16,
}

impl ImageConfig {
    /// Returns the default load origin.
    const fn default_origin() -> u16 {
        defaults::ORIGIN
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            origin: defaults::ORIGIN,
        }
    }
}
