//! Configuration Module
//!
//! This module defines all configuration structures for the order deriver.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::policy::BatchSizePolicy;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "127.0.0.1"
/// port = 8080
///
/// [input]
/// path = "data/input.json"
///
/// [policy]
/// default = "minimum"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub input: InputConfig,
    pub policy: PolicyConfig,
}

/// API server configuration
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on (e.g., 8080)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Predefined input configuration
///
/// `path` points at the JSON payload the board starts with.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: String,
}

/// Batch size policy configuration
///
/// `default` applies when neither the caller nor the payload's
/// `useMaximumBatchSize` flag chooses a policy. It has no implicit value
/// and must be set to `"minimum"` or `"maximum"`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    pub default: BatchSizePolicy,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Read the predefined input payload named by `input.path`
    ///
    /// The text is returned as-is; it is parsed on each derivation.
    pub fn load_input(&self) -> anyhow::Result<String> {
        Ok(fs::read_to_string(&self.input.path)?)
    }
}
