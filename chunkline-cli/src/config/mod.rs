//! Configuration module
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! the `CHUNKS_TARGET_LEN` environment variable and command-line flags.

use crate::error::CliError;
use crate::CliResult;
use anyhow::Context;
use chunkline_core::{ChunkConfig, DEFAULT_TARGET_LEN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkingConfig {
    /// Target chunk length in bytes
    pub target_length: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            target_length: DEFAULT_TARGET_LEN,
        }
    }
}

/// Settings for one run, after every layer has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Chunking parameters handed to the core
    pub chunking: ChunkConfig,
    /// Echo every chunk to stdout as well as the output file
    pub echo: bool,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Echo every chunk to the terminal
    pub echo: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Build the run settings, letting explicit overrides win
    pub fn resolve(
        &self,
        target_override: Option<usize>,
        echo_flag: bool,
    ) -> CliResult<RunSettings> {
        let target_len = target_override.unwrap_or(self.chunking.target_length);
        let chunking = ChunkConfig::new(target_len);

        chunking
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(RunSettings {
            chunking,
            echo: echo_flag || self.output.echo,
        })
    }
}
