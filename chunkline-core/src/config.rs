//! Configuration types for chunking

use crate::error::{ChunkError, Result};

/// Default target chunk length in bytes
pub const DEFAULT_TARGET_LEN: usize = 128;

/// Chunking configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkConfig {
    /// Desired chunk length; actual chunks end on the nearest whitespace
    pub target_len: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            target_len: DEFAULT_TARGET_LEN,
        }
    }
}

impl ChunkConfig {
    /// Create a configuration with the given target length
    pub fn new(target_len: usize) -> Self {
        Self { target_len }
    }

    /// Check that the configuration can make progress
    pub fn validate(&self) -> Result<()> {
        if self.target_len == 0 {
            return Err(ChunkError::InvalidTargetLength {
                len: self.target_len,
            });
        }
        Ok(())
    }
}
