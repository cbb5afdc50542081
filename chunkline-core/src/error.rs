//! Error types for chunking
//!
//! The chunking algorithm itself is total over all byte sequences; the only
//! failure it can report is a configuration it cannot run with.

use thiserror::Error;

/// Chunking errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Target length that can never produce progress
    #[error("invalid target length {len}: must be at least 1")]
    InvalidTargetLength {
        /// The rejected target length
        len: usize,
    },
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
