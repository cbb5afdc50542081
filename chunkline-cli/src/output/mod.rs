//! Output formatting module

use crate::CliResult;

/// Trait for chunk sinks
pub trait OutputFormatter: Send + Sync {
    /// Write a single sanitized chunk
    fn format_chunk(&mut self, chunk: &[u8]) -> CliResult<()>;

    /// Finalize output (flush buffered writes)
    fn finish(&mut self) -> CliResult<()>;
}

pub mod text;

pub use text::TextFormatter;
