//! Word-boundary text chunking for embedding pipelines
//!
//! This crate splits a fully loaded text into bounded-length, single-line
//! chunks. Each chunk ends on a whitespace boundary close to a target length,
//! has its line breaks flattened to spaces, and has `"` and `\` escaped so the
//! line can be dropped straight into a quoted string of a larger document.
//!
//! The pieces are pure functions over bytes:
//!
//! - [`find_split_point`] picks where the next chunk ends
//! - [`sanitize`] flattens, trims and escapes a candidate chunk
//! - [`Chunker`] drives both over a text as an iterator of [`Chunk`]s
//!
//! ```
//! use chunkline_core::{chunk_text, ChunkConfig};
//!
//! let chunks = chunk_text(b"hello world", &ChunkConfig::new(5)).unwrap();
//! let lines: Vec<&[u8]> = chunks.iter().map(|c| c.text.as_slice()).collect();
//! assert_eq!(lines, vec![&b"hello"[..], &b"world"[..]]);
//! ```

#![warn(missing_docs)]

pub mod boundary;
pub mod chunker;
pub mod config;
pub mod error;
pub mod sanitize;
pub mod stats;
pub mod whitespace;

// Re-export key types
pub use boundary::find_split_point;
pub use chunker::{chunk_text, Chunk, Chunker};
pub use config::{ChunkConfig, DEFAULT_TARGET_LEN};
pub use error::{ChunkError, Result};
pub use sanitize::{escaped_len, sanitize, unescape};
pub use stats::ChunkStats;
