//! CLI command implementations

pub mod chunk;

pub use chunk::{write_chunks, ChunkArgs};
