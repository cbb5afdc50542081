//! Chunkline CLI library
//!
//! This library provides the command-line interface for the chunkline
//! text chunker: argument parsing, configuration layering, file input and
//! line output around [`chunkline_core`].

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
