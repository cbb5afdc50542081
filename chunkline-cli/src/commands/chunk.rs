//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{OutputFormatter, TextFormatter};
use crate::CliResult;
use anyhow::Context;
use chunkline_core::{ChunkConfig, ChunkStats, Chunker};
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Split a text file into word-boundary chunks, one escaped line per chunk
#[derive(Debug, Parser)]
#[command(name = "chunks", version, args_override_self = true)]
pub struct ChunkArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file, created or truncated
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Show each chunk on the terminal while chunking
    #[arg(short = 's', long = "show")]
    pub show: bool,

    /// Target chunk length in bytes [default: 128]
    #[arg(short, long, value_name = "BYTES", env = "CHUNKS_TARGET_LEN")]
    pub target: Option<usize>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = file_config.resolve(self.target, self.show)?;

        // The input is loaded in full before the output is touched, so a bad
        // input path never truncates an existing output file.
        let text = FileReader::read_bytes(&self.input)?;

        let file = File::create(&self.output)
            .with_context(|| CliError::OutputFile(self.output.display().to_string()))?;
        let mut sink = TextFormatter::new(BufWriter::new(file));

        let mut echo = settings.echo.then(TextFormatter::stdout);
        let stats = write_chunks(
            &text,
            &settings.chunking,
            &mut sink,
            echo.as_mut().map(|e| e as &mut dyn OutputFormatter),
        )
        .with_context(|| format!("Failed to write chunks to {}", self.output.display()))?;

        log::info!(
            "Wrote {} chunks to {} ({} skipped, {} over target, longest {} bytes, mean {:.1})",
            stats.chunks,
            self.output.display(),
            stats.skipped,
            stats.oversized,
            stats.longest,
            stats.mean_len()
        );

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under a test harness
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

/// Chunk `text` into `sink`, mirroring every line into `echo` when given
pub fn write_chunks(
    text: &[u8],
    config: &ChunkConfig,
    sink: &mut dyn OutputFormatter,
    mut echo: Option<&mut dyn OutputFormatter>,
) -> CliResult<ChunkStats> {
    let mut chunker =
        Chunker::new(text, config).map_err(|e| CliError::ConfigError(e.to_string()))?;

    for chunk in chunker.by_ref() {
        sink.format_chunk(&chunk.text)?;
        if let Some(echo) = echo.as_deref_mut() {
            echo.format_chunk(&chunk.text)?;
        }
    }

    sink.finish()?;
    if let Some(echo) = echo.as_deref_mut() {
        echo.finish()?;
    }

    Ok(*chunker.stats())
}
