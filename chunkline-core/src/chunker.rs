//! Chunking driver
//!
//! [`Chunker`] walks a text from start to end. Each step asks the boundary
//! finder where the next chunk ends, trims trailing whitespace off that
//! candidate, sanitizes it, and then moves the cursor past the split point
//! and any whitespace run that follows. Whitespace-only candidates are
//! consumed without producing a chunk.

use crate::{
    boundary::find_split_point,
    config::ChunkConfig,
    error::Result,
    sanitize::sanitize,
    stats::ChunkStats,
    whitespace::{skip_spaces, trim_end, trim_start},
};
use std::iter::FusedIterator;

/// One sanitized output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Cursor position where the candidate started
    pub offset: usize,
    /// Split length before trailing whitespace was trimmed
    pub consumed: usize,
    /// Escaped line, without a newline terminator
    pub text: Vec<u8>,
}

/// Iterator over the chunks of a text
#[derive(Debug, Clone)]
pub struct Chunker<'a> {
    text: &'a [u8],
    target_len: usize,
    cursor: usize,
    stats: ChunkStats,
}

impl<'a> Chunker<'a> {
    /// Create a chunker over `text`
    pub fn new(text: &'a [u8], config: &ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            text,
            target_len: config.target_len,
            cursor: 0,
            stats: ChunkStats::default(),
        })
    }

    /// Offset of the first unconsumed byte
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the whole text has been consumed
    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Statistics for the chunks produced so far
    pub fn stats(&self) -> &ChunkStats {
        &self.stats
    }
}

impl Iterator for Chunker<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        while !self.is_done() {
            let start = self.cursor;
            let remaining = &self.text[start..];

            let mut split = find_split_point(remaining, self.target_len);
            if split == 0 {
                split = remaining.len();
            }

            let candidate = trim_end(&remaining[..split]);

            // Advance by the untrimmed split; the trimmed tail is whitespace
            // and gets swallowed by the skip anyway.
            self.cursor = skip_spaces(self.text, start + split);
            self.stats.input_bytes = self.cursor;

            match sanitize(candidate) {
                None => {
                    log::debug!(
                        "skipping whitespace-only candidate at {start}..{}",
                        start + split
                    );
                    self.stats.record_skip();
                }
                Some(line) => {
                    let unescaped_len = trim_start(candidate).len();
                    self.stats
                        .record_chunk(unescaped_len, line.len(), self.target_len);
                    log::trace!(
                        "chunk at {start}: split {split}, {} bytes escaped",
                        line.len()
                    );
                    return Some(Chunk {
                        offset: start,
                        consumed: split,
                        text: line,
                    });
                }
            }
        }
        None
    }
}

impl FusedIterator for Chunker<'_> {}

/// Chunk a whole text into a vector
pub fn chunk_text(text: &[u8], config: &ChunkConfig) -> Result<Vec<Chunk>> {
    Ok(Chunker::new(text, config)?.collect())
}
