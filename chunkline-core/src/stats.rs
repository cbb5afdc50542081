//! Running statistics for a chunking pass

/// Counters collected while chunking one text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkStats {
    /// Chunks emitted
    pub chunks: usize,
    /// Candidates dropped because only whitespace remained
    pub skipped: usize,
    /// Source bytes consumed so far
    pub input_bytes: usize,
    /// Escaped bytes emitted, newlines excluded
    pub output_bytes: usize,
    /// Length of the longest escaped line
    pub longest: usize,
    /// Chunks longer than the target before escaping
    pub oversized: usize,
}

impl ChunkStats {
    pub(crate) fn record_chunk(&mut self, unescaped_len: usize, line_len: usize, target: usize) {
        self.chunks += 1;
        self.output_bytes += line_len;
        self.longest = self.longest.max(line_len);
        if unescaped_len > target {
            self.oversized += 1;
        }
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Average escaped line length, or 0 when nothing was emitted
    pub fn mean_len(&self) -> f64 {
        if self.chunks == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.chunks as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_chunk() {
        let mut stats = ChunkStats::default();
        stats.record_chunk(5, 5, 5);
        stats.record_chunk(9, 11, 5);
        stats.record_skip();

        assert_eq!(stats.chunks, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.output_bytes, 16);
        assert_eq!(stats.longest, 11);
        assert_eq!(stats.oversized, 1);
        assert_eq!(stats.mean_len(), 8.0);
    }

    #[test]
    fn test_mean_len_empty() {
        assert_eq!(ChunkStats::default().mean_len(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_flat_object() {
        let mut stats = ChunkStats::default();
        stats.record_chunk(3, 3, 128);

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["chunks"], 1);
        assert_eq!(json["longest"], 3);
        assert_eq!(json["oversized"], 0);
    }
}
