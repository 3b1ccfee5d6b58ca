//! Transcript chunks and the position-to-timestamp index.

use super::records::TranscriptChunkRecord;

/// One transcript chunk: a piece of text and its wall-clock start offset.
#[derive(Debug, Clone)]
pub struct TranscriptChunk {
    pub text: String,
    /// Start offset in seconds.
    pub start: f64,
}

/// An ordered sequence of transcript chunks with a derived cumulative
/// position index.
///
/// Positions are measured in characters (Unicode scalars): entry `i` of the
/// index is the total character count of chunk texts `[0, i)`. The array is
/// built once at construction, starts at 0, is non-decreasing and holds one
/// entry per chunk. Lookups use the same unit.
#[derive(Debug, Clone)]
pub struct Transcript {
    chunks: Vec<TranscriptChunk>,
    positions: Vec<usize>,
}

impl Transcript {
    /// Build a transcript and its position index from ordered chunks.
    pub fn new(chunks: Vec<TranscriptChunk>) -> Self {
        let mut positions = Vec::with_capacity(chunks.len());
        let mut total = 0usize;
        for chunk in &chunks {
            positions.push(total);
            total += chunk.text.chars().count();
        }
        Self { chunks, positions }
    }

    /// Build a transcript from raw catalog records.
    pub fn from_records(records: &[TranscriptChunkRecord]) -> Self {
        Self::new(
            records
                .iter()
                .map(|r| TranscriptChunk {
                    text: r.text.clone(),
                    start: r.start,
                })
                .collect(),
        )
    }

    /// The ordered chunks.
    pub fn chunks(&self) -> &[TranscriptChunk] {
        &self.chunks
    }

    /// Number of chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunk texts in order (the embedding corpus for this transcript).
    pub fn texts(&self) -> Vec<String> {
        self.chunks.iter().map(|c| c.text.clone()).collect()
    }

    /// The cumulative position array.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Start offset (seconds) of the chunk enclosing `position`.
    ///
    /// Leftmost binary search: the first chunk whose cumulative position is
    /// at or past `position`, clamped to the valid chunk range. An empty
    /// transcript yields 0.
    pub fn timestamp_at(&self, position: usize) -> f64 {
        if self.chunks.is_empty() {
            return 0.0;
        }
        let idx = self
            .positions
            .partition_point(|&p| p < position)
            .min(self.chunks.len() - 1);
        self.chunks[idx].start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> Transcript {
        Transcript::new(vec![
            TranscriptChunk {
                text: "привет".to_string(), // 6 chars
                start: 0.0,
            },
            TranscriptChunk {
                text: "сегодня лекция".to_string(), // 14 chars
                start: 4.5,
            },
            TranscriptChunk {
                text: "о пределах".to_string(), // 10 chars
                start: 9.0,
            },
        ])
    }

    #[test]
    fn test_position_index_invariants() {
        let t = transcript();
        assert_eq!(t.positions().len(), t.chunk_count());
        assert_eq!(t.positions(), &[0, 6, 20]);
        assert!(t.positions().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(t.positions()[0], 0);
    }

    #[test]
    fn test_position_zero_maps_to_first_chunk() {
        assert_eq!(transcript().timestamp_at(0), 0.0);
    }

    #[test]
    fn test_mid_positions() {
        let t = transcript();
        // First position at or past 3 is 6, the second chunk.
        assert_eq!(t.timestamp_at(3), 4.5);
        assert_eq!(t.timestamp_at(6), 4.5);
        assert_eq!(t.timestamp_at(20), 9.0);
    }

    #[test]
    fn test_out_of_range_clamps_to_last_chunk() {
        let t = transcript();
        assert_eq!(t.timestamp_at(21), 9.0);
        assert_eq!(t.timestamp_at(10_000), 9.0);
    }

    #[test]
    fn test_empty_transcript() {
        let t = Transcript::new(Vec::new());
        assert_eq!(t.chunk_count(), 0);
        assert_eq!(t.timestamp_at(5), 0.0);
    }
}
