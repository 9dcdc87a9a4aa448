//! Page chunking: partition a document's pages into progress-report ranges.
//!
//! Chunks exist only for reporting cadence. They partition `[0, total_pages)`
//! exactly — no gaps, no overlaps, ascending order — so iterating chunks and
//! then pages within each chunk visits every page index exactly once, in
//! ascending order. Every chunk has `pages_per_chunk` pages except possibly
//! the last.

use std::ops::Range;

/// A contiguous run of zero-based page indices, half-open (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChunk {
    pub start: usize,
    pub end: usize,
}

impl PageChunk {
    /// Number of pages in this chunk.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Zero-based page indices covered by this chunk.
    pub fn pages(&self) -> Range<usize> {
        self.start..self.end
    }

    /// First page of the chunk as a 1-based, human-readable page number.
    pub fn first_page(&self) -> usize {
        self.start + 1
    }

    /// Last page of the chunk as a 1-based, inclusive page number.
    pub fn last_page(&self) -> usize {
        self.end
    }
}

/// Partition `[0, total_pages)` into chunks of `pages_per_chunk` pages.
///
/// `pages_per_chunk` must be ≥ 1; [`crate::config::ExtractionConfigBuilder`]
/// and the extraction entry points both reject zero before it can reach
/// here. Zero pages yields zero chunks.
pub fn chunks(total_pages: usize, pages_per_chunk: usize) -> Vec<PageChunk> {
    debug_assert!(pages_per_chunk > 0, "pages_per_chunk must be >= 1");

    let mut out = Vec::with_capacity(total_pages.div_ceil(pages_per_chunk));
    let mut start = 0;
    while start < total_pages {
        let end = (start + pages_per_chunk).min(total_pages);
        out.push(PageChunk { start, end });
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chunks must union to exactly `[0, total)` with no gaps or overlaps,
    /// in ascending order, and only the last chunk may be short.
    fn assert_partition(total: usize, per_chunk: usize) {
        let cs = chunks(total, per_chunk);
        let mut expected_start = 0;
        for (i, c) in cs.iter().enumerate() {
            assert_eq!(c.start, expected_start, "gap or overlap at chunk {i}");
            assert!(c.start < c.end, "empty chunk {i}");
            if i + 1 < cs.len() {
                assert_eq!(c.len(), per_chunk, "non-final chunk {i} is short");
            } else {
                assert!(c.len() <= per_chunk);
            }
            expected_start = c.end;
        }
        assert_eq!(expected_start, total, "chunks do not cover all pages");
    }

    #[test]
    fn partitions_exactly() {
        for total in [0, 1, 2, 9, 10, 11, 25, 100] {
            for per_chunk in [1, 2, 3, 10, 1000] {
                assert_partition(total, per_chunk);
            }
        }
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let cs = chunks(20, 10);
        assert_eq!(cs.len(), 2);
        assert_eq!(cs[0], PageChunk { start: 0, end: 10 });
        assert_eq!(cs[1], PageChunk { start: 10, end: 20 });
    }

    #[test]
    fn last_chunk_may_be_short() {
        let cs = chunks(25, 10);
        assert_eq!(cs.len(), 3);
        assert_eq!(cs[2], PageChunk { start: 20, end: 25 });
        assert_eq!(cs[2].len(), 5);
    }

    #[test]
    fn zero_pages_yields_no_chunks() {
        assert!(chunks(0, 10).is_empty());
    }

    #[test]
    fn human_readable_range_is_one_based_inclusive() {
        let cs = chunks(25, 10);
        assert_eq!((cs[0].first_page(), cs[0].last_page()), (1, 10));
        assert_eq!((cs[1].first_page(), cs[1].last_page()), (11, 20));
        assert_eq!((cs[2].first_page(), cs[2].last_page()), (21, 25));
    }

    #[test]
    fn chunk_larger_than_document() {
        let cs = chunks(3, 10);
        assert_eq!(cs, vec![PageChunk { start: 0, end: 3 }]);
    }
}
