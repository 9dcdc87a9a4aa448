//! Progress-sink trait for extraction and batch events.
//!
//! Progress reporting and functional output are deliberately separate
//! contracts: the extractor writes markdown through its file handle and
//! narrates what it is doing through a [`ProgressSink`]. The core pipeline
//! is therefore testable without capturing console output, and the CLI can
//! render a progress bar without the library knowing terminals exist.
//!
//! All methods have default no-op implementations so callers only override
//! what they care about. The pipeline is single-threaded, so implementations
//! need no internal synchronisation.

use crate::batch::BatchSummary;
use std::path::Path;

/// Called by the extraction pipeline and batch driver as work proceeds.
pub trait ProgressSink {
    /// Called once per document, after it has been opened.
    fn on_document_start(&self, path: &Path, total_pages: usize) {
        let _ = (path, total_pages);
    }

    /// Called before each chunk of pages is processed.
    ///
    /// `first_page` and `last_page` are 1-based and inclusive — the
    /// human-readable range "pages 11 to 20".
    fn on_chunk_start(&self, first_page: usize, last_page: usize, total_pages: usize) {
        let _ = (first_page, last_page, total_pages);
    }

    /// Called after each page's text has been written to the output.
    fn on_page_done(&self, page_number: usize, total_pages: usize, text_len: usize) {
        let _ = (page_number, total_pages, text_len);
    }

    /// Called once per document after all pages are written.
    fn on_document_complete(&self, output_path: &Path) {
        let _ = output_path;
    }

    /// Called once at the start of a batch run with the document count.
    fn on_batch_start(&self, total_documents: usize) {
        let _ = total_documents;
    }

    /// Called when a document is skipped because its output already exists.
    fn on_document_skipped(&self, path: &Path) {
        let _ = path;
    }

    /// Called when a document's extraction failed; the batch continues.
    fn on_document_failed(&self, path: &Path, reason: &str) {
        let _ = (path, reason);
    }

    /// Called once after every document in the batch has been considered.
    fn on_batch_complete(&self, summary: &BatchSummary) {
        let _ = summary;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn noop_sink_does_not_panic() {
        let sink = NoopProgressSink;
        sink.on_document_start(Path::new("a.pdf"), 5);
        sink.on_chunk_start(1, 5, 5);
        sink.on_page_done(1, 5, 42);
        sink.on_document_complete(Path::new("output/a.md"));
        sink.on_batch_start(3);
        sink.on_document_skipped(Path::new("b.pdf"));
        sink.on_document_failed(Path::new("c.pdf"), "corrupt");
        sink.on_batch_complete(&BatchSummary::default());
    }

    struct RecordingSink {
        chunks: RefCell<Vec<(usize, usize)>>,
        pages: RefCell<Vec<usize>>,
    }

    impl ProgressSink for RecordingSink {
        fn on_chunk_start(&self, first_page: usize, last_page: usize, _total: usize) {
            self.chunks.borrow_mut().push((first_page, last_page));
        }

        fn on_page_done(&self, page_number: usize, _total: usize, _len: usize) {
            self.pages.borrow_mut().push(page_number);
        }
    }

    #[test]
    fn recording_sink_receives_events() {
        let sink = RecordingSink {
            chunks: RefCell::new(Vec::new()),
            pages: RefCell::new(Vec::new()),
        };

        sink.on_chunk_start(1, 10, 25);
        sink.on_page_done(1, 25, 100);
        sink.on_page_done(2, 25, 200);

        assert_eq!(*sink.chunks.borrow(), vec![(1, 10)]);
        assert_eq!(*sink.pages.borrow(), vec![1, 2]);
    }
}
