//! Batch Driver: apply the page extractor across a directory of PDFs.
//!
//! The one genuine design decision in this crate lives here: extraction
//! errors are fatal in isolation but recoverable in aggregate. A single
//! corrupt or missing PDF must never halt a multi-document batch, so every
//! [`RipError`] raised by [`extract_to_markdown`] is caught, logged with the
//! offending document, tallied as a `Failed` outcome, and the loop moves on.
//! Only conditions that make the whole batch meaningless — a missing input
//! directory, an uncreatable output directory — propagate out.
//!
//! Skip/resume: when `skip_existing` is set, a document whose target output
//! file already exists is not reprocessed. Rerunning an interrupted batch
//! therefore only touches unfinished books.

use crate::config::{BatchConfig, ExtractionConfig};
use crate::error::RipError;
use crate::extract::extract_to_markdown;
use crate::ocr::TextRecognizer;
use crate::progress::ProgressSink;
use crate::render::PageRenderer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one document in a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemOutcome {
    /// Extracted successfully in this run.
    Processed,
    /// Output already existed and `skip_existing` was set.
    Skipped,
    /// Extraction raised an error; other documents were unaffected.
    Failed,
}

/// Aggregate counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    /// Total documents considered.
    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }

    fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Processed => self.processed += 1,
            ItemOutcome::Skipped => self.skipped += 1,
            ItemOutcome::Failed => self.failed += 1,
        }
    }
}

/// Process every PDF directly under `batch.books_dir`, writing one markdown
/// file per document into `batch.output_dir`.
///
/// Documents are visited in case-insensitive filename order. An empty
/// directory is not an error — it yields an empty summary.
///
/// # Errors
/// * [`RipError::InvalidConfig`] — `config.pages_per_chunk` is zero
/// * [`RipError::BooksDirNotFound`] — the input directory does not exist
/// * [`RipError::DirReadFailed`] — the input directory cannot be listed
/// * [`RipError::OutputWriteFailed`] — the output directory cannot be created
///
/// Per-document extraction failures are *not* errors of this function; they
/// surface as `failed` counts in the returned [`BatchSummary`].
pub fn process_batch(
    batch: &BatchConfig,
    config: &ExtractionConfig,
    renderer: &dyn PageRenderer,
    ocr: &dyn TextRecognizer,
    progress: &dyn ProgressSink,
) -> Result<BatchSummary, RipError> {
    // Reject a broken config up front rather than failing every document.
    if config.pages_per_chunk == 0 {
        return Err(RipError::InvalidConfig(
            "pages_per_chunk must be >= 1".into(),
        ));
    }

    let pdfs = list_pdfs(&batch.books_dir)?;
    if pdfs.is_empty() {
        info!("No PDF files found in {}", batch.books_dir.display());
        return Ok(BatchSummary::default());
    }

    fs::create_dir_all(&batch.output_dir).map_err(|e| RipError::OutputWriteFailed {
        path: batch.output_dir.clone(),
        source: e,
    })?;

    info!(
        "Batch: {} PDF(s) in {} -> {}",
        pdfs.len(),
        batch.books_dir.display(),
        batch.output_dir.display()
    );
    progress.on_batch_start(pdfs.len());

    let mut summary = BatchSummary::default();
    for pdf_path in &pdfs {
        let stem = pdf_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let output_path = batch.output_dir.join(format!("{stem}.md"));

        if batch.skip_existing && output_path.exists() {
            info!("Skipping {} (output exists)", pdf_path.display());
            progress.on_document_skipped(pdf_path);
            summary.record(ItemOutcome::Skipped);
            continue;
        }

        match extract_to_markdown(pdf_path, &output_path, config, renderer, ocr, progress) {
            Ok(_) => summary.record(ItemOutcome::Processed),
            Err(e) => {
                warn!("Failed to process {}: {}", pdf_path.display(), e);
                progress.on_document_failed(pdf_path, &e.to_string());
                summary.record(ItemOutcome::Failed);
            }
        }
    }

    info!(
        "Batch complete: {} processed, {} skipped, {} failed, {} total",
        summary.processed,
        summary.skipped,
        summary.failed,
        summary.total()
    );
    progress.on_batch_complete(&summary);

    Ok(summary)
}

/// List the `.pdf` files directly under `dir`, sorted case-insensitively
/// by filename. Non-recursive; subdirectories are ignored.
fn list_pdfs(dir: &Path) -> Result<Vec<PathBuf>, RipError> {
    if !dir.is_dir() {
        return Err(RipError::BooksDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = fs::read_dir(dir).map_err(|e| RipError::DirReadFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut pdfs: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RipError::DirReadFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let is_pdf = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            pdfs.push(path);
        }
    }

    pdfs.sort_by_key(|p| {
        p.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });
    Ok(pdfs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_records_and_totals() {
        let mut s = BatchSummary::default();
        s.record(ItemOutcome::Processed);
        s.record(ItemOutcome::Processed);
        s.record(ItemOutcome::Skipped);
        s.record(ItemOutcome::Failed);
        assert_eq!(s.processed, 2);
        assert_eq!(s.skipped, 1);
        assert_eq!(s.failed, 1);
        assert_eq!(s.total(), 4);
    }

    #[test]
    fn list_pdfs_filters_and_sorts_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["Zebra.PDF", "alpha.pdf", "notes.txt", "Middle.pdf"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let pdfs = list_pdfs(dir.path()).unwrap();
        let names: Vec<String> = pdfs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha.pdf", "Middle.pdf", "Zebra.PDF"]);
    }

    #[test]
    fn missing_books_dir_is_an_error() {
        let err = list_pdfs(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, RipError::BooksDirNotFound { .. }));
    }
}
