//! Page Extractor: one PDF in, one markdown file out.
//!
//! The per-document pipeline. Pages are rasterised at `dpi / 72` scale, fed
//! through the OCR engine, and appended to the output file in strictly
//! ascending page order. Pages are grouped into chunks purely for progress
//! reporting; chunking never reorders or drops pages.
//!
//! Every page is always rasterised and OCR'd, even when the PDF carries an
//! embedded text layer. Scanned books are the target workload and uniform
//! handling keeps the output format identical across mixed inputs.
//!
//! Error policy: within one document nothing is recovered. The first render,
//! OCR, or write failure aborts that document and propagates, leaving any
//! partially written output in place. [`crate::batch::process_batch`] is the
//! layer that isolates such failures across documents.

use crate::chunk::chunks;
use crate::config::ExtractionConfig;
use crate::error::RipError;
use crate::markdown;
use crate::ocr::TextRecognizer;
use crate::progress::ProgressSink;
use crate::render::PageRenderer;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// What one successful extraction did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Total pages in the source document (all were extracted).
    pub total_pages: usize,
    /// Wall-clock time for the whole document, rendering and OCR included.
    pub duration_ms: u64,
}

/// Extract every page of `pdf_path` to markdown at `output_path`.
///
/// Writes the document header, then one `## Page N` section per page in
/// ascending order, each flushed to disk as soon as its OCR text is ready.
/// A zero-page document produces a header-only file and succeeds.
///
/// The document handle is scoped to this call and released on every exit
/// path, including mid-run failures.
///
/// # Errors
/// * [`RipError::InvalidConfig`] — `config.pages_per_chunk` is zero
/// * [`RipError::FileNotFound`] — `pdf_path` does not exist
/// * [`RipError::CorruptPdf`] — the file cannot be opened as a PDF
/// * [`RipError::RenderFailed`] / [`RipError::OcrFailed`] — a page failed
/// * [`RipError::OutputWriteFailed`] — output directory or file I/O failed
pub fn extract_to_markdown(
    pdf_path: &Path,
    output_path: &Path,
    config: &ExtractionConfig,
    renderer: &dyn PageRenderer,
    ocr: &dyn TextRecognizer,
    progress: &dyn ProgressSink,
) -> Result<ExtractionStats, RipError> {
    let start = Instant::now();

    // The builder rejects this, but the config's fields are public (and
    // deserialisable), so a zero value can still arrive here — and a zero
    // chunk size would never advance the page loop.
    if config.pages_per_chunk == 0 {
        return Err(RipError::InvalidConfig(
            "pages_per_chunk must be >= 1".into(),
        ));
    }

    if !pdf_path.exists() {
        return Err(RipError::FileNotFound {
            path: pdf_path.to_path_buf(),
        });
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RipError::OutputWriteFailed {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        }
    }

    info!("Opening PDF: {}", pdf_path.display());
    let document = renderer.open(pdf_path)?;
    let total_pages = document.page_count();
    let scale = config.scale();
    info!(
        "Total pages: {} ({} DPI, scale {:.2})",
        total_pages, config.dpi, scale
    );
    progress.on_document_start(pdf_path, total_pages);

    let file = File::create(output_path).map_err(|e| RipError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let title = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let source_name = pdf_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf_path.display().to_string());

    let write_err = |e: std::io::Error| RipError::OutputWriteFailed {
        path: output_path.to_path_buf(),
        source: e,
    };

    markdown::write_header(&mut writer, &title, &source_name, total_pages).map_err(write_err)?;

    for chunk in chunks(total_pages, config.pages_per_chunk) {
        progress.on_chunk_start(chunk.first_page(), chunk.last_page(), total_pages);
        debug!(
            "Processing pages {} to {}",
            chunk.first_page(),
            chunk.last_page()
        );

        for index in chunk.pages() {
            let page_number = index + 1;
            let image = document.render_page(index, scale)?;
            let text = ocr.recognize(&image)?;

            markdown::write_page_section(&mut writer, page_number, &text).map_err(write_err)?;
            // Each page lands on disk as soon as it is recognised, so an
            // interrupted run loses at most the page in flight.
            writer.flush().map_err(write_err)?;

            progress.on_page_done(page_number, total_pages, text.len());
        }
    }

    writer.flush().map_err(write_err)?;
    drop(document);

    let stats = ExtractionStats {
        total_pages,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Complete. Saved to: {} ({} pages, {}ms)",
        output_path.display(),
        stats.total_pages,
        stats.duration_ms
    );
    progress.on_document_complete(output_path);

    Ok(stats)
}
