//! Error types for the pdf-ripper library.
//!
//! Every failure in this crate is fatal *for the operation that raised it*:
//! a missing file, an unopenable PDF, a failed render or OCR call all abort
//! the current document's extraction. What changes is who catches it — the
//! CLI terminates the process for a single-document run, while the batch
//! driver ([`crate::batch::process_batch`]) downgrades the same error to a
//! per-document `Failed` outcome and moves on. Returning a typed
//! [`RipError`] instead of exiting lets each caller make that call.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf-ripper library.
#[derive(Debug, Error)]
pub enum RipError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input PDF was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// The batch input directory does not exist.
    #[error("Books directory not found: '{path}'\nCreate it or pass --books-dir.")]
    BooksDirNotFound { path: PathBuf },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// The file exists but could not be opened as a PDF.
    #[error("Failed to open PDF '{path}': {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// The rendering backend returned an error for a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    RenderFailed { page: usize, detail: String },

    // ── OCR errors ────────────────────────────────────────────────────────
    /// The OCR engine could not be initialised (missing language data etc.).
    #[error("Failed to initialise OCR engine: {detail}")]
    OcrInitFailed { detail: String },

    /// The OCR engine failed on a rendered page image.
    #[error("OCR failed: {detail}")]
    OcrFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output Markdown file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not enumerate the batch input directory.
    #[error("Failed to read directory '{path}': {source}")]
    DirReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Install pdfium or set PDFIUM_LIB_PATH=/path/to/libpdfium."
    )]
    PdfiumBindingFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = RipError::FileNotFound {
            path: PathBuf::from("/books/missing.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("missing.pdf"), "got: {msg}");
    }

    #[test]
    fn render_failed_display() {
        let e = RipError::RenderFailed {
            page: 7,
            detail: "bad content stream".into(),
        };
        assert!(e.to_string().contains("page 7"));
        assert!(e.to_string().contains("bad content stream"));
    }

    #[test]
    fn corrupt_pdf_display() {
        let e = RipError::CorruptPdf {
            path: PathBuf::from("b.pdf"),
            detail: "xref table damaged".into(),
        };
        assert!(e.to_string().contains("b.pdf"));
        assert!(e.to_string().contains("xref"));
    }

    #[test]
    fn invalid_config_display() {
        let e = RipError::InvalidConfig("pages_per_chunk must be >= 1".into());
        assert!(e.to_string().contains("pages_per_chunk"));
    }
}
