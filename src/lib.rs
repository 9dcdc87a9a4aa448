//! # pdf-ripper
//!
//! Rip scanned PDFs into plain-text Markdown with OCR.
//!
//! ## Why this crate?
//!
//! Scanned and image-based PDFs carry no embedded text layer, so text-layer
//! extractors return nothing useful. This crate takes the uniform route:
//! every page is rasterised at a configurable DPI and run through Tesseract,
//! and the recognised text is assembled into one Markdown file per document.
//! The always-OCR policy is deliberate — mixed scanned/digital inputs come
//! out in an identical format either way.
//!
//! ## Pipeline Overview
//!
//! ```text
//! books/*.pdf
//!  │
//!  ├─ 1. Batch    enumerate PDFs, skip finished outputs, isolate failures
//!  ├─ 2. Extract  per document: open, header, chunked page loop
//!  ├─ 3. Render   rasterise each page via pdfium at dpi / 72 scale
//!  ├─ 4. OCR      Tesseract over the page raster
//!  └─ 5. Output   "## Page N" sections appended in page order
//! ```
//!
//! Execution is fully sequential and synchronous: one document at a time,
//! one page at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_ripper::{
//!     extract_to_markdown, ExtractionConfig, NoopProgressSink, PdfiumRenderer, TesseractOcr,
//! };
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::default();
//!     let renderer = PdfiumRenderer::new()?;
//!     let ocr = TesseractOcr::new(&config.language)?;
//!     let stats = extract_to_markdown(
//!         Path::new("book.pdf"),
//!         Path::new("output/book.md"),
//!         &config,
//!         &renderer,
//!         &ocr,
//!         &NoopProgressSink,
//!     )?;
//!     eprintln!("{} pages in {}ms", stats.total_pages, stats.duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdfripper` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf-ripper = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod batch;
pub mod chunk;
pub mod config;
pub mod error;
pub mod extract;
pub mod markdown;
pub mod ocr;
pub mod progress;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use batch::{process_batch, BatchSummary, ItemOutcome};
pub use chunk::{chunks, PageChunk};
pub use config::{BatchConfig, ExtractionConfig, ExtractionConfigBuilder};
pub use error::RipError;
pub use extract::{extract_to_markdown, ExtractionStats};
pub use ocr::{TesseractOcr, TextRecognizer};
pub use progress::{NoopProgressSink, ProgressSink};
pub use render::{DocumentPages, PageRenderer, PdfiumRenderer};
