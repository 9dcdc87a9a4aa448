//! Configuration types for PDF-to-Markdown extraction.
//!
//! Extraction behaviour lives in [`ExtractionConfig`], built via its
//! [`ExtractionConfigBuilder`]. Batch behaviour — which directories to read
//! and write and whether to skip existing outputs — lives in [`BatchConfig`].
//! The directory defaults (`books/`, `output/`) are plain named constants on
//! the config rather than ambient globals buried in the call chain, so two
//! batch runs with different directories can coexist in one process.

use crate::error::RipError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default input directory for batch mode.
pub const DEFAULT_BOOKS_DIR: &str = "books";

/// Default output directory (batch mode) and output parent (single mode).
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Points-per-inch of the PDF coordinate space; DPI divided by this gives
/// the rasterisation scale factor.
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

/// Configuration for one document's extraction.
///
/// Built via [`ExtractionConfig::builder()`] or [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf_ripper::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .dpi(150)
///     .pages_per_chunk(5)
///     .build()
///     .unwrap();
/// assert!((config.scale() - 150.0 / 72.0).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Rendering DPI used when rasterising each PDF page. Default: 300.
    ///
    /// 300 DPI is the long-standing Tesseract sweet spot for scanned book
    /// pages. Lower values render faster but degrade recognition of small
    /// fonts; the scale factor derived from this value is applied identically
    /// to every page of a document.
    pub dpi: u32,

    /// Number of pages between progress reports. Default: 10.
    ///
    /// Purely a reporting granularity — chunking never changes which pages
    /// are processed or in what order.
    pub pages_per_chunk: usize,

    /// Tesseract language code(s), e.g. "eng" or "eng+fra". Default: "eng".
    pub language: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            pages_per_chunk: 10,
            language: "eng".to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Rasterisation scale factor derived from the DPI.
    ///
    /// PDF user space is 72 points per inch, so `dpi / 72` maps page
    /// coordinates to output pixels. Constant within one extraction run.
    pub fn scale(&self) -> f32 {
        self.dpi as f32 / PDF_POINTS_PER_INCH
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn pages_per_chunk(mut self, n: usize) -> Self {
        self.config.pages_per_chunk = n;
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.config.language = lang.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, RipError> {
        let c = &self.config;
        if c.dpi == 0 {
            return Err(RipError::InvalidConfig(format!(
                "DPI must be a positive integer, got {}",
                c.dpi
            )));
        }
        if c.pages_per_chunk == 0 {
            return Err(RipError::InvalidConfig(
                "pages_per_chunk must be >= 1".into(),
            ));
        }
        if c.language.is_empty() {
            return Err(RipError::InvalidConfig(
                "OCR language must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

/// Configuration for a batch run over a directory of PDFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory scanned (non-recursively) for `.pdf` files. Default: `books`.
    pub books_dir: PathBuf,

    /// Directory where one `.md` file per input PDF is written. Default: `output`.
    pub output_dir: PathBuf,

    /// Skip a document when its target output file already exists. Default: true.
    ///
    /// This is what makes an interrupted batch resumable: rerunning picks up
    /// where the previous run stopped instead of re-OCRing finished books.
    pub skip_existing: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            books_dir: PathBuf::from(DEFAULT_BOOKS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            skip_existing: true,
        }
    }
}
