//! PDF rasterisation: render pages to `DynamicImage` via pdfium.
//!
//! The renderer sits behind a pair of traits so the extraction pipeline can
//! be exercised in tests with an in-memory fake instead of a real PDF stack:
//!
//! * [`PageRenderer`] — opens a document by path;
//! * [`DocumentPages`] — the opened document: page count plus page-by-index
//!   rendering at a scale factor.
//!
//! Closing is not a trait method. The document handle is released when the
//! `Box<dyn DocumentPages>` is dropped, which the extractor's scoping
//! guarantees happens even when a page fails mid-run.

use crate::error::RipError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// An opened document: page count and page-by-index rasterisation.
pub trait DocumentPages {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Render the page at zero-based `index` to a raster image.
    ///
    /// `scale` multiplies the page's point dimensions; `dpi / 72` gives the
    /// conventional mapping (see [`crate::config::ExtractionConfig::scale`]).
    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage, RipError>;
}

/// Opens PDF documents by filesystem path.
pub trait PageRenderer {
    /// Open the document at `path`.
    ///
    /// # Errors
    /// [`RipError::CorruptPdf`] when the file cannot be parsed as a PDF.
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn DocumentPages + 'a>, RipError>;
}

/// Production [`PageRenderer`] backed by the pdfium library.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind to the system pdfium library.
    ///
    /// # Errors
    /// [`RipError::PdfiumBindingFailed`] when no pdfium shared library can
    /// be located.
    pub fn new() -> Result<Self, RipError> {
        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| RipError::PdfiumBindingFailed(format!("{e:?}")))?;
        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRenderer for PdfiumRenderer {
    fn open<'a>(&'a self, path: &Path) -> Result<Box<dyn DocumentPages + 'a>, RipError> {
        let document =
            self.pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| RipError::CorruptPdf {
                    path: path.to_path_buf(),
                    detail: format!("{e:?}"),
                })?;
        debug!("PDF loaded: {} pages", document.pages().len());
        Ok(Box::new(PdfiumDocument { document }))
    }
}

/// An open pdfium document. Pdfium releases the underlying handle on drop.
struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl DocumentPages for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, scale: f32) -> Result<DynamicImage, RipError> {
        let render_config = PdfRenderConfig::new().scale_page_by_factor(scale);

        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| RipError::RenderFailed {
                page: index + 1,
                detail: format!("{e:?}"),
            })?;

        let bitmap =
            page.render_with_config(&render_config)
                .map_err(|e| RipError::RenderFailed {
                    page: index + 1,
                    detail: format!("{e:?}"),
                })?;

        let image = bitmap.as_image();
        debug!(
            "Rendered page {} -> {}x{} px",
            index + 1,
            image.width(),
            image.height()
        );

        Ok(image)
    }
}
