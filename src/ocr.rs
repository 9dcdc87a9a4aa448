//! Optical character recognition over rendered page images.
//!
//! The engine sits behind the [`TextRecognizer`] trait so the extraction
//! pipeline never depends on Tesseract directly; tests substitute a fake
//! that derives text from the image it receives.
//!
//! The production implementation uses Tesseract via `leptess`. Tesseract's
//! C API consumes *encoded* image data, so each page is PNG-encoded in
//! memory before recognition — the PNG bytes never touch the filesystem.

use crate::error::RipError;
use image::DynamicImage;
use leptess::LepTess;
use std::cell::RefCell;
use tracing::debug;

/// Recognises text in a rendered page image.
pub trait TextRecognizer {
    /// Run OCR over `image` and return the recognised text.
    fn recognize(&self, image: &DynamicImage) -> Result<String, RipError>;
}

/// Production [`TextRecognizer`] backed by Tesseract.
///
/// Holds one Tesseract instance for its whole lifetime — language data is
/// loaded once, not once per page. The pipeline is single-threaded, so
/// interior mutability via `RefCell` is sufficient.
pub struct TesseractOcr {
    engine: RefCell<LepTess>,
}

impl TesseractOcr {
    /// Create a recogniser for the given Tesseract language code(s),
    /// e.g. `"eng"` or `"eng+fra"`.
    ///
    /// Initialisation happens here, up front, so a missing language pack
    /// surfaces before any page has been rendered, not halfway through a
    /// 600-page book.
    pub fn new(language: impl Into<String>) -> Result<Self, RipError> {
        let language = language.into();
        let engine = LepTess::new(None, &language).map_err(|e| RipError::OcrInitFailed {
            detail: format!(
                "language '{language}': {e}. \
                 Make sure the Tesseract language data is installed \
                 (e.g. apt install tesseract-ocr-eng)."
            ),
        })?;
        Ok(Self {
            engine: RefCell::new(engine),
        })
    }
}

impl TextRecognizer for TesseractOcr {
    fn recognize(&self, image: &DynamicImage) -> Result<String, RipError> {
        let mut lt = self.engine.borrow_mut();

        // leptess expects encoded image data, not raw pixels.
        let mut png_buf = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut png_buf, image::ImageFormat::Png)
            .map_err(|e| RipError::OcrFailed {
                detail: format!("failed to encode page image to PNG: {e}"),
            })?;

        lt.set_image_from_mem(png_buf.get_ref())
            .map_err(|e| RipError::OcrFailed {
                detail: format!("failed to load page image: {e}"),
            })?;

        let text = lt.get_utf8_text().map_err(|e| RipError::OcrFailed {
            detail: format!("text extraction failed: {e}"),
        })?;

        debug!("Recognised {} bytes of text", text.len());
        Ok(text)
    }
}
