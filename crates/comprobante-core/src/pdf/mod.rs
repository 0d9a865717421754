//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use tracing::{debug, warn};

use crate::error::{OcrError, PdfError};
use crate::models::config::PdfConfig;
use crate::ocr::{OcrOutput, OcrProvider};

/// Type of PDF content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfType {
    /// Contains extractable text.
    Text,
    /// Contains only images (scanned receipt).
    Image,
    /// Empty or unreadable.
    Empty,
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Analyze the PDF to determine its type.
    fn analyze(&self) -> PdfType;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Text source for PDFs with an embedded text layer.
///
/// Scanned PDFs carry no usable text and are rejected; they need an image
/// OCR provider instead.
#[derive(Debug, Clone)]
pub struct PdfTextProvider {
    min_text_length: usize,
}

impl PdfTextProvider {
    /// Create a provider with the given minimum text length.
    pub fn new(min_text_length: usize) -> Self {
        Self { min_text_length }
    }

    /// Create a provider from the PDF configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new(config.min_text_length)
    }
}

impl Default for PdfTextProvider {
    fn default() -> Self {
        Self::from_config(&PdfConfig::default())
    }
}

impl OcrProvider for PdfTextProvider {
    fn name(&self) -> &'static str {
        "pdf-text"
    }

    fn recognize(&self, data: &[u8]) -> crate::Result<OcrOutput> {
        let mut extractor = PdfExtractor::new().with_min_text_length(self.min_text_length);
        extractor.load(data)?;

        match extractor.analyze() {
            PdfType::Text => {
                let text = extractor.extract_text()?;
                debug!(
                    "Extracted {} chars of embedded text from {} pages",
                    text.len(),
                    extractor.page_count()
                );
                Ok(OcrOutput::new(text, 100.0))
            }
            PdfType::Image => {
                warn!("PDF has no text layer");
                Err(OcrError::Unsupported(
                    "scanned PDF needs an image OCR provider".to_string(),
                )
                .into())
            }
            PdfType::Empty => Err(OcrError::EmptyResult.into()),
        }
    }
}
