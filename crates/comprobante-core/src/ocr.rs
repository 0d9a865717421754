//! Text sources for receipt extraction.
//!
//! Extraction only ever sees text. An [`OcrProvider`] turns raw document
//! bytes into that text; image recognition engines plug in through the same
//! trait.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OcrError;
use crate::Result;

/// Recognised text with the provider's confidence (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Full recognised text.
    pub text: String,
    /// Confidence score, 0-100.
    pub confidence: f32,
}

impl OcrOutput {
    /// Create a new output.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Anything that can turn document bytes into text.
pub trait OcrProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Recognise text in `data`.
    fn recognize(&self, data: &[u8]) -> Result<OcrOutput>;
}

/// Provider for text that was already recognised upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextProvider;

impl PlainTextProvider {
    pub fn new() -> Self {
        Self
    }
}

impl OcrProvider for PlainTextProvider {
    fn name(&self) -> &'static str {
        "text"
    }

    fn recognize(&self, data: &[u8]) -> Result<OcrOutput> {
        let text = std::str::from_utf8(data)
            .map_err(|e| OcrError::InvalidInput(format!("text is not UTF-8: {}", e)))?;
        // Strip a UTF-8 BOM some OCR exports prepend
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        if text.trim().is_empty() {
            return Err(OcrError::EmptyResult.into());
        }

        debug!("Read {} bytes of plain text", data.len());
        Ok(OcrOutput::new(text, 100.0))
    }
}
