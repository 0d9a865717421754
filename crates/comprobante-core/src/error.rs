//! Error types for the comprobante-core library.

use thiserror::Error;

/// Main error type for the comprobante library.
///
/// Only request-level failures surface here. Field extraction itself is
/// total: a field that cannot be recognised degrades to an empty value.
#[derive(Error, Debug)]
pub enum ComprobanteError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR provider error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised by OCR providers.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The provider cannot handle this kind of input.
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// The input could not be decoded.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Recognition ran but produced no text.
    #[error("no text detected")]
    EmptyResult,
}

/// Errors related to receipt extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// There was no text to extract from.
    #[error("no receipt text to extract from")]
    NoData,
}

/// Result type for the comprobante library.
pub type Result<T> = std::result::Result<T, ComprobanteError>;
