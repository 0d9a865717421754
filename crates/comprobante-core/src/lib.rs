//! Core library for Peruvian receipt extraction.
//!
//! This crate provides:
//! - Rule-based field extraction from OCR text (RUC, document type and
//!   number, issue date, issuer, customer, totals)
//! - Line item recovery with competing row grammars
//! - Totals reconciliation (`total = subtotal + tax`, item sums)
//! - A lightweight six-field extractor
//! - Record validation (RUC check digit, dates, totals consistency)
//! - Text sources: plain OCR text and PDFs with a text layer

pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod receipt;

pub use error::{ComprobanteError, Result};
pub use models::config::{ComprobanteConfig, ExtractionConfig, ExtractorVariant};
pub use models::receipt::{
    Comprobante, ComprobanteRecord, CustomerDocument, DocumentType, ExtractedFields,
    IdentityKind, LineItem, MinimalRecord, RowGrammar, Totals,
};
pub use ocr::{OcrOutput, OcrProvider, PlainTextProvider};
pub use pdf::{PdfExtractor, PdfProcessor, PdfTextProvider, PdfType};
pub use receipt::{
    build_parser, ComprobanteParser, ExtractionResult, FieldViolation, MinimalParser,
    ReceiptParser,
};
