//! Receipt parser: fields, line items and totals reconciliation.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::fields::{extract_fields, extract_totals};
use super::items::{duplicate_lines, extract_line_items};
use super::rules::TextViews;
use super::totals::reconcile;
use super::Result;
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::receipt::{Comprobante, ComprobanteRecord};
use crate::ocr::OcrOutput;

/// Result of receipt extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: Comprobante,
    /// Raw extracted text.
    pub raw_text: String,
    /// OCR confidence reported by the text source, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
pub trait ComprobanteParser: Send + Sync {
    /// Parse a receipt from OCR text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;

    /// Parse a receipt from OCR output, keeping its confidence.
    fn extract(&self, ocr: &OcrOutput) -> Result<ExtractionResult> {
        let mut result = self.parse(&ocr.text)?;
        result.confidence = Some(ocr.confidence);
        Ok(result)
    }
}

/// Full receipt parser with line items and totals reconciliation.
#[derive(Debug, Clone)]
pub struct ReceiptParser {
    /// Issuer name used when no razón social is printed.
    fallback_issuer_name: String,
    /// Whether to warn about lines matched by several row grammars.
    flag_duplicate_items: bool,
}

impl ReceiptParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            fallback_issuer_name: String::new(),
            flag_duplicate_items: true,
        }
    }

    /// Create a parser from the extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_fallback_issuer_name(&config.fallback_issuer_name)
            .with_duplicate_flagging(config.flag_duplicate_items)
    }

    /// Set the fallback issuer name.
    pub fn with_fallback_issuer_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_issuer_name = name.into();
        self
    }

    /// Set duplicate line item flagging.
    pub fn with_duplicate_flagging(mut self, flag: bool) -> Self {
        self.flag_duplicate_items = flag;
        self
    }

    /// Extract a record. Never fails: unrecognised fields stay empty.
    pub fn extract_record(&self, text: &str) -> ComprobanteRecord {
        let views = TextViews::new(text);

        let fields = extract_fields(&views, &self.fallback_issuer_name);
        let items = extract_line_items(views.original());
        let totals = reconcile(extract_totals(&views), &items);

        ComprobanteRecord { fields, items, totals }
    }

    fn collect_warnings(&self, record: &ComprobanteRecord) -> Vec<String> {
        let mut warnings = Vec::new();

        if record.fields.tax_id.is_empty() {
            warnings.push("Could not extract RUC".to_string());
        }
        if record.fields.document_number.is_empty() {
            warnings.push("Could not extract document number".to_string());
        }
        if record.fields.issue_date.is_empty() {
            warnings.push("Could not extract issue date".to_string());
        }
        if record.items.is_empty() {
            warnings.push("Could not extract line items".to_string());
        }
        if record.totals.total.is_none() {
            warnings.push("Could not determine total".to_string());
        }

        if self.flag_duplicate_items {
            for (line, grammars) in duplicate_lines(&record.items) {
                warn!("Items section line {} matched by {:?}", line, grammars);
                warnings.push(format!(
                    "Possible duplicate line item: items section line {} matched by {} row grammars",
                    line,
                    grammars.len()
                ));
            }
        }

        warnings
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ComprobanteParser for ReceiptParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::NoData);
        }

        info!("Parsing receipt from {} characters of text", text.len());

        let record = self.extract_record(text);
        let warnings = self.collect_warnings(&record);

        debug!(
            "Extracted {} {} with {} items, total {:?}",
            record.fields.document_type.label(),
            record.fields.document_number,
            record.items.len(),
            record.totals.total
        );

        Ok(ExtractionResult {
            record: Comprobante::Full(record),
            raw_text: text.to_string(),
            confidence: None,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
