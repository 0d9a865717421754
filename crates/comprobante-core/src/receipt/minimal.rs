//! Lightweight six-field extractor.
//!
//! No line items, no totals reconciliation, no customer fields: one pattern
//! per field, first match, trimmed, empty when missing.
//!
//! The total is read as digits, an optional `.` and more digits. Thousands
//! separators are NOT stripped, so `S/. 1,234.56` reads as `1`. The full
//! parser handles that case; this variant keeps the narrower grammar.

use std::str::FromStr;
use std::time::Instant;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::parser::{ComprobanteParser, ExtractionResult};
use super::rules::patterns::{
    MINIMAL_DATE, MINIMAL_DOCUMENT_NUMBER, MINIMAL_DOCUMENT_TYPE, MINIMAL_ISSUER_NAME,
    MINIMAL_RUC, MINIMAL_TOTAL,
};
use super::Result;
use crate::error::ExtractionError;
use crate::models::receipt::{Comprobante, MinimalRecord};

/// Extract the six scalar fields.
pub fn extract_minimal(text: &str) -> MinimalRecord {
    let total_amount = capture(text, &MINIMAL_TOTAL)
        .and_then(|s| Decimal::from_str(s.trim_end_matches('.')).ok())
        .unwrap_or(Decimal::ZERO);

    MinimalRecord {
        ruc: capture(text, &MINIMAL_RUC).unwrap_or_default(),
        issue_date: capture(text, &MINIMAL_DATE).unwrap_or_default(),
        total_amount,
        document_type: capture(text, &MINIMAL_DOCUMENT_TYPE)
            .map(|s| s.to_uppercase())
            .unwrap_or_default(),
        document_number: capture(text, &MINIMAL_DOCUMENT_NUMBER).unwrap_or_default(),
        issuer_name: capture(text, &MINIMAL_ISSUER_NAME).unwrap_or_default(),
    }
}

fn capture(text: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Parser for the lightweight path.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimalParser;

impl MinimalParser {
    pub fn new() -> Self {
        Self
    }
}

impl ComprobanteParser for MinimalParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ExtractionError::NoData);
        }

        info!("Parsing receipt (minimal) from {} characters of text", text.len());

        let record = extract_minimal(text);
        let mut warnings = Vec::new();
        if record.ruc.is_empty() {
            warnings.push("Could not extract RUC".to_string());
        }
        if record.total_amount.is_zero() {
            warnings.push("Could not extract total amount".to_string());
        }

        debug!("Extracted minimal record {:?}", record);

        Ok(ExtractionResult {
            record: Comprobante::Minimal(record),
            raw_text: text.to_string(),
            confidence: None,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extract_boleta() {
        let text = r#"
            BOLETA DE VENTA ELECTRÓNICA
            RUC: 20486760576
            FECHA: 26/07/2023
            TOTAL S/. 800.00
            N° B001-123456
            RAZON SOCIAL: EMPRESA EJEMPLO SAC
        "#;

        assert_eq!(
            extract_minimal(text),
            MinimalRecord {
                ruc: "20486760576".to_string(),
                issue_date: "26/07/2023".to_string(),
                total_amount: dec!(800.00),
                document_type: "BOLETA".to_string(),
                document_number: "B001-123456".to_string(),
                issuer_name: "EMPRESA EJEMPLO SAC".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields() {
        let text = r#"
            BOLETA DE VENTA
            RUC: 20486760576
            TOTAL S/. 100.50
        "#;

        let record = extract_minimal(text);
        assert_eq!(record.ruc, "20486760576");
        assert_eq!(record.total_amount, dec!(100.50));
        assert_eq!(record.issue_date, "");
        assert_eq!(record.issuer_name, "");
        assert_eq!(record.document_number, "");
    }

    #[test]
    fn test_thousands_separator_not_stripped() {
        let text = r#"
            FACTURA ELECTRÓNICA
            RUC: 20123456789
            TOTAL: S/. 1,234.56
        "#;

        let record = extract_minimal(text);
        assert_eq!(record.total_amount, dec!(1));
        assert_eq!(record.document_type, "FACTURA");
    }

    #[test]
    fn test_document_type_is_uppercased() {
        let record = extract_minimal("Boleta de venta\nRUC: 20486760576");
        assert_eq!(record.document_type, "BOLETA");
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert!(matches!(
            MinimalParser::new().parse("  \n "),
            Err(ExtractionError::NoData)
        ));
    }

    #[test]
    fn test_parse_wraps_minimal_record() {
        let result = MinimalParser::new().parse("RUC 20486760576 TOTAL S/. 5.00").unwrap();

        assert!(matches!(result.record, Comprobante::Minimal(_)));
        assert!(result.warnings.is_empty());
        assert_eq!(result.record.total(), Some(dec!(5.00)));
    }
}
