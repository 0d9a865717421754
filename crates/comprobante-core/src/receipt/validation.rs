//! Record validation.
//!
//! Validation runs after extraction and never changes the record. Every
//! problem is reported as a [`FieldViolation`]; an empty list means the
//! record passed.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::rules::patterns::DOCUMENT_NUMBER_SHAPE;
use super::rules::ruc::is_ruc_shaped;
use super::rules::{parse_issue_date, validate_ruc};
use crate::models::config::ValidationConfig;
use crate::models::receipt::{Comprobante, ComprobanteRecord, DocumentType, MinimalRecord};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Name of the offending field, as serialized.
    pub field: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

impl FieldViolation {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validate a full record.
pub fn validate(record: &ComprobanteRecord, config: &ValidationConfig) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    let fields = &record.fields;

    check_tax_id("tax_id", &fields.tax_id, config, &mut violations);

    if fields.document_type == DocumentType::Ticket {
        violations.push(FieldViolation::new(
            "document_type",
            "must be BOLETA or FACTURA",
        ));
    }

    check_document_number(&fields.document_number, &mut violations);
    check_issue_date(&fields.issue_date, &mut violations);

    let totals = &record.totals;
    match totals.total {
        None => violations.push(FieldViolation::new("total", "missing")),
        Some(total) if total < Decimal::ZERO => {
            violations.push(FieldViolation::new("total", format!("negative amount {}", total)));
        }
        Some(_) => {}
    }

    if let (Some(subtotal), Some(tax), Some(total)) = (totals.subtotal, totals.tax, totals.total) {
        match subtotal.checked_add(tax).and_then(|sum| sum.checked_sub(total)) {
            Some(diff) if diff.abs() <= Decimal::new(1, 2) => {}
            Some(_) => violations.push(FieldViolation::new(
                "total",
                format!("subtotal {} + tax {} does not match total {}", subtotal, tax, total),
            )),
            None => violations.push(FieldViolation::new(
                "total",
                format!("subtotal {} + tax {} is out of range", subtotal, tax),
            )),
        }
    }

    violations
}

/// Validate a record from the minimal extractor.
pub fn validate_minimal(record: &MinimalRecord, config: &ValidationConfig) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    check_tax_id("ruc", &record.ruc, config, &mut violations);

    if !matches!(record.document_type.as_str(), "BOLETA" | "FACTURA") {
        violations.push(FieldViolation::new(
            "document_type",
            "must be BOLETA or FACTURA",
        ));
    }

    check_document_number(&record.document_number, &mut violations);
    check_issue_date(&record.issue_date, &mut violations);

    if record.total_amount < Decimal::ZERO {
        violations.push(FieldViolation::new(
            "total_amount",
            format!("negative amount {}", record.total_amount),
        ));
    }

    violations
}

impl Comprobante {
    /// Validate whichever record variant this is.
    pub fn validate(&self, config: &ValidationConfig) -> Vec<FieldViolation> {
        match self {
            Comprobante::Full(record) => validate(record, config),
            Comprobante::Minimal(record) => validate_minimal(record, config),
        }
    }
}

fn check_tax_id(
    field: &'static str,
    value: &str,
    config: &ValidationConfig,
    out: &mut Vec<FieldViolation>,
) {
    if value.is_empty() {
        out.push(FieldViolation::new(field, "missing"));
    } else if !is_ruc_shaped(value) {
        out.push(FieldViolation::new(field, "must be exactly 11 digits"));
    } else if config.verify_ruc_checksum && !validate_ruc(value) {
        out.push(FieldViolation::new(field, "invalid RUC check digit"));
    }
}

fn check_document_number(value: &str, out: &mut Vec<FieldViolation>) {
    if value.is_empty() {
        out.push(FieldViolation::new("document_number", "missing"));
    } else if !DOCUMENT_NUMBER_SHAPE.is_match(value) {
        out.push(FieldViolation::new(
            "document_number",
            format!("{:?} is not SERIES-NUMBER", value),
        ));
    }
}

fn check_issue_date(value: &str, out: &mut Vec<FieldViolation>) {
    if value.is_empty() {
        out.push(FieldViolation::new("issue_date", "missing"));
    } else if parse_issue_date(value).is_none() {
        out.push(FieldViolation::new(
            "issue_date",
            format!("{:?} is not a valid date", value),
        ));
    }
}
