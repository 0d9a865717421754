//! Scalar field extraction driven by the rule table.

use tracing::debug;

use super::rules::{
    detect_document_type, extract_customer_document, first_match, parse_amount, Field,
    TextViews,
};
use crate::models::receipt::{ExtractedFields, Totals};

/// Extract every single-valued field. Missing text fields are empty.
pub fn extract_fields(views: &TextViews<'_>, fallback_issuer_name: &str) -> ExtractedFields {
    let text = |field| first_match(field, views).unwrap_or_default();

    let fields = ExtractedFields {
        tax_id: text(Field::TaxId),
        document_type: detect_document_type(views.normalized()),
        document_number: text(Field::DocumentNumber),
        issue_date: text(Field::IssueDate),
        issuer_name: first_match(Field::IssuerName, views)
            .unwrap_or_else(|| fallback_issuer_name.to_string()),
        customer_name: text(Field::CustomerName),
        customer_address: text(Field::CustomerAddress),
        customer_document: extract_customer_document(views),
    };

    debug!(
        "Fields: tax_id={:?} type={:?} number={:?} date={:?}",
        fields.tax_id, fields.document_type, fields.document_number, fields.issue_date
    );

    fields
}

/// Printed totals, before reconciliation.
pub fn extract_totals(views: &TextViews<'_>) -> Totals {
    let amount = |field| first_match(field, views).and_then(|s| parse_amount(&s));

    Totals {
        subtotal: amount(Field::Subtotal),
        tax: amount(Field::Tax),
        total: amount(Field::Total),
    }
}
