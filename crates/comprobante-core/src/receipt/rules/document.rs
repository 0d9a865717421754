//! Document type and document number.
//!
//! The two are decided independently: the type looks at the whole text,
//! the number is anchored on a label. They can disagree.

use regex::Captures;

use super::patterns::{FACTURA_WORD, TICKET_WORD};
use crate::models::receipt::DocumentType;

/// Decide the document type from the words present anywhere in the text.
pub fn detect_document_type(text: &str) -> DocumentType {
    if FACTURA_WORD.is_match(text) {
        DocumentType::Factura
    } else if TICKET_WORD.is_match(text) {
        DocumentType::Ticket
    } else {
        DocumentType::Boleta
    }
}

/// Document number in group 1 with any whitespace removed
/// (`B001 - 123` becomes `B001-123`).
pub fn document_number(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    let number: String = caps.get(1)?.as_str().split_whitespace().collect();
    if number.is_empty() {
        None
    } else {
        Some(number.to_uppercase())
    }
}
