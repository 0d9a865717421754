//! Customer name, address and identity document.

use regex::{Captures, Regex};

use super::patterns::{CUSTOMER_ADDRESS_STOP, CUSTOMER_NAME_STOP};
use super::{first_match, Field, TextViews};
use crate::models::receipt::{CustomerDocument, IdentityKind};

/// Customer name: the labeled text up to the next DNI/RUC/DIRECCIÓN.
pub fn customer_name(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    cut_at(caps.get(1)?.as_str(), &CUSTOMER_NAME_STOP)
}

/// Customer address: the labeled text up to the next DNI/RUC/FECHA.
pub fn customer_address(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    cut_at(caps.get(1)?.as_str(), &CUSTOMER_ADDRESS_STOP)
}

/// Identity document kind, uppercased.
pub fn identity_kind(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    Some(caps.get(1)?.as_str().to_uppercase())
}

fn cut_at(value: &str, stop: &Regex) -> Option<String> {
    let end = stop.find(value).map(|m| m.start()).unwrap_or(value.len());
    let value = value[..end].trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Customer identity document.
///
/// Present only when a document number was found; the kind may still be
/// unknown.
pub fn extract_customer_document(views: &TextViews<'_>) -> Option<CustomerDocument> {
    let number = first_match(Field::IdentityNumber, views)?;
    let kind = first_match(Field::IdentityKind, views).and_then(|k| IdentityKind::from_str(&k));

    Some(CustomerDocument { kind, number })
}
