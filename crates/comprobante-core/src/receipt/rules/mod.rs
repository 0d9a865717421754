//! Rule-based field extractors for Peruvian receipts.
//!
//! Every single-valued field is described by one or more [`FieldRule`]s in
//! [`FIELD_RULES`]. Rules for the same field are tried in table order and the
//! first accepted match wins.

pub mod amounts;
pub mod customer;
pub mod dates;
pub mod document;
pub mod patterns;
pub mod ruc;
pub mod text;

pub use amounts::{parse_amount, preceded_by_sub};
pub use customer::extract_customer_document;
pub use dates::parse_issue_date;
pub use document::detect_document_type;
pub use ruc::validate_ruc;
pub use text::{normalize, TextView, TextViews};

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use patterns::*;

/// Fields filled from the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TaxId,
    DocumentNumber,
    IssueDate,
    IssuerName,
    CustomerName,
    CustomerAddress,
    Total,
    Subtotal,
    Tax,
    IdentityKind,
    IdentityNumber,
}

/// Turns one regex match into a field value.
///
/// Receives the captures and the haystack they came from. Returning `None`
/// rejects the match and the scan moves on to the next one.
pub type Capture = fn(&Captures<'_>, &str) -> Option<String>;

/// One entry of the rule table.
pub struct FieldRule {
    /// Field this rule fills.
    pub field: Field,
    /// Text view the pattern runs against.
    pub view: TextView,
    /// Pattern; group 1 holds the value.
    pub pattern: &'static Regex,
    /// Value extraction for a single match.
    pub capture: Capture,
}

impl FieldRule {
    /// First accepted match of this rule.
    pub fn apply(&self, views: &TextViews<'_>) -> Option<String> {
        let haystack = views.get(self.view);
        self.pattern
            .captures_iter(haystack)
            .find_map(|caps| (self.capture)(&caps, haystack))
    }
}

lazy_static! {
    /// The ordered rule table.
    pub static ref FIELD_RULES: Vec<FieldRule> = vec![
        FieldRule { field: Field::TaxId, view: TextView::Original, pattern: &TAX_ID, capture: first_group },
        FieldRule { field: Field::DocumentNumber, view: TextView::Original, pattern: &DOCUMENT_NUMBER_LABELED, capture: document::document_number },
        FieldRule { field: Field::DocumentNumber, view: TextView::Original, pattern: &DOCUMENT_NUMBER_BARE, capture: document::document_number },
        FieldRule { field: Field::IssueDate, view: TextView::Original, pattern: &ISSUE_DATE, capture: first_group },
        FieldRule { field: Field::IssuerName, view: TextView::Original, pattern: &ISSUER_NAME, capture: first_group },
        FieldRule { field: Field::CustomerName, view: TextView::Original, pattern: &CUSTOMER_NAME, capture: customer::customer_name },
        FieldRule { field: Field::CustomerAddress, view: TextView::Original, pattern: &CUSTOMER_ADDRESS, capture: customer::customer_address },
        FieldRule { field: Field::Total, view: TextView::Normalized, pattern: &TOTAL, capture: amounts::total_amount },
        FieldRule { field: Field::Subtotal, view: TextView::Normalized, pattern: &SUBTOTAL, capture: amounts::amount },
        FieldRule { field: Field::Tax, view: TextView::Normalized, pattern: &IGV, capture: amounts::amount },
        FieldRule { field: Field::IdentityKind, view: TextView::Normalized, pattern: &IDENTITY_KIND_LABELED, capture: customer::identity_kind },
        FieldRule { field: Field::IdentityKind, view: TextView::Normalized, pattern: &IDENTITY_KIND_BARE, capture: customer::identity_kind },
        FieldRule { field: Field::IdentityNumber, view: TextView::Normalized, pattern: &IDENTITY_NUMBER_LABELED, capture: first_group },
        FieldRule { field: Field::IdentityNumber, view: TextView::Normalized, pattern: &IDENTITY_NUMBER_BARE, capture: first_group },
    ];
}

/// Value of `field` from the first rule that matches.
pub fn first_match(field: Field, views: &TextViews<'_>) -> Option<String> {
    FIELD_RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find_map(|rule| rule.apply(views))
}

/// Group 1, trimmed; empty captures are rejected.
pub fn first_group(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    caps.get(1)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
