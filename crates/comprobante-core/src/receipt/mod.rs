//! Receipt field extraction module.

mod fields;
mod items;
mod minimal;
mod parser;
pub mod rules;
mod totals;
mod validation;

pub use fields::{extract_fields, extract_totals};
pub use items::{duplicate_lines, extract_line_items, items_section};
pub use minimal::{extract_minimal, MinimalParser};
pub use parser::{ComprobanteParser, ExtractionResult, ReceiptParser};
pub use totals::reconcile;
pub use validation::{validate, validate_minimal, FieldViolation};

use crate::error::ExtractionError;
use crate::models::config::{ExtractionConfig, ExtractorVariant};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Build the parser selected by the configuration.
pub fn build_parser(config: &ExtractionConfig) -> Box<dyn ComprobanteParser> {
    match config.variant {
        ExtractorVariant::Full => Box::new(ReceiptParser::from_config(config)),
        ExtractorVariant::Minimal => Box::new(MinimalParser::new()),
    }
}
