//! Line item extraction.
//!
//! Three row grammars compete over every line of the items section. Their
//! matches accumulate: one printed line can yield more than one item when
//! several grammars accept it. Such lines are reported by
//! [`duplicate_lines`], never merged.

use std::collections::BTreeMap;

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::rules::parse_amount;
use super::rules::patterns::{
    ITEMS_FOOTER, ITEMS_HEADER, ROW_DESCRIPTION_FIRST, ROW_QUANTITY_FIRST, ROW_UNIT_PRICE,
};
use crate::models::receipt::{LineItem, RowGrammar};

impl RowGrammar {
    /// All grammars in priority order.
    pub const ALL: [RowGrammar; 3] = [
        RowGrammar::QuantityFirst,
        RowGrammar::DescriptionFirst,
        RowGrammar::UnitPrice,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            RowGrammar::QuantityFirst => &ROW_QUANTITY_FIRST,
            RowGrammar::DescriptionFirst => &ROW_DESCRIPTION_FIRST,
            RowGrammar::UnitPrice => &ROW_UNIT_PRICE,
        }
    }

    fn build(&self, caps: &Captures<'_>, line: usize) -> Option<LineItem> {
        match self {
            RowGrammar::QuantityFirst => derived_row(*self, &caps[1], &caps[2], &caps[3], line),
            RowGrammar::DescriptionFirst => derived_row(*self, &caps[2], &caps[1], &caps[3], line),
            RowGrammar::UnitPrice => {
                let quantity = parse_quantity(&caps[1])?;
                Some(LineItem {
                    description: caps[3].trim().to_string(),
                    quantity,
                    unit_price: parse_amount(&caps[2])?,
                    amount: parse_amount(&caps[4])?,
                    grammar: *self,
                    line,
                })
            }
        }
    }
}

/// Row without a printed unit price: derive it as `amount / quantity`.
fn derived_row(
    grammar: RowGrammar,
    quantity: &str,
    description: &str,
    amount: &str,
    line: usize,
) -> Option<LineItem> {
    let quantity = parse_quantity(quantity)?;
    let amount = parse_amount(amount)?;
    let unit_price = amount
        .checked_div(Decimal::from(quantity))?
        .round_dp(2);

    Some(LineItem {
        description: description.trim().to_string(),
        quantity,
        unit_price,
        amount,
        grammar,
        line,
    })
}

/// Quantities must be positive; zero or overflowing rows are skipped.
fn parse_quantity(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|q| *q > 0)
}

/// Text between the first items header and the first totals footer.
///
/// Falls back to the whole text when there is no header or the bounded
/// section is blank.
pub fn items_section(text: &str) -> &str {
    let Some(header) = ITEMS_HEADER.find(text) else {
        return text;
    };

    let after = &text[header.end()..];
    let section = match ITEMS_FOOTER.find(after) {
        Some(footer) => &after[..footer.start()],
        None => after,
    };

    if section.trim().is_empty() {
        text
    } else {
        section
    }
}

/// Extract line items from receipt text.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    let section = items_section(text);
    let lines: Vec<&str> = section.lines().collect();
    let mut items = Vec::new();

    for grammar in RowGrammar::ALL {
        for (index, line) in lines.iter().enumerate() {
            let Some(caps) = grammar.pattern().captures(line) else {
                continue;
            };

            match grammar.build(&caps, index) {
                Some(item) => items.push(item),
                None => trace!("Skipping row {:?} on line {}: {}", grammar, index, line.trim()),
            }
        }
    }

    debug!("Extracted {} line items from {} lines", items.len(), lines.len());
    items
}

/// Lines that produced an item under more than one grammar.
pub fn duplicate_lines(items: &[LineItem]) -> Vec<(usize, Vec<RowGrammar>)> {
    let mut by_line: BTreeMap<usize, Vec<RowGrammar>> = BTreeMap::new();
    for item in items {
        by_line.entry(item.line).or_default().push(item.grammar);
    }

    by_line
        .into_iter()
        .filter(|(_, grammars)| grammars.len() > 1)
        .collect()
}
