//! Money amount parsing for receipts (`1,234.56`, `S/. 800.00`).

use regex::Captures;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse an amount with `.` as decimal separator, stripping `,` thousands
/// separators first.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).ok()
}

/// Whether the match starting at `start` is the tail of a `SUBTOTAL` /
/// `SUB TOTAL` label.
pub fn preceded_by_sub(haystack: &str, start: usize) -> bool {
    let before = haystack.get(..start).unwrap_or("").trim_end();
    before
        .len()
        .checked_sub(3)
        .and_then(|i| before.get(i..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case("SUB"))
}

/// Amount in group 1 with separators stripped.
pub fn amount(caps: &Captures<'_>, _haystack: &str) -> Option<String> {
    let raw = caps.get(1)?.as_str();
    parse_amount(raw).map(|_| raw.replace(',', ""))
}

/// Like [`amount`], but rejects `TOTAL` labels that belong to a subtotal.
pub fn total_amount(caps: &Captures<'_>, haystack: &str) -> Option<String> {
    let label = caps.get(0)?;
    if preceded_by_sub(haystack, label.start()) {
        return None;
    }
    amount(caps, haystack)
}
