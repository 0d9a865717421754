//! Totals reconciliation.
//!
//! Rules run in this order and each fires only when its inputs are present
//! and its output is missing:
//!
//! 1. `subtotal = total - tax`
//! 2. `tax = total - subtotal`
//! 3. `total = subtotal + tax`
//! 4. `total = sum of item amounts`

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::receipt::{LineItem, Totals};

/// Fill in whatever the known totals and items determine.
///
/// Arithmetic is checked; a value that would overflow stays absent.
pub fn reconcile(totals: Totals, items: &[LineItem]) -> Totals {
    let mut out = totals;

    if let (None, Some(total), Some(tax)) = (out.subtotal, out.total, out.tax) {
        out.subtotal = total.checked_sub(tax);
        debug!("Derived subtotal {:?} from total and tax", out.subtotal);
    }

    if let (None, Some(total), Some(subtotal)) = (out.tax, out.total, out.subtotal) {
        out.tax = total.checked_sub(subtotal);
        debug!("Derived tax {:?} from total and subtotal", out.tax);
    }

    if let (None, Some(subtotal), Some(tax)) = (out.total, out.subtotal, out.tax) {
        out.total = subtotal.checked_add(tax);
        debug!("Derived total {:?} from subtotal and tax", out.total);
    }

    if out.total.is_none() && !items.is_empty() {
        out.total = items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.amount));
        debug!("Derived total {:?} from {} line items", out.total, items.len());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::RowGrammar;
    use rust_decimal_macros::dec;

    fn item(amount: Decimal) -> LineItem {
        LineItem {
            description: "ITEM".to_string(),
            quantity: 1,
            unit_price: amount,
            amount,
            grammar: RowGrammar::QuantityFirst,
            line: 0,
        }
    }

    #[test]
    fn test_subtotal_from_total_and_tax() {
        let totals = Totals { subtotal: None, tax: Some(dec!(18.00)), total: Some(dec!(118.00)) };
        assert_eq!(reconcile(totals, &[]).subtotal, Some(dec!(100.00)));
    }

    #[test]
    fn test_tax_from_total_and_subtotal() {
        let totals = Totals { subtotal: Some(dec!(100.00)), tax: None, total: Some(dec!(118.00)) };
        assert_eq!(reconcile(totals, &[]).tax, Some(dec!(18.00)));
    }

    #[test]
    fn test_total_from_subtotal_and_tax() {
        let totals = Totals { subtotal: Some(dec!(100.00)), tax: Some(dec!(18.00)), total: None };
        // Subtotal and tax take precedence over the item sum
        assert_eq!(reconcile(totals, &[item(dec!(5.00))]).total, Some(dec!(118.00)));
    }

    #[test]
    fn test_total_from_items() {
        let items = [item(dec!(31.00)), item(dec!(4.50))];
        let reconciled = reconcile(Totals::default(), &items);

        assert_eq!(reconciled.total, Some(dec!(35.50)));
        assert_eq!(reconciled.subtotal, None);
        assert_eq!(reconciled.tax, None);
    }

    #[test]
    fn test_underdetermined_stays_absent() {
        let totals = Totals { subtotal: None, tax: Some(dec!(18.00)), total: None };
        assert_eq!(reconcile(totals, &[]), totals);
        assert_eq!(reconcile(Totals::default(), &[]), Totals::default());
    }

    #[test]
    fn test_complete_totals_untouched() {
        // Inconsistent but complete: nothing is recomputed
        let totals = Totals {
            subtotal: Some(dec!(100.00)),
            tax: Some(dec!(20.00)),
            total: Some(dec!(118.00)),
        };
        assert_eq!(reconcile(totals, &[item(dec!(1.00))]), totals);
    }

    #[test]
    fn test_overflowing_sums_stay_absent() {
        let totals = Totals { subtotal: Some(Decimal::MAX), tax: Some(Decimal::MAX), total: None };
        assert_eq!(reconcile(totals, &[]).total, None);

        let items = [item(Decimal::MAX), item(Decimal::MAX)];
        assert_eq!(reconcile(Totals::default(), &items).total, None);
    }
}
