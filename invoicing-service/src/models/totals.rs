//! Derived invoice totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Subtotal, tax and total for a set of line items. Always derived, never
/// stored alongside the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

impl InvoiceTotals {
    pub fn from_items(items: &[LineItem], tax_rate: Decimal) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::amount).sum();
        let tax_amount = subtotal * tax_rate;
        Self {
            subtotal,
            tax_rate,
            tax_amount,
            total: subtotal + tax_amount,
        }
    }
}
