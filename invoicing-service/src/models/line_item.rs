//! Line item model for invoicing-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::fmt;

/// Highest accepted unit rate. Keeps `rate * u32::MAX` and any realistic
/// subtotal well inside `Decimal` range.
pub const MAX_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Reject rates outside `0..=MAX_RATE`.
pub fn check_rate(rate: Decimal) -> Result<(), AppError> {
    if rate < Decimal::ZERO {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Line item rate cannot be negative ({})",
            rate
        )));
    }
    if rate > MAX_RATE {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Line item rate {} exceeds the maximum of {}",
            rate,
            MAX_RATE
        )));
    }
    Ok(())
}

/// Ledger-scoped line item identifier. Never reused within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub u64);

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One billable entry on an invoice.
///
/// `amount` is derived from `rate` and `quantity` and can only change
/// through [`LineItem::set_quantity`], so it never drifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    description: String,
    rate: Decimal,
    quantity: u32,
    amount: Decimal,
}

impl LineItem {
    pub(crate) fn new(id: LineItemId, description: String, rate: Decimal) -> Self {
        Self {
            id,
            description,
            rate,
            quantity: 1,
            amount: rate,
        }
    }

    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Caller guarantees `quantity >= 1`. Leaves the item untouched and
    /// returns `false` if the amount would overflow.
    pub(crate) fn set_quantity(&mut self, quantity: u32) -> bool {
        debug_assert!(quantity >= 1);
        let Some(amount) = Self::calculate_amount(self.rate, quantity) else {
            return false;
        };
        self.quantity = quantity;
        self.amount = amount;
        true
    }

    pub fn calculate_amount(rate: Decimal, quantity: u32) -> Option<Decimal> {
        rate.checked_mul(Decimal::from(quantity))
    }
}
