//! Common test utilities for invoicing-service.

#![allow(dead_code)]

use invoicing_service::models::GuestField;
use invoicing_service::services::InvoiceLedger;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal literal.
pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).expect("valid decimal literal")
}

/// Guest form values that pass validation.
pub const VALID_GUEST: [(GuestField, &str); 6] = [
    (GuestField::Name, "Jane Roe"),
    (GuestField::Email, "a@b.com"),
    (GuestField::Phone, "555-0100"),
    (GuestField::RoomNumber, "301"),
    (GuestField::CheckInDate, "2024-01-01"),
    (GuestField::CheckOutDate, "2024-01-05"),
];

/// Fill every guest field with valid values.
pub fn fill_valid_guest(ledger: &mut InvoiceLedger) {
    for (field, value) in VALID_GUEST {
        ledger.update_guest_field(field, value);
    }
}

/// Ledger seeded with the default room charge at the default tax rate.
pub fn seeded_ledger() -> InvoiceLedger {
    InvoiceLedger::default()
}
