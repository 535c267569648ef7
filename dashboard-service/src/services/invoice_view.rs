//! Display-ready projection of an invoice ledger.

use invoicing_service::models::{
    GuestField, GuestInfo, LineItemId, ServiceCatalog, SubmissionStatus,
};
use invoicing_service::services::InvoiceLedger;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Invoice has been successfully generated and saved!";
pub const SUBMIT_LABEL: &str = "Generate Invoice";
pub const SUBMITTING_LABEL: &str = "Processing...";

/// `$` followed by the amount rounded half away from zero to cents.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Tax row label with the rate as a whole percentage, e.g. `Tax (8%)`.
pub fn tax_label(tax_rate: Decimal) -> String {
    let percent = (tax_rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("Tax ({}%)", percent)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemRow {
    pub id: LineItemId,
    pub description: String,
    pub rate: String,
    pub quantity: u32,
    pub amount: String,
    /// Quantity cannot go below one.
    pub can_decrement: bool,
    /// The last remaining item cannot be removed.
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl ServiceOption {
    pub fn from_catalog(catalog: &ServiceCatalog) -> Vec<Self> {
        catalog
            .entries()
            .iter()
            .map(|entry| ServiceOption {
                id: entry.id().to_string(),
                name: entry.name().to_string(),
                price: format_currency(entry.price()),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub guest: GuestInfo,
    pub field_errors: Vec<(GuestField, String)>,
    pub rows: Vec<LineItemRow>,
    pub subtotal: String,
    pub tax_label: String,
    pub tax_amount: String,
    pub total: String,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub success_banner: Option<&'static str>,
}

impl InvoiceView {
    pub fn render(ledger: &InvoiceLedger) -> Self {
        let removable = ledger.items().len() > 1;
        let rows = ledger
            .items()
            .iter()
            .map(|item| LineItemRow {
                id: item.id(),
                description: item.description().to_string(),
                rate: format_currency(item.rate()),
                quantity: item.quantity(),
                amount: format_currency(item.amount()),
                can_decrement: item.quantity() > 1,
                removable,
            })
            .collect();

        let totals = ledger.compute_totals();
        let pending = ledger.status() == SubmissionStatus::Pending;

        Self {
            guest: ledger.guest_info().clone(),
            field_errors: ledger
                .errors()
                .iter()
                .map(|(field, message)| (field, message.to_string()))
                .collect(),
            rows,
            subtotal: format_currency(totals.subtotal),
            tax_label: tax_label(totals.tax_rate),
            tax_amount: format_currency(totals.tax_amount),
            total: format_currency(totals.total),
            submit_label: if pending { SUBMITTING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: !pending,
            success_banner: (ledger.status() == SubmissionStatus::Accepted)
                .then_some(SUCCESS_MESSAGE),
        }
    }

    pub fn field_error(&self, field: GuestField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }
}
