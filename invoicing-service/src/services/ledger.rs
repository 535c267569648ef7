//! The invoice ledger: line items, guest details and submission state for one
//! invoice in progress.

use rust_decimal::Decimal;
use service_core::error::AppError;
use tracing::{debug, info, instrument, warn};

use crate::config::DEFAULT_TAX_RATE;
use crate::models::{
    check_rate, GuestField, GuestInfo, InvoiceTotals, LineItem, LineItemId, ServiceCatalogEntry,
    SubmissionId, SubmissionStatus, SubmitOutcome, ValidationErrors,
};
use crate::services::metrics::{record_line_item, record_submission, VALIDATION_FAILURES_TOTAL};

pub const DEFAULT_ROOM_DESCRIPTION: &str = "Room Charge - Deluxe King";
pub const DEFAULT_ROOM_RATE: Decimal = Decimal::from_parts(18999, 0, 0, false, 2);

/// Line items plus guest information for a single invoice.
///
/// Invariants:
/// - there is always at least one line item;
/// - every item's `amount == rate * quantity` and `quantity >= 1`;
/// - line item ids are unique and never reused.
#[derive(Debug, Clone)]
pub struct InvoiceLedger {
    items: Vec<LineItem>,
    next_id: u64,
    guest: GuestInfo,
    errors: ValidationErrors,
    tax_rate: Decimal,
    status: SubmissionStatus,
    submission: Option<SubmissionId>,
}

impl Default for InvoiceLedger {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_RATE)
    }
}

impl InvoiceLedger {
    /// New ledger seeded with the standard room charge.
    pub fn new(tax_rate: Decimal) -> Self {
        Self::seeded(DEFAULT_ROOM_DESCRIPTION.to_string(), DEFAULT_ROOM_RATE, tax_rate)
    }

    /// New ledger seeded with a custom room charge.
    pub fn with_room_charge(
        description: impl Into<String>,
        rate: Decimal,
        tax_rate: Decimal,
    ) -> Result<Self, AppError> {
        check_rate(rate)?;
        Ok(Self::seeded(description.into(), rate, tax_rate))
    }

    fn seeded(description: String, rate: Decimal, tax_rate: Decimal) -> Self {
        Self {
            items: vec![LineItem::new(LineItemId(1), description, rate)],
            next_id: 2,
            guest: GuestInfo::default(),
            errors: ValidationErrors::new(),
            tax_rate,
            status: SubmissionStatus::Idle,
            submission: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn guest_info(&self) -> &GuestInfo {
        &self.guest
    }

    /// Errors recorded by the last rejected submission, minus any fields
    /// edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn submission_id(&self) -> Option<SubmissionId> {
        self.submission
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    // -------------------------------------------------------------------------
    // Line Item Operations
    // -------------------------------------------------------------------------

    /// Append an item with quantity 1. Rates outside `0..=MAX_RATE` are
    /// rejected.
    #[instrument(skip(self, description))]
    pub fn add_item(
        &mut self,
        description: impl Into<String>,
        rate: Decimal,
    ) -> Result<LineItemId, AppError> {
        if let Err(e) = check_rate(rate) {
            record_line_item("add", "rejected");
            return Err(e);
        }
        Ok(self.push_item(description.into(), rate))
    }

    /// Append a catalog service with quantity 1.
    pub fn add_service(&mut self, service: &ServiceCatalogEntry) -> LineItemId {
        self.push_item(service.name().to_string(), service.price())
    }

    fn push_item(&mut self, description: String, rate: Decimal) -> LineItemId {
        let id = LineItemId(self.next_id);
        self.next_id += 1;
        self.items.push(LineItem::new(id, description, rate));
        record_line_item("add", "applied");
        info!(line_item_id = %id, rate = %rate, "Line item added");
        id
    }

    /// Remove an item. The sole remaining item and unknown ids are left alone.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        if self.items.len() <= 1 {
            debug!("Refusing to remove the last line item");
            record_line_item("remove", "ignored");
            return false;
        }
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            debug!("Line item not found");
            record_line_item("remove", "ignored");
            return false;
        };
        self.items.remove(index);
        record_line_item("remove", "applied");
        info!(line_item_id = %id, "Line item removed");
        true
    }

    /// Set an item's quantity and recompute its amount. Quantities below 1
    /// and unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, id: LineItemId, new_quantity: i64) -> bool {
        let quantity = match u32::try_from(new_quantity) {
            Ok(q) if q >= 1 => q,
            _ => {
                debug!("Quantity out of range, ignoring");
                record_line_item("set_quantity", "ignored");
                return false;
            }
        };
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            debug!("Line item not found");
            record_line_item("set_quantity", "ignored");
            return false;
        };
        if !item.set_quantity(quantity) {
            warn!(rate = %item.rate(), quantity, "Amount overflow, ignoring");
            record_line_item("set_quantity", "ignored");
            return false;
        }
        record_line_item("set_quantity", "applied");
        debug!(amount = %item.amount(), "Quantity updated");
        true
    }

    // -------------------------------------------------------------------------
    // Guest Information
    // -------------------------------------------------------------------------

    /// Overwrite one guest field and clear its recorded error.
    #[instrument(skip(self, value))]
    pub fn update_guest_field(&mut self, field: GuestField, value: &str) {
        if !self.guest.set_field(field, value) {
            warn!(value = %value, "Unparseable date input, field left empty");
        }
        if self.errors.clear_field(field) {
            debug!("Cleared validation error");
        }
    }

    /// Replace the whole guest record. Recorded errors are kept.
    pub fn set_guest_info(&mut self, guest: GuestInfo) {
        self.guest = guest;
    }

    // -------------------------------------------------------------------------
    // Totals & Validation
    // -------------------------------------------------------------------------

    pub fn compute_totals(&self) -> InvoiceTotals {
        InvoiceTotals::from_items(&self.items, self.tax_rate)
    }

    pub fn validate(&self) -> ValidationErrors {
        ValidationErrors::for_guest(&self.guest)
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate and, if the form is complete, move to `Pending`.
    #[instrument(skip(self), fields(status = %self.status.as_str()))]
    pub fn submit(&mut self) -> SubmitOutcome {
        if let (SubmissionStatus::Pending, Some(id)) = (self.status, self.submission) {
            debug!(submission_id = %id, "Submission already pending");
            record_submission("already_pending");
            return SubmitOutcome::AlreadyPending(id);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            for (field, _) in errors.iter() {
                VALIDATION_FAILURES_TOTAL
                    .with_label_values(&[field.as_str()])
                    .inc();
            }
            info!(error_count = errors.len(), "Submission rejected");
            record_submission("rejected");
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let id = SubmissionId::new();
        self.errors = ValidationErrors::new();
        self.status = SubmissionStatus::Pending;
        self.submission = Some(id);
        record_submission("pending");
        info!(submission_id = %id, total = %self.compute_totals().total, "Submission pending");
        SubmitOutcome::Pending(id)
    }

    /// Completion signal for `id` arrived: `Pending -> Accepted`.
    #[instrument(skip(self), fields(submission_id = %id))]
    pub fn complete_submission(&mut self, id: SubmissionId) -> bool {
        if self.status != SubmissionStatus::Pending || self.submission != Some(id) {
            debug!(status = %self.status.as_str(), "Stale completion signal ignored");
            return false;
        }
        self.status = SubmissionStatus::Accepted;
        record_submission("accepted");
        info!("Submission accepted");
        true
    }

    /// Give up on the pending submission `id`: `Pending -> Idle`. Used when the
    /// host cancelled the wait, so a new submission can start.
    #[instrument(skip(self), fields(submission_id = %id))]
    pub fn abandon_submission(&mut self, id: SubmissionId) -> bool {
        if self.status != SubmissionStatus::Pending || self.submission != Some(id) {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.submission = None;
        record_submission("abandoned");
        info!("Pending submission abandoned");
        true
    }

    /// Hide the acceptance for `id`: `Accepted -> Idle`. Ledger data is kept.
    #[instrument(skip(self), fields(submission_id = %id))]
    pub fn dismiss_acceptance(&mut self, id: SubmissionId) -> bool {
        if self.status != SubmissionStatus::Accepted || self.submission != Some(id) {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        self.submission = None;
        record_submission("dismissed");
        debug!("Acceptance dismissed");
        true
    }
}
