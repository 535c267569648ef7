//! Domain models for invoicing-service.

mod catalog;
mod guest_info;
mod line_item;
mod submission;
mod totals;
mod validation;

pub use catalog::{ServiceCatalog, ServiceCatalogEntry};
pub use guest_info::{parse_date_input, GuestField, GuestInfo, DATE_FORMAT};
pub use line_item::{check_rate, LineItem, LineItemId, MAX_RATE};
pub use submission::{SubmissionId, SubmissionStatus, SubmitOutcome};
pub use totals::InvoiceTotals;
pub use validation::{
    ValidationErrors, CHECK_IN_REQUIRED, CHECK_OUT_BEFORE_CHECK_IN, CHECK_OUT_REQUIRED,
    EMAIL_REQUIRED, NAME_REQUIRED, ROOM_NUMBER_REQUIRED,
};
