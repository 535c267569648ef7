//! Services module for invoicing-service.

pub mod ledger;
pub mod metrics;
pub mod session;
pub mod signal;

pub use ledger::{InvoiceLedger, DEFAULT_ROOM_DESCRIPTION, DEFAULT_ROOM_RATE};
pub use metrics::{get_metrics, init_metrics};
pub use session::{InvoiceSession, SubmissionHandle};
pub use signal::{CompletionSignal, ManualSignal, TimerSignal};
