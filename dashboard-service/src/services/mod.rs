//! Services module for dashboard-service.

pub mod invoice_view;
pub mod shell;
pub mod theme;

pub use invoice_view::{format_currency, tax_label, InvoiceView, LineItemRow, ServiceOption};
pub use shell::DashboardShell;
pub use theme::{Theme, ThemePreferences, DARK_MODE_KEY};
