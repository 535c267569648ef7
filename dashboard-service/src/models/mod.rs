//! Domain models for dashboard-service.

mod quick_stat;
mod route;
mod tab;

pub use quick_stat::{default_quick_stats, ChangeKind, QuickStat};
pub use route::{NotFoundPage, Route};
pub use tab::{Tab, TabSelector};
