//! Common test utilities for dashboard-service.

#![allow(dead_code)]

use dashboard_service::services::DashboardShell;
use invoicing_service::models::GuestField;
use invoicing_service::services::{InvoiceLedger, InvoiceSession, ManualSignal};
use service_core::storage::{KeyValueStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;

pub const BANNER: Duration = Duration::from_secs(3);

pub struct TestShell {
    pub shell: DashboardShell,
    pub store: Arc<MemoryStore>,
    pub signal: Arc<ManualSignal>,
}

impl TestShell {
    /// Shell over an in-memory store and a manually fired completion signal.
    pub async fn spawn(system_prefers_dark: bool) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::spawn_with_store(store, system_prefers_dark).await
    }

    pub async fn spawn_with_store(store: Arc<MemoryStore>, system_prefers_dark: bool) -> Self {
        let signal = Arc::new(ManualSignal::new());
        let session =
            InvoiceSession::with_signal(InvoiceLedger::default(), signal.clone(), BANNER);
        let kv: Arc<dyn KeyValueStore> = store.clone();
        let shell = DashboardShell::build(kv, session, system_prefers_dark).await;
        Self {
            shell,
            store,
            signal,
        }
    }

    pub async fn fill_valid_guest(&self) {
        let session = self.shell.session();
        session.update_guest_field(GuestField::Name, "Jane Roe").await;
        session.update_guest_field(GuestField::Email, "a@b.com").await;
        session.update_guest_field(GuestField::RoomNumber, "301").await;
        session.update_guest_field(GuestField::CheckInDate, "2024-01-01").await;
        session.update_guest_field(GuestField::CheckOutDate, "2024-01-05").await;
    }
}
