//! The dashboard shell: current page, sidebar tab, theme and the invoice being
//! edited.

use invoicing_service::services::{init_metrics, InvoiceSession};
use service_core::error::AppError;
use service_core::observability::init_tracing;
use service_core::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::models::{default_quick_stats, NotFoundPage, QuickStat, Route, Tab, TabSelector};
use crate::services::invoice_view::{InvoiceView, ServiceOption};
use crate::services::theme::{Theme, ThemePreferences};

pub struct DashboardShell {
    route: Route,
    tabs: TabSelector,
    theme: ThemePreferences,
    session: InvoiceSession,
}

impl DashboardShell {
    /// Initialise logging and metrics, then build the shell with a file-backed
    /// preference store.
    pub async fn start(config: &DashboardConfig) -> Self {
        init_tracing(
            &config.service_name,
            &config.invoicing.log_level,
            config.invoicing.common.json_logs,
        );
        init_metrics();

        info!(
            version = env!("CARGO_PKG_VERSION"),
            preferences_path = %config.preferences_path.display(),
            tax_rate = %config.invoicing.tax_rate,
            "Starting dashboard-service"
        );

        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&config.preferences_path));
        Self::build(
            store,
            InvoiceSession::new(&config.invoicing),
            config.system_prefers_dark,
        )
        .await
    }

    pub async fn build(
        store: Arc<dyn KeyValueStore>,
        session: InvoiceSession,
        system_prefers_dark: bool,
    ) -> Self {
        Self {
            route: Route::Dashboard,
            tabs: TabSelector::default(),
            theme: ThemePreferences::load(store, system_prefers_dark).await,
            session,
        }
    }

    pub fn navigate(&mut self, path: &str) -> Route {
        self.route = Route::resolve(path);
        debug!(path = %path, route = %self.route.as_str(), "Navigated");
        self.route
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// 404 content when the current route is not the dashboard.
    pub fn not_found_page(&self) -> Option<NotFoundPage> {
        (self.route == Route::NotFound).then(NotFoundPage::default)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tabs.select(tab);
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn quick_stats(&self) -> Vec<QuickStat> {
        default_quick_stats()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn dark_mode(&self) -> bool {
        self.theme.dark_mode()
    }

    pub async fn toggle_dark_mode(&mut self) -> Result<bool, AppError> {
        self.theme.toggle().await
    }

    pub fn session(&self) -> &InvoiceSession {
        &self.session
    }

    pub fn service_options(&self) -> Vec<ServiceOption> {
        ServiceOption::from_catalog(self.session.catalog())
    }

    pub async fn invoice_view(&self) -> InvoiceView {
        InvoiceView::render(&self.session.snapshot().await)
    }
}
