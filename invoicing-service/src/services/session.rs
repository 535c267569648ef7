//! Async driver around [`InvoiceLedger`].
//!
//! The session owns the ledger behind a mutex so edits keep flowing while a
//! submission waits on its completion signal.

use rust_decimal::prelude::ToPrimitive;
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, instrument, Instrument};

use crate::config::InvoicingConfig;
use crate::models::{
    GuestField, InvoiceTotals, LineItemId, ServiceCatalog, SubmissionId, SubmissionStatus,
    SubmitOutcome, ValidationErrors,
};
use crate::services::ledger::InvoiceLedger;
use crate::services::metrics::{INVOICE_AMOUNT_TOTAL, SUBMISSION_WAIT_DURATION};
use crate::services::signal::{CompletionSignal, TimerSignal};

/// Shared invoice-in-progress plus the collaborators needed to submit it.
#[derive(Clone)]
pub struct InvoiceSession {
    ledger: Arc<Mutex<InvoiceLedger>>,
    signal: Arc<dyn CompletionSignal>,
    catalog: Arc<ServiceCatalog>,
    success_display: Duration,
}

impl InvoiceSession {
    /// Session with a freshly seeded ledger and a timer-driven completion.
    pub fn new(config: &InvoicingConfig) -> Self {
        Self::with_signal(
            InvoiceLedger::new(config.tax_rate),
            Arc::new(TimerSignal::new(config.submission_delay)),
            config.success_display,
        )
    }

    pub fn with_signal(
        ledger: InvoiceLedger,
        signal: Arc<dyn CompletionSignal>,
        success_display: Duration,
    ) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            signal,
            catalog: Arc::new(ServiceCatalog::default()),
            success_display,
        }
    }

    pub fn with_catalog(mut self, catalog: ServiceCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Copy of the ledger as it is right now.
    pub async fn snapshot(&self) -> InvoiceLedger {
        self.ledger.lock().await.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.ledger.lock().await.status()
    }

    pub async fn add_item(
        &self,
        description: impl Into<String>,
        rate: rust_decimal::Decimal,
    ) -> Result<LineItemId, AppError> {
        self.ledger.lock().await.add_item(description, rate)
    }

    /// Add the catalog service with the given id.
    #[instrument(skip(self))]
    pub async fn add_service(&self, service_id: &str) -> Result<LineItemId, AppError> {
        let service = self.catalog.find(service_id).ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("Unknown service '{}'", service_id))
        })?;
        Ok(self.ledger.lock().await.add_service(service))
    }

    pub async fn remove_item(&self, id: LineItemId) -> bool {
        self.ledger.lock().await.remove_item(id)
    }

    pub async fn set_quantity(&self, id: LineItemId, quantity: i64) -> bool {
        self.ledger.lock().await.set_quantity(id, quantity)
    }

    pub async fn update_guest_field(&self, field: GuestField, value: &str) {
        self.ledger.lock().await.update_guest_field(field, value)
    }

    pub async fn compute_totals(&self) -> InvoiceTotals {
        self.ledger.lock().await.compute_totals()
    }

    pub async fn validate(&self) -> ValidationErrors {
        self.ledger.lock().await.validate()
    }

    /// Return a pending submission to `Idle` after its handle was cancelled.
    /// Has no effect once the submission was accepted.
    pub async fn abandon_submission(&self, id: SubmissionId) -> bool {
        self.ledger.lock().await.abandon_submission(id)
    }

    /// Submit the ledger. When validation passes, a background task waits for
    /// the completion signal exactly once, marks the submission accepted, and
    /// clears the acceptance again after the success display period.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmissionHandle {
        let outcome = self.ledger.lock().await.submit();
        let SubmitOutcome::Pending(id) = outcome else {
            return SubmissionHandle::finished(outcome);
        };

        let (accepted_tx, accepted_rx) = oneshot::channel();
        let ledger = Arc::clone(&self.ledger);
        let signal = Arc::clone(&self.signal);
        let success_display = self.success_display;

        let task = tokio::spawn(
            async move {
                let started = tokio::time::Instant::now();
                signal.wait(id).await;
                SUBMISSION_WAIT_DURATION.observe(started.elapsed().as_secs_f64());

                let accepted = {
                    let mut ledger = ledger.lock().await;
                    let accepted = ledger.complete_submission(id);
                    if accepted {
                        let total = ledger.compute_totals().total;
                        INVOICE_AMOUNT_TOTAL.inc_by(total.to_f64().unwrap_or_default());
                    }
                    accepted
                };
                // The handle may have been dropped; acceptance stands either way.
                let _ = accepted_tx.send(accepted);
                if !accepted {
                    return;
                }

                tokio::time::sleep(success_display).await;
                ledger.lock().await.dismiss_acceptance(id);
            }
            .instrument(tracing::info_span!("submission", submission_id = %id)),
        );

        info!(submission_id = %id, "Submission started");
        SubmissionHandle {
            outcome,
            accepted: Some(accepted_rx),
            task: Some(task),
        }
    }
}

/// Tracks one call to [`InvoiceSession::submit`].
#[derive(Debug)]
pub struct SubmissionHandle {
    outcome: SubmitOutcome,
    accepted: Option<oneshot::Receiver<bool>>,
    task: Option<JoinHandle<()>>,
}

impl SubmissionHandle {
    fn finished(outcome: SubmitOutcome) -> Self {
        Self {
            outcome,
            accepted: None,
            task: None,
        }
    }

    pub fn outcome(&self) -> &SubmitOutcome {
        &self.outcome
    }

    pub fn submission_id(&self) -> Option<SubmissionId> {
        self.outcome.submission_id()
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.outcome.errors()
    }

    /// Whether this call started a new submission.
    pub fn is_started(&self) -> bool {
        self.task.is_some()
    }

    /// Wait until the submission started by this call is accepted.
    ///
    /// Returns `false` straight away when nothing was started, and `false`
    /// if the submission was cancelled before its signal fired. Only the
    /// first call waits; later calls return `false`.
    pub async fn accepted(&mut self) -> bool {
        match self.accepted.take() {
            Some(rx) => rx.await.unwrap_or(false),
            None => false,
        }
    }

    /// Stop waiting for the completion signal. A submission cancelled before
    /// the signal fires stays pending, so later submits report
    /// `AlreadyPending` until the host calls
    /// [`InvoiceSession::abandon_submission`] with this submission's id.
    pub fn cancel(&self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
