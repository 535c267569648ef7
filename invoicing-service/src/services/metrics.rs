//! Prometheus metrics for invoicing-service.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter, register_counter_vec, register_histogram, Counter, CounterVec, Histogram,
    TextEncoder,
};

/// Line item mutations by operation and outcome.
pub static LINE_ITEM_OPERATIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_line_item_operations_total",
        "Total number of line item operations",
        &["operation", "outcome"] // add|remove|set_quantity, applied|ignored|rejected
    )
    .expect("Failed to register line_item_operations_total")
});

/// Submission attempts and transitions by outcome.
pub static SUBMISSIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_submissions_total",
        "Total number of submission events by outcome",
        &["outcome"]
    )
    .expect("Failed to register submissions_total")
});

/// Validation failures by guest field.
pub static VALIDATION_FAILURES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_validation_failures_total",
        "Total number of validation failures by field",
        &["field"]
    )
    .expect("Failed to register validation_failures_total")
});

/// Time between a submission going pending and its completion signal.
pub static SUBMISSION_WAIT_DURATION: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "invoicing_submission_wait_seconds",
        "Seconds spent waiting for the completion signal",
        vec![0.1, 0.25, 0.5, 1.0, 1.5, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register submission_wait_seconds")
});

/// Sum of accepted invoice totals.
pub static INVOICE_AMOUNT_TOTAL: Lazy<Counter> = Lazy::new(|| {
    register_counter!(
        "invoicing_invoice_amount_total",
        "Total amount of accepted invoices"
    )
    .expect("Failed to register invoice_amount_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&LINE_ITEM_OPERATIONS_TOTAL);
    Lazy::force(&SUBMISSIONS_TOTAL);
    Lazy::force(&VALIDATION_FAILURES_TOTAL);
    Lazy::force(&SUBMISSION_WAIT_DURATION);
    Lazy::force(&INVOICE_AMOUNT_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}

pub(crate) fn record_line_item(operation: &str, outcome: &str) {
    LINE_ITEM_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

pub(crate) fn record_submission(outcome: &str) {
    SUBMISSIONS_TOTAL.with_label_values(&[outcome]).inc();
}
