//! Metrics tests for invoicing-service.

mod common;

use common::{fill_valid_guest, seeded_ledger};
use invoicing_service::models::LineItemId;
use invoicing_service::services::metrics::{
    LINE_ITEM_OPERATIONS_TOTAL, SUBMISSIONS_TOTAL, VALIDATION_FAILURES_TOTAL,
};
use invoicing_service::services::{get_metrics, init_metrics};
use serial_test::serial;

fn line_item_count(operation: &str, outcome: &str) -> f64 {
    LINE_ITEM_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .get()
}

fn submission_count(outcome: &str) -> f64 {
    SUBMISSIONS_TOTAL.with_label_values(&[outcome]).get()
}

#[test]
#[serial]
fn ignored_operations_are_counted() {
    let mut ledger = seeded_ledger();
    let room_id = ledger.items()[0].id();
    let removes_before = line_item_count("remove", "ignored");
    let quantities_before = line_item_count("set_quantity", "ignored");

    ledger.remove_item(room_id);
    ledger.remove_item(LineItemId(99));
    ledger.set_quantity(room_id, 0);

    assert_eq!(line_item_count("remove", "ignored") - removes_before, 2.0);
    assert_eq!(line_item_count("set_quantity", "ignored") - quantities_before, 1.0);
}

#[test]
#[serial]
fn submissions_are_counted_by_outcome() {
    let mut ledger = seeded_ledger();
    let rejected_before = submission_count("rejected");
    let pending_before = submission_count("pending");
    let name_failures_before = VALIDATION_FAILURES_TOTAL
        .with_label_values(&["name"])
        .get();

    ledger.submit();
    fill_valid_guest(&mut ledger);
    ledger.submit();

    assert_eq!(submission_count("rejected") - rejected_before, 1.0);
    assert_eq!(submission_count("pending") - pending_before, 1.0);
    assert_eq!(
        VALIDATION_FAILURES_TOTAL.with_label_values(&["name"]).get() - name_failures_before,
        1.0
    );
}

#[test]
#[serial]
fn exposition_lists_registered_metrics() {
    init_metrics();
    seeded_ledger().add_item("Parking", common::dec("19.99")).unwrap();

    let text = get_metrics();

    assert!(text.contains("# TYPE invoicing_line_item_operations_total counter"));
    assert!(text.contains("invoicing_submission_wait_seconds"));
}
