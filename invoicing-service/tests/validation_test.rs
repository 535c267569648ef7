//! Guest validation and rejected-submission tests for invoicing-service.

mod common;

use common::{fill_valid_guest, seeded_ledger};
use invoicing_service::models::{GuestField, SubmissionStatus, SubmitOutcome, ValidationErrors};

#[test]
fn missing_name_is_the_only_error() {
    let mut ledger = seeded_ledger();
    ledger.update_guest_field(GuestField::Name, "");
    ledger.update_guest_field(GuestField::Email, "a@b.com");
    ledger.update_guest_field(GuestField::RoomNumber, "301");
    ledger.update_guest_field(GuestField::CheckInDate, "2024-01-01");
    ledger.update_guest_field(GuestField::CheckOutDate, "2024-01-05");
    let items_before = ledger.items().to_vec();
    let guest_before = ledger.guest_info().clone();

    let outcome = ledger.submit();

    let mut expected = ValidationErrors::new();
    expected.insert(GuestField::Name, "Guest name is required");
    assert_eq!(outcome, SubmitOutcome::Rejected(expected));
    assert_eq!(ledger.status(), SubmissionStatus::Idle);
    assert_eq!(ledger.items(), items_before.as_slice());
    assert_eq!(ledger.guest_info(), &guest_before);
}

#[test]
fn check_out_before_check_in() {
    let mut ledger = seeded_ledger();
    fill_valid_guest(&mut ledger);
    ledger.update_guest_field(GuestField::CheckInDate, "2024-01-10");
    ledger.update_guest_field(GuestField::CheckOutDate, "2024-01-05");

    let errors = ledger.submit().errors().cloned().expect("rejected");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(GuestField::CheckOutDate),
        Some("Check-out date must be after check-in date")
    );
    assert_eq!(ledger.status(), SubmissionStatus::Idle);
}

#[test]
fn all_rules_are_reported_together() {
    let ledger = seeded_ledger();

    let errors = ledger.validate();

    let fields: Vec<GuestField> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![
            GuestField::Name,
            GuestField::Email,
            GuestField::RoomNumber,
            GuestField::CheckInDate,
            GuestField::CheckOutDate,
        ]
    );
}

#[test]
fn date_order_is_checked_alongside_presence_errors() {
    let mut ledger = seeded_ledger();
    ledger.update_guest_field(GuestField::CheckInDate, "2024-02-01");
    ledger.update_guest_field(GuestField::CheckOutDate, "2024-01-01");

    let errors = ledger.validate();

    assert!(errors.contains(GuestField::Name));
    assert!(!errors.contains(GuestField::CheckInDate));
    assert_eq!(
        errors.get(GuestField::CheckOutDate),
        Some("Check-out date must be after check-in date")
    );
}

#[test]
fn email_format_is_not_checked() {
    let mut ledger = seeded_ledger();
    fill_valid_guest(&mut ledger);
    ledger.update_guest_field(GuestField::Email, "not-an-email");

    assert!(ledger.validate().is_empty());
}

#[test]
fn phone_is_optional() {
    let mut ledger = seeded_ledger();
    fill_valid_guest(&mut ledger);
    ledger.update_guest_field(GuestField::Phone, "");

    assert!(ledger.validate().is_empty());
}

#[test]
fn validate_is_deterministic() {
    let mut ledger = seeded_ledger();
    ledger.update_guest_field(GuestField::Email, "a@b.com");

    let first = ledger.validate();
    ledger.submit();
    ledger.submit();
    let second = ledger.validate();

    assert_eq!(first, second);
    assert_eq!(first, ValidationErrors::for_guest(ledger.guest_info()));
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut ledger = seeded_ledger();
    ledger.submit();
    assert_eq!(ledger.errors().len(), 5);

    ledger.update_guest_field(GuestField::Name, "J");

    assert!(!ledger.errors().contains(GuestField::Name));
    assert_eq!(ledger.errors().len(), 4);
    assert!(ledger.errors().contains(GuestField::Email));
}

#[test]
fn editing_clears_error_even_when_new_value_is_still_invalid() {
    let mut ledger = seeded_ledger();
    ledger.submit();

    ledger.update_guest_field(GuestField::RoomNumber, "   ");

    assert!(!ledger.errors().contains(GuestField::RoomNumber));
    assert!(ledger.validate().contains(GuestField::RoomNumber));
}

#[test]
fn malformed_date_counts_as_missing() {
    let mut ledger = seeded_ledger();
    fill_valid_guest(&mut ledger);
    ledger.update_guest_field(GuestField::CheckInDate, "01/10/2024");

    let errors = ledger.validate();

    assert_eq!(errors.get(GuestField::CheckInDate), Some("Check-in date is required"));
}

#[test]
fn errors_serialize_with_form_keys() {
    let mut ledger = seeded_ledger();
    fill_valid_guest(&mut ledger);
    ledger.update_guest_field(GuestField::RoomNumber, "");

    let json = serde_json::to_value(ledger.validate()).unwrap();

    assert_eq!(json, serde_json::json!({ "roomNumber": "Room number is required" }));
}
