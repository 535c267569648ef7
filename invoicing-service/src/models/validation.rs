//! Guest information validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use super::{GuestField, GuestInfo};

pub const NAME_REQUIRED: &str = "Guest name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const ROOM_NUMBER_REQUIRED: &str = "Room number is required";
pub const CHECK_IN_REQUIRED: &str = "Check-in date is required";
pub const CHECK_OUT_REQUIRED: &str = "Check-out date is required";
pub const CHECK_OUT_BEFORE_CHECK_IN: &str = "Check-out date must be after check-in date";

/// Field-keyed reasons the guest form cannot be submitted. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<GuestField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: GuestField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: GuestField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: GuestField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error recorded for `field`. Returns whether one existed.
    pub fn clear_field(&mut self, field: GuestField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GuestField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Evaluate every rule against `info`. No rule short-circuits another.
    pub fn for_guest(info: &GuestInfo) -> Self {
        let mut errors = Self::new();

        if let Err(field_errors) = GuestSubmission::from(info).validate() {
            for (name, errs) in field_errors.field_errors() {
                let Some(field) = GuestField::from_string(name.as_ref()) else {
                    continue;
                };
                if let Some(message) = errs.iter().find_map(|e| e.message.as_ref()) {
                    errors.insert(field, message.to_string());
                }
            }
        }

        if let (Some(check_in), Some(check_out)) = (info.check_in_date, info.check_out_date) {
            if check_in > check_out {
                errors.insert(GuestField::CheckOutDate, CHECK_OUT_BEFORE_CHECK_IN);
            }
        }

        errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a GuestField, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, GuestField, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trimmed view of [`GuestInfo`] carrying the per-field presence rules.
#[derive(Debug, Validate)]
struct GuestSubmission {
    #[validate(length(min = 1, message = "Guest name is required"))]
    name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    email: String,
    #[validate(length(min = 1, message = "Room number is required"))]
    room_number: String,
    #[validate(required(message = "Check-in date is required"))]
    check_in_date: Option<NaiveDate>,
    #[validate(required(message = "Check-out date is required"))]
    check_out_date: Option<NaiveDate>,
}

impl From<&GuestInfo> for GuestSubmission {
    fn from(info: &GuestInfo) -> Self {
        Self {
            name: info.name.trim().to_string(),
            email: info.email.trim().to_string(),
            room_number: info.room_number.trim().to_string(),
            check_in_date: info.check_in_date,
            check_out_date: info.check_out_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn complete_guest() -> GuestInfo {
        GuestInfo {
            name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            phone: String::new(),
            room_number: "301".into(),
            check_in_date: date(2024, 1, 1),
            check_out_date: date(2024, 1, 5),
        }
    }

    #[test]
    fn complete_guest_is_valid() {
        assert!(ValidationErrors::for_guest(&complete_guest()).is_empty());
    }

    #[test]
    fn messages_match_field_rules() {
        let errors = ValidationErrors::for_guest(&GuestInfo::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(GuestField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(GuestField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(GuestField::RoomNumber), Some(ROOM_NUMBER_REQUIRED));
        assert_eq!(errors.get(GuestField::CheckInDate), Some(CHECK_IN_REQUIRED));
        assert_eq!(errors.get(GuestField::CheckOutDate), Some(CHECK_OUT_REQUIRED));
        assert!(!errors.contains(GuestField::Phone));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let guest = GuestInfo {
            name: "   ".into(),
            email: "\t".into(),
            ..complete_guest()
        };
        let errors = ValidationErrors::for_guest(&guest);
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(GuestField::Name));
        assert!(errors.contains(GuestField::Email));
    }

    #[test]
    fn same_day_stay_is_valid() {
        let guest = GuestInfo {
            check_out_date: date(2024, 1, 1),
            ..complete_guest()
        };
        assert!(ValidationErrors::for_guest(&guest).is_empty());
    }

    #[test]
    fn clear_field_reports_presence() {
        let mut errors = ValidationErrors::for_guest(&GuestInfo::default());
        assert!(errors.clear_field(GuestField::Name));
        assert!(!errors.clear_field(GuestField::Name));
        assert_eq!(errors.len(), 4);
    }
}
