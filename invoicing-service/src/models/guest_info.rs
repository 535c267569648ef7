//! Guest information model for invoicing-service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Form key format for dates, matching HTML date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The stay being billed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
}

/// Editable guest field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuestField {
    Name,
    Email,
    Phone,
    RoomNumber,
    CheckInDate,
    CheckOutDate,
}

impl GuestField {
    pub const ALL: [GuestField; 6] = [
        GuestField::Name,
        GuestField::Email,
        GuestField::Phone,
        GuestField::RoomNumber,
        GuestField::CheckInDate,
        GuestField::CheckOutDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GuestField::Name => "name",
            GuestField::Email => "email",
            GuestField::Phone => "phone",
            GuestField::RoomNumber => "roomNumber",
            GuestField::CheckInDate => "checkInDate",
            GuestField::CheckOutDate => "checkOutDate",
        }
    }

    /// Accepts both the form key (`roomNumber`) and the struct field name
    /// (`room_number`).
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "name" => Some(GuestField::Name),
            "email" => Some(GuestField::Email),
            "phone" => Some(GuestField::Phone),
            "roomNumber" | "room_number" => Some(GuestField::RoomNumber),
            "checkInDate" | "check_in_date" => Some(GuestField::CheckInDate),
            "checkOutDate" | "check_out_date" => Some(GuestField::CheckOutDate),
            _ => None,
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, GuestField::CheckInDate | GuestField::CheckOutDate)
    }
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a date input value. Empty or malformed input is treated as absent.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

impl GuestInfo {
    /// Current value of a field as it would appear in the form.
    pub fn field_value(&self, field: GuestField) -> String {
        match field {
            GuestField::Name => self.name.clone(),
            GuestField::Email => self.email.clone(),
            GuestField::Phone => self.phone.clone(),
            GuestField::RoomNumber => self.room_number.clone(),
            GuestField::CheckInDate => format_date(self.check_in_date),
            GuestField::CheckOutDate => format_date(self.check_out_date),
        }
    }

    /// Overwrite a field from raw form input.
    ///
    /// Returns `false` when a non-empty date value could not be parsed; the
    /// field is still overwritten (with "absent").
    pub(crate) fn set_field(&mut self, field: GuestField, value: &str) -> bool {
        match field {
            GuestField::Name => self.name = value.to_string(),
            GuestField::Email => self.email = value.to_string(),
            GuestField::Phone => self.phone = value.to_string(),
            GuestField::RoomNumber => self.room_number = value.to_string(),
            GuestField::CheckInDate | GuestField::CheckOutDate => {
                let parsed = parse_date_input(value);
                let well_formed = parsed.is_some() || value.trim().is_empty();
                if field == GuestField::CheckInDate {
                    self.check_in_date = parsed;
                } else {
                    self.check_out_date = parsed;
                }
                return well_formed;
            }
        }
        true
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_round_trip() {
        for field in GuestField::ALL {
            assert_eq!(GuestField::from_string(field.as_str()), Some(field));
        }
        assert_eq!(GuestField::from_string("room_number"), Some(GuestField::RoomNumber));
        assert_eq!(GuestField::from_string("nickname"), None);
    }

    #[test]
    fn date_input_parsing() {
        assert_eq!(
            parse_date_input("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
        assert_eq!(parse_date_input("  "), None);
        assert_eq!(parse_date_input("05/01/2024"), None);
    }

    #[test]
    fn set_field_reports_malformed_dates() {
        let mut info = GuestInfo::default();
        assert!(info.set_field(GuestField::CheckInDate, "2024-01-01"));
        assert_eq!(info.field_value(GuestField::CheckInDate), "2024-01-01");

        assert!(!info.set_field(GuestField::CheckInDate, "tomorrow"));
        assert_eq!(info.check_in_date, None);

        assert!(info.set_field(GuestField::CheckInDate, ""));
        assert_eq!(info.check_in_date, None);
    }
}
