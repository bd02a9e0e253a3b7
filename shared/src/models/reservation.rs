//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Derived from the creation time (Unix millis)
    pub id: String,
    pub name: String,
    pub phone_number: String,
    pub table_number: String,
    /// Creation time; edits never touch it
    pub date: DateTime<Utc>,
}

/// Add/edit reservation payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub table_number: String,
}

impl ReservationForm {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        table_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            table_number: table_number.into(),
        }
    }
}

impl From<&Reservation> for ReservationForm {
    /// Pre-fills the edit form with the record's current values
    fn from(r: &Reservation) -> Self {
        Self {
            name: r.name.clone(),
            phone_number: r.phone_number.clone(),
            table_number: r.table_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reservation_serializes_camel_case() {
        let r = Reservation {
            id: "1708420200000".to_string(),
            name: "Jane Doe".to_string(),
            phone_number: "555-0001".to_string(),
            table_number: "4".to_string(),
            date: Utc.with_ymd_and_hms(2024, 2, 20, 9, 10, 0).unwrap(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["phoneNumber"], "555-0001");
        assert_eq!(json["tableNumber"], "4");
    }

    #[test]
    fn test_form_from_reservation() {
        let r = Reservation {
            id: "1".to_string(),
            name: "A".to_string(),
            phone_number: "B".to_string(),
            table_number: "C".to_string(),
            date: Utc::now(),
        };
        assert_eq!(ReservationForm::from(&r), ReservationForm::new("A", "B", "C"));
    }
}
