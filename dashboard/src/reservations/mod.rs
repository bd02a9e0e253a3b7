//! Reservation book
//!
//! Reservations are created with the current time as both their id source
//! and their `date`. Editing replaces name, phone and table only; the date is
//! the creation time and never changes.

use crate::utils::FieldError;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Reservation, ReservationForm};
use shared::util::MonotonicIds;
use shared::{AppError, ErrorCode};
use std::collections::HashSet;
use thiserror::Error;

/// Reservation book errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Reservation not found: {0}")]
    NotFound(String),

    #[error("Duplicate reservation id: {0}")]
    Duplicate(String),

    #[error("No reservation ids left after the highest existing one")]
    IdsExhausted,
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::Field(e) => e.into(),
            ReservationError::NotFound(id) => {
                AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
            }
            ReservationError::Duplicate(id) => {
                AppError::already_exists(format!("Reservation {}", id))
            }
            e @ ReservationError::IdsExhausted => AppError::internal(e.to_string()),
        }
    }
}

/// Sort order by reservation date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationOrder {
    #[default]
    Newest,
    Oldest,
}

impl ReservationOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }
}

/// Check every required field of the form, in form order
pub fn validate_form(form: &ReservationForm) -> Result<(), FieldError> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.phone_number, "phoneNumber", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&form.table_number, "tableNumber", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// Reservations in insertion order
#[derive(Debug, Clone, Default)]
pub struct ReservationBook {
    reservations: Vec<Reservation>,
    ids: MonotonicIds,
}

impl ReservationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing reservations, rejecting duplicate ids
    pub fn from_reservations(reservations: Vec<Reservation>) -> Result<Self, ReservationError> {
        let mut seen = HashSet::new();
        let mut ids = MonotonicIds::new();
        for r in &reservations {
            if !seen.insert(r.id.as_str()) {
                return Err(ReservationError::Duplicate(r.id.clone()));
            }
            if let Ok(numeric) = r.id.parse::<i64>() {
                ids.observe(numeric);
            }
        }
        Ok(Self { reservations, ids })
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Add a reservation created now
    pub fn add_reservation(
        &mut self,
        form: ReservationForm,
    ) -> Result<Reservation, ReservationError> {
        self.add_reservation_at(form, Utc::now())
    }

    /// Add a reservation created at `now`
    pub fn add_reservation_at(
        &mut self,
        form: ReservationForm,
        now: DateTime<Utc>,
    ) -> Result<Reservation, ReservationError> {
        if let Err(e) = validate_form(&form) {
            tracing::warn!(error = %e, "Reservation rejected");
            return Err(e.into());
        }

        let Some(id) = self.ids.next(now.timestamp_millis()) else {
            tracing::error!("Reservation ids exhausted");
            return Err(ReservationError::IdsExhausted);
        };
        let id = id.to_string();
        let reservation = Reservation {
            id,
            name: form.name,
            phone_number: form.phone_number,
            table_number: form.table_number,
            date: now,
        };
        self.reservations.push(reservation.clone());

        tracing::info!(
            reservation_id = %reservation.id,
            table_number = %reservation.table_number,
            "Reservation added"
        );
        Ok(reservation)
    }

    /// Replace name, phone and table of reservation `id`; `date` is kept
    pub fn edit_reservation(
        &mut self,
        id: &str,
        form: ReservationForm,
    ) -> Result<Reservation, ReservationError> {
        if let Err(e) = validate_form(&form) {
            tracing::warn!(reservation_id = %id, error = %e, "Reservation update rejected");
            return Err(e.into());
        }

        let slot = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))?;

        slot.name = form.name;
        slot.phone_number = form.phone_number;
        slot.table_number = form.table_number;

        tracing::info!(reservation_id = %id, "Reservation updated");
        Ok(slot.clone())
    }

    /// All reservations sorted by date
    ///
    /// Reservations sharing a date keep insertion order.
    pub fn sorted(&self, order: ReservationOrder) -> Vec<&Reservation> {
        let mut result: Vec<&Reservation> = self.reservations.iter().collect();
        match order {
            ReservationOrder::Newest => result.sort_by(|a, b| b.date.cmp(&a.date)),
            ReservationOrder::Oldest => result.sort_by(|a, b| a.date.cmp(&b.date)),
        }
        result
    }
}
