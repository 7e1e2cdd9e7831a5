//! Validation result model
//!
//! Rule violations are returned as data so callers can render every problem
//! at once instead of handling the first one as an error.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::time_window::TimeWindow;

/// Overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid,
}

/// A single violated booking rule
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationReason {
    /// Structurally malformed request (non-positive duration, negative amounts, ...)
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Phone present but not 8-16 digits with a leading 1-9
    #[error("Invalid phone number '{phone}': expected 8 to 16 digits not starting with 0")]
    InvalidPhoneFormat { phone: String },

    /// Requested interval not inside the day's opening window
    #[error("{}", describe_outside_hours(.weekday, .requested, .open_hours))]
    OutsideBusinessHours {
        weekday: Weekday,
        requested: TimeWindow,
        /// `None` when the venue is closed all day
        open_hours: Option<TimeWindow>,
    },

    /// Overlaps one or more existing bookings in the same room
    #[error("Overlaps existing booking(s): {}", join_ids(.booking_ids))]
    BookingConflict { booking_ids: Vec<Uuid> },

    /// Room is not accepting bookings
    #[error("Room {room_id} is disabled")]
    RoomDisabled { room_id: i32 },

    /// Party does not fit in the room
    #[error("Party of {requested} exceeds room capacity of {capacity}")]
    CapacityExceeded { capacity: i32, requested: i32 },
}

fn describe_outside_hours(
    weekday: &Weekday,
    requested: &TimeWindow,
    open_hours: &Option<TimeWindow>,
) -> String {
    match open_hours {
        Some(open) => format!(
            "Requested {} on {} is outside business hours {}",
            requested, weekday, open
        ),
        None => format!("Closed all day on {}", weekday),
    }
}

fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationReason {
    /// Create an invalid-input reason
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationReason::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable code for API consumers
    pub fn code(&self) -> &'static str {
        match self {
            ValidationReason::InvalidInput { .. } => "invalid_input",
            ValidationReason::InvalidPhoneFormat { .. } => "invalid_phone_format",
            ValidationReason::OutsideBusinessHours { .. } => "outside_business_hours",
            ValidationReason::BookingConflict { .. } => "booking_conflict",
            ValidationReason::RoomDisabled { .. } => "room_disabled",
            ValidationReason::CapacityExceeded { .. } => "capacity_exceeded",
        }
    }
}

/// Result of validating a booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub outcome: ValidationOutcome,

    /// Every violated rule; empty when valid
    pub reasons: Vec<ValidationReason>,

    /// Total price, present only when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
}

impl ValidationResult {
    pub fn valid(total_price: Decimal) -> Self {
        Self {
            outcome: ValidationOutcome::Valid,
            reasons: Vec::new(),
            total_price: Some(total_price),
        }
    }

    pub fn invalid(reasons: Vec<ValidationReason>) -> Self {
        Self {
            outcome: ValidationOutcome::Invalid,
            reasons,
            total_price: None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.outcome == ValidationOutcome::Valid
    }

    /// Check whether a reason with the given code was reported
    pub fn has(&self, code: &str) -> bool {
        self.reasons.iter().any(|r| r.code() == code)
    }

    /// Ids of the bookings reported as conflicting
    pub fn conflicting_ids(&self) -> Vec<Uuid> {
        self.reasons
            .iter()
            .filter_map(|r| match r {
                ValidationReason::BookingConflict { booking_ids } => Some(booking_ids.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

/// Itemised price of a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Hourly rate times duration
    pub base: Decimal,
    pub additional_fee: Decimal,
    /// Base plus fee
    pub subtotal: Decimal,
    /// Amount actually taken off the subtotal
    pub discount_amount: Decimal,
    /// Final amount, never negative
    pub total: Decimal,
}
