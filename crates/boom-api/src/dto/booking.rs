//! Booking DTOs
//!
//! Request and response types for booking endpoints. Business rules are not
//! enforced here: a negative duration or a malformed phone still reaches the
//! validator so it can be reported alongside every other problem.

use boom_core::models::{
    format_minute, hhmm, Booking, BookingRequest, BookingStatus, Discount, PriceBreakdown,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Booking submission (used for validate, quote and create)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingCreateRequest {
    /// Room to book
    #[validate(range(min = 1, message = "Room ID must be positive"))]
    pub room_id: i32,

    /// Booking date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Start time (HH:MM)
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    /// Duration in minutes
    pub duration_minutes: i32,

    /// Customer name
    #[serde(default)]
    #[validate(length(max = 100, message = "Customer name is too long"))]
    pub customer_name: Option<String>,

    /// Contact phone
    #[serde(default)]
    #[validate(length(max = 32, message = "Phone is too long"))]
    pub phone: Option<String>,

    /// Number of guests
    #[serde(default)]
    pub party_size: Option<i32>,

    /// Additional fee (default: 0)
    #[serde(default)]
    pub additional_fee: Decimal,

    /// Discount (default: none)
    #[serde(default)]
    pub discount: Discount,
}

impl BookingCreateRequest {
    /// Convert to the domain request
    pub fn to_booking_request(&self) -> BookingRequest {
        BookingRequest {
            room_id: self.room_id,
            date: self.date,
            start_time: self.start_time,
            duration_minutes: self.duration_minutes,
            customer_name: self
                .customer_name
                .as_ref()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            phone: self.phone.clone(),
            party_size: self.party_size,
            additional_fee: self.additional_fee,
            discount: self.discount,
        }
    }
}

/// Booking response
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    /// Booking ID
    pub id: Uuid,
    /// Room ID
    pub room_id: i32,
    /// Booking date
    pub date: NaiveDate,
    /// Start time (HH:MM)
    pub start_time: String,
    /// End time (HH:MM)
    pub end_time: String,
    /// Duration in minutes
    pub duration_minutes: i32,
    /// Customer name
    pub customer_name: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Number of guests
    pub party_size: Option<i32>,
    /// Additional fee
    pub additional_fee: Decimal,
    /// Discount applied (omitted when none)
    #[serde(skip_serializing_if = "Discount::is_none")]
    pub discount: Discount,
    /// Total price
    pub total_price: Decimal,
    /// Booking status
    pub status: BookingStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let window = booking.window();

        Self {
            id: booking.id,
            room_id: booking.room_id,
            date: booking.date,
            start_time: format_minute(window.start),
            end_time: format_minute(window.end),
            duration_minutes: booking.duration_minutes,
            customer_name: booking.customer_name,
            phone: booking.phone,
            party_size: booking.party_size,
            additional_fee: booking.additional_fee,
            discount: booking.discount,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

/// Quote response
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    /// Currency code of every amount
    pub currency: String,
    /// Itemised price
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
}

impl QuoteResponse {
    /// Attach the configured currency to a breakdown
    pub fn new(currency: &str, breakdown: PriceBreakdown) -> Self {
        Self {
            currency: currency.to_string(),
            breakdown,
        }
    }
}

/// Availability query parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AvailabilityQuery {
    /// Date to check (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Desired booking length (default: 60)
    #[serde(default = "default_duration")]
    #[validate(range(min = 1, max = 1440, message = "Duration must be between 1 and 1440 minutes"))]
    pub duration_minutes: i32,
}

fn default_duration() -> i32 {
    60
}

/// Availability response
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    /// Room ID
    pub room_id: i32,
    /// Date checked
    pub date: NaiveDate,
    /// Requested length in minutes
    pub duration_minutes: i32,
    /// Free start times (HH:MM)
    pub slots: Vec<String>,
}

impl AvailabilityResponse {
    /// Build from the service result
    pub fn new(room_id: i32, date: NaiveDate, duration_minutes: i32, slots: &[NaiveTime]) -> Self {
        Self {
            room_id,
            date,
            duration_minutes,
            slots: slots.iter().map(|t| t.format("%H:%M").to_string()).collect(),
        }
    }
}
