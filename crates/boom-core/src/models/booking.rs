//! Booking models
//!
//! Requests to book a room, the bookings already holding slots, and the
//! committed booking record.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::hhmm;
use super::time_window::TimeWindow;

/// Price reduction applied to the fee-inclusive subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// No discount
    #[default]
    None,
    /// Percentage off the subtotal (0-100)
    Percent(Decimal),
    /// Fixed amount off the subtotal
    Fixed(Decimal),
}

impl Discount {
    /// True when no reduction applies
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Discount::None)
    }
}

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation, already holds the slot
    Pending,
    /// Confirmed booking
    #[default]
    Confirmed,
    /// Cancelled, slot released
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl BookingStatus {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Check if a booking in this status occupies its slot
    pub fn is_blocking(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// A proposed booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Room to book
    pub room_id: i32,

    /// Calendar date of the booking
    pub date: NaiveDate,

    /// Wall-clock start time
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    /// Length of the booking in minutes (must be > 0)
    pub duration_minutes: i32,

    /// Customer display name
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Customer contact phone (digits only)
    #[serde(default)]
    pub phone: Option<String>,

    /// Number of guests
    #[serde(default)]
    pub party_size: Option<i32>,

    /// Flat surcharge added to the base price
    #[serde(default)]
    pub additional_fee: Decimal,

    /// Discount applied after fees
    #[serde(default)]
    pub discount: Discount,
}

impl BookingRequest {
    /// Minimal request with no fees, discount or contact details
    pub fn new(room_id: i32, date: NaiveDate, start_time: NaiveTime, duration_minutes: i32) -> Self {
        Self {
            room_id,
            date,
            start_time,
            duration_minutes,
            customer_name: None,
            phone: None,
            party_size: None,
            additional_fee: Decimal::ZERO,
            discount: Discount::None,
        }
    }

    /// Requested `[start, end)` window
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.start_time, i64::from(self.duration_minutes))
    }

    /// Phone number, treating an empty string as absent
    pub fn contact_phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }
}

/// A booking already holding a slot, as seen by the overlap check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub id: Uuid,
    pub room_id: i32,
    pub date: NaiveDate,

    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    pub duration_minutes: i32,

    #[serde(default)]
    pub status: BookingStatus,
}

impl ExistingBooking {
    /// Occupied `[start, end)` window
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.start_time, i64::from(self.duration_minutes))
    }

    /// Check if this booking occupies time in the given room on the given date
    pub fn blocks(&self, room_id: i32, date: NaiveDate) -> bool {
        self.status.is_blocking() && self.room_id == room_id && self.date == date
    }
}

/// Committed booking record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier (UUID)
    pub id: Uuid,

    pub room_id: i32,
    pub date: NaiveDate,

    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    pub duration_minutes: i32,
    pub customer_name: Option<String>,
    pub phone: Option<String>,
    pub party_size: Option<i32>,
    pub additional_fee: Decimal,
    pub discount: Discount,

    /// Price computed at commit time
    pub total_price: Decimal,

    pub status: BookingStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a confirmed booking from an admitted request
    pub fn from_request(request: &BookingRequest, total_price: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            room_id: request.room_id,
            date: request.date,
            start_time: request.start_time,
            duration_minutes: request.duration_minutes,
            customer_name: request.customer_name.clone(),
            phone: request.contact_phone().map(str::to_string),
            party_size: request.party_size,
            additional_fee: request.additional_fee,
            discount: request.discount,
            total_price,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Occupied `[start, end)` window
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::starting_at(self.start_time, i64::from(self.duration_minutes))
    }

    /// View used by the overlap check
    pub fn to_existing(&self) -> ExistingBooking {
        ExistingBooking {
            id: self.id,
            room_id: self.room_id,
            date: self.date,
            start_time: self.start_time,
            duration_minutes: self.duration_minutes,
            status: self.status,
        }
    }
}
