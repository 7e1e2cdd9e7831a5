//! API layer for Boom Booking
//!
//! HTTP handlers for room lookup, booking validation, quoting and creation.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;

use boom_services::{BookingService, InMemoryBookingStore};

/// Booking service as registered in application data
pub type SharedBookingService = BookingService<InMemoryBookingStore, InMemoryBookingStore>;

// Re-export DTOs (common types)
pub use dto::ApiResponse;

// Re-export handler configuration functions
pub use handlers::{configure_bookings, configure_rooms};
