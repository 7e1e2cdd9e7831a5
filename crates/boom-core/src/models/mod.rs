//! Domain models for Boom Booking
//!
//! This module contains all the core domain models used throughout the application.

pub mod booking;
pub mod business_hours;
pub mod hhmm;
pub mod room;
pub mod time_window;
pub mod validation;

pub use booking::{Booking, BookingRequest, BookingStatus, Discount, ExistingBooking};
pub use business_hours::{BusinessHours, DailyHours};
pub use room::Room;
pub use time_window::{format_minute, TimeWindow, MINUTES_PER_DAY};
pub use validation::{PriceBreakdown, ValidationOutcome, ValidationReason, ValidationResult};
