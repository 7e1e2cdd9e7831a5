//! Business logic services for Boom Booking
//!
//! This crate contains the booking rules and the services that apply them.
//!
//! # Architecture
//!
//! - The validator, pricing and availability functions are pure and
//!   synchronous; they take every input explicitly and own no state
//! - `BookingService` orchestrates repositories and re-checks overlaps at
//!   commit time through the repository's conditional insert
//! - All service entry points are instrumented with tracing
//!
//! # Modules
//!
//! - `validator` - Booking admissibility checks and price computation
//! - `phone` - Contact phone format check
//! - `availability` - Free start times for a room on a date
//! - `booking_service` - Validate, quote, create and cancel bookings
//! - `memory_store` - In-memory room and booking repositories

pub mod availability;
pub mod booking_service;
pub mod memory_store;
pub mod phone;
pub mod validator;

pub use availability::available_slots;
pub use booking_service::BookingService;
pub use memory_store::InMemoryBookingStore;
pub use phone::is_valid_phone;
pub use validator::{compute_price, quote, validate};

/// Business logic constants
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Decimal places of the smallest currency unit
    pub const PRICE_DECIMAL_PLACES: u32 = 2;

    /// Upper bound for percentage discounts
    pub const MAX_DISCOUNT_PERCENT: Decimal = dec!(100);

    /// Minutes per billed hour
    pub const MINUTES_PER_HOUR: i64 = 60;

    /// Default spacing between availability slots in minutes
    pub const DEFAULT_SLOT_STEP_MINUTES: i32 = 30;
}
