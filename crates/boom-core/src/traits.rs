//! Common traits for repositories
//!
//! Rooms and bookings are owned by external stores. The services only talk
//! to them through these traits so an in-memory store and a database-backed
//! one are interchangeable.

use crate::error::AppError;
use crate::models::{Booking, BookingStatus, ExistingBooking, Room};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Read access to room reference data
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID
    async fn find_room(&self, id: i32) -> Result<Option<Room>, AppError>;

    /// List all rooms ordered by ID
    async fn list_rooms(&self) -> Result<Vec<Room>, AppError>;
}

/// Booking store with a guarded write path
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_booking(&self, id: Uuid) -> Result<Option<Booking>, AppError>;

    /// Snapshot of bookings in a room on a date (all statuses)
    async fn bookings_for_room_on(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<ExistingBooking>, AppError>;

    /// Insert a booking only if its slot is still free
    ///
    /// The overlap check and the insert must be atomic with respect to other
    /// writers. Returns `AppError::Conflict` when another booking got there first.
    async fn insert_if_free(&self, booking: Booking) -> Result<Booking, AppError>;

    /// Change the status of a booking
    async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError>;
}
