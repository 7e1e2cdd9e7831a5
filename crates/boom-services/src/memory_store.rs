//! In-memory room and booking store
//!
//! Backs the repository traits with `parking_lot` locks. The conditional
//! insert holds the booking write lock across the overlap check and the
//! insert, so two concurrent submissions for the same slot cannot both win.

use async_trait::async_trait;
use boom_core::{
    models::{Booking, BookingStatus, ExistingBooking, Room},
    traits::{BookingRepository, RoomRepository},
    AppError, AppResult,
};
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Room and booking store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    rooms: RwLock<BTreeMap<i32, Room>>,
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingStore {
    /// Create a store seeded with rooms
    pub fn new(rooms: Vec<Room>) -> Self {
        info!("Seeding booking store with {} rooms", rooms.len());
        Self {
            rooms: RwLock::new(rooms.into_iter().map(|r| (r.id, r)).collect()),
            bookings: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored bookings (all statuses)
    pub fn booking_count(&self) -> usize {
        self.bookings.read().len()
    }
}

#[async_trait]
impl RoomRepository for InMemoryBookingStore {
    async fn find_room(&self, id: i32) -> AppResult<Option<Room>> {
        Ok(self.rooms.read().get(&id).cloned())
    }

    async fn list_rooms(&self) -> AppResult<Vec<Room>> {
        Ok(self.rooms.read().values().cloned().collect())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn find_booking(&self, id: Uuid) -> AppResult<Option<Booking>> {
        Ok(self.bookings.read().get(&id).cloned())
    }

    async fn bookings_for_room_on(
        &self,
        room_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<ExistingBooking>> {
        let mut found: Vec<ExistingBooking> = self
            .bookings
            .read()
            .values()
            .filter(|b| b.room_id == room_id && b.date == date)
            .map(Booking::to_existing)
            .collect();
        found.sort_by_key(|b| b.start_time);
        Ok(found)
    }

    async fn insert_if_free(&self, booking: Booking) -> AppResult<Booking> {
        let mut bookings = self.bookings.write();

        let window = booking.window();
        let conflicts: Vec<String> = bookings
            .values()
            .filter(|b| b.to_existing().blocks(booking.room_id, booking.date))
            .filter(|b| b.window().overlaps(&window))
            .map(|b| b.id.to_string())
            .collect();

        if !conflicts.is_empty() {
            warn!(
                room_id = booking.room_id,
                date = %booking.date,
                "Slot taken at commit time by {}",
                conflicts.join(", ")
            );
            return Err(AppError::Conflict(format!(
                "Slot {} on {} in room {} was taken by booking(s) {}",
                window,
                booking.date,
                booking.room_id,
                conflicts.join(", ")
            )));
        }

        debug!(id = %booking.id, "Booking inserted");
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn set_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        let mut bookings = self.bookings.write();
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| AppError::BookingNotFound(id.to_string()))?;

        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}
