//! Booking service
//!
//! Orchestrates the booking flows on top of the repositories:
//! - Validate a request against a fresh snapshot of the room's bookings
//! - Quote a price without committing
//! - Create a booking through the repository's conditional insert, which
//!   re-checks overlaps at commit time
//! - Cancel bookings so their slot becomes free again

use boom_core::{
    config::BookingConfig,
    models::{
        Booking, BookingRequest, BookingStatus, BusinessHours, PriceBreakdown, Room,
        ValidationResult,
    },
    traits::{BookingRepository, RoomRepository},
    AppError, AppResult,
};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::availability::available_slots;
use crate::constants::DEFAULT_SLOT_STEP_MINUTES;
use crate::validator;

/// Booking service
///
/// Business hours and slot spacing are configuration handed in at
/// construction; rooms and bookings come from the repositories.
pub struct BookingService<B: BookingRepository, R: RoomRepository> {
    booking_repo: Arc<B>,
    room_repo: Arc<R>,
    business_hours: BusinessHours,
    slot_step_minutes: i32,
    currency: String,
}

impl<B: BookingRepository, R: RoomRepository> BookingService<B, R> {
    /// Create a new booking service
    pub fn new(booking_repo: Arc<B>, room_repo: Arc<R>, config: &BookingConfig) -> Self {
        Self {
            booking_repo,
            room_repo,
            business_hours: config.business_hours.clone(),
            slot_step_minutes: if config.slot_step_minutes > 0 {
                config.slot_step_minutes
            } else {
                DEFAULT_SLOT_STEP_MINUTES
            },
            currency: config.currency.clone(),
        }
    }

    /// Configured weekly opening hours
    pub fn business_hours(&self) -> &BusinessHours {
        &self.business_hours
    }

    /// Currency code all prices are expressed in
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Load a room or fail with `RoomNotFound`
    pub async fn room(&self, room_id: i32) -> AppResult<Room> {
        self.room_repo
            .find_room(room_id)
            .await?
            .ok_or(AppError::RoomNotFound(room_id))
    }

    /// List all rooms
    pub async fn rooms(&self) -> AppResult<Vec<Room>> {
        self.room_repo.list_rooms().await
    }

    /// Validate a request against the current bookings of its room and date
    #[instrument(skip(self, request), fields(room_id = request.room_id, date = %request.date))]
    pub async fn validate(&self, request: &BookingRequest) -> AppResult<ValidationResult> {
        let room = self.room(request.room_id).await?;
        let existing = self
            .booking_repo
            .bookings_for_room_on(request.room_id, request.date)
            .await?;

        debug!(existing = existing.len(), "Validating against booking snapshot");
        validator::validate(request, &room, &self.business_hours, &existing)
    }

    /// Price a request without checking availability
    ///
    /// # Errors
    ///
    /// `AppError::Rejected` when the pricing inputs are malformed.
    #[instrument(skip(self, request), fields(room_id = request.room_id))]
    pub async fn quote(&self, request: &BookingRequest) -> AppResult<PriceBreakdown> {
        let room = self.room(request.room_id).await?;
        validator::quote(
            &room,
            request.duration_minutes,
            request.additional_fee,
            request.discount,
        )
        .map_err(AppError::Rejected)
    }

    /// Validate and commit a booking
    ///
    /// # Errors
    ///
    /// - `AppError::Rejected` with every violated rule
    /// - `AppError::Conflict` when another booking took the slot between
    ///   validation and commit
    #[instrument(skip(self, request), fields(room_id = request.room_id, date = %request.date))]
    pub async fn create_booking(&self, request: &BookingRequest) -> AppResult<Booking> {
        let result = self.validate(request).await?;

        if !result.is_valid() {
            warn!(
                violations = result.reasons.len(),
                "Booking rejected by validation"
            );
            return Err(AppError::Rejected(result.reasons));
        }

        let total_price = result
            .total_price
            .ok_or_else(|| AppError::Internal("valid result without a price".to_string()))?;

        let booking = self
            .booking_repo
            .insert_if_free(Booking::from_request(request, total_price))
            .await?;

        info!(
            id = %booking.id,
            start = %booking.start_time,
            minutes = booking.duration_minutes,
            total = %booking.total_price,
            "Booking created"
        );

        Ok(booking)
    }

    /// Get a booking by ID
    pub async fn get_booking(&self, id: Uuid) -> AppResult<Booking> {
        self.booking_repo
            .find_booking(id)
            .await?
            .ok_or_else(|| AppError::BookingNotFound(id.to_string()))
    }

    /// Cancel a booking; cancelling twice is a no-op
    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: Uuid) -> AppResult<Booking> {
        let booking = self.get_booking(id).await?;
        if booking.status == BookingStatus::Cancelled {
            debug!("Booking already cancelled");
            return Ok(booking);
        }

        let cancelled = self
            .booking_repo
            .set_status(id, BookingStatus::Cancelled)
            .await?;
        info!(id = %id, "Booking cancelled");
        Ok(cancelled)
    }

    /// Start times at which a booking of the given length would fit
    #[instrument(skip(self))]
    pub async fn availability(
        &self,
        room_id: i32,
        date: NaiveDate,
        duration_minutes: i32,
    ) -> AppResult<Vec<NaiveTime>> {
        let room = self.room(room_id).await?;
        let existing = self.booking_repo.bookings_for_room_on(room_id, date).await?;

        Ok(available_slots(
            &room,
            date,
            &self.business_hours,
            &existing,
            duration_minutes,
            self.slot_step_minutes,
        ))
    }
}
