//! Booking validation and pricing
//!
//! Pure functions: every input is passed in, nothing is fetched or cached,
//! and calls may run concurrently without coordination. Rule violations are
//! accumulated into a [`ValidationResult`] rather than returned as errors.

use boom_core::{
    models::{
        BookingRequest, BusinessHours, Discount, ExistingBooking, PriceBreakdown, Room,
        TimeWindow, ValidationReason, ValidationResult,
    },
    AppError, AppResult,
};
use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, error, instrument};
use uuid::Uuid;

use crate::constants::{MAX_DISCOUNT_PERCENT, MINUTES_PER_HOUR, PRICE_DECIMAL_PLACES};
use crate::phone::check_phone;

/// Validate a booking request against opening hours and existing bookings
///
/// `existing` may contain bookings for other rooms or dates and cancelled
/// bookings; only blocking bookings in the request's room and date count.
///
/// # Errors
///
/// Returns `AppError::RoomMismatch` when `room` is not the room the request
/// targets. That is a caller defect; every user-facing problem is reported
/// inside the returned `ValidationResult`.
#[instrument(
    skip_all,
    fields(room_id = request.room_id, date = %request.date, start = %request.start_time)
)]
pub fn validate(
    request: &BookingRequest,
    room: &Room,
    business_hours: &BusinessHours,
    existing: &[ExistingBooking],
) -> AppResult<ValidationResult> {
    if request.room_id != room.id {
        error!(supplied = room.id, "Validator called with the wrong room");
        return Err(AppError::RoomMismatch {
            requested: request.room_id,
            supplied: room.id,
        });
    }

    let mut reasons = pricing_input_reasons(
        room,
        request.duration_minutes,
        request.additional_fee,
        request.discount,
    );

    if room.capacity <= 0 {
        reasons.push(ValidationReason::invalid_input(
            "capacity",
            "room capacity must be greater than zero",
        ));
    }

    if let Some(size) = request.party_size {
        if size <= 0 {
            reasons.push(ValidationReason::invalid_input(
                "party_size",
                "must be at least 1",
            ));
        } else if room.capacity > 0 && !room.fits(size) {
            reasons.push(ValidationReason::CapacityExceeded {
                capacity: room.capacity,
                requested: size,
            });
        }
    }

    if let Some(reason) = check_phone(request.phone.as_deref()) {
        reasons.push(reason);
    }

    if !room.enabled {
        reasons.push(ValidationReason::RoomDisabled { room_id: room.id });
    }

    // Interval checks need a real interval
    if request.duration_minutes > 0 {
        let window = request.window();

        if let Some(reason) = check_business_hours(request.date, &window, business_hours) {
            reasons.push(reason);
        }

        let booking_ids = find_conflicts(room.id, request.date, &window, existing);
        if !booking_ids.is_empty() {
            debug!(conflicts = booking_ids.len(), "Booking overlaps existing bookings");
            reasons.push(ValidationReason::BookingConflict { booking_ids });
        }
    }

    if !reasons.is_empty() {
        debug!(violations = reasons.len(), "Booking request rejected");
        return Ok(ValidationResult::invalid(reasons));
    }

    match compute_price(
        room,
        request.duration_minutes,
        request.additional_fee,
        request.discount,
    ) {
        Ok(total) => {
            debug!(%total, "Booking request admitted");
            Ok(ValidationResult::valid(total))
        }
        Err(reasons) => Ok(ValidationResult::invalid(reasons)),
    }
}

/// Compute the total price of a booking
///
/// `hourly_rate * minutes / 60 + fee`, then the discount, clamped at zero and
/// rounded half-up to cents.
pub fn compute_price(
    room: &Room,
    duration_minutes: i32,
    additional_fee: Decimal,
    discount: Discount,
) -> Result<Decimal, Vec<ValidationReason>> {
    quote(room, duration_minutes, additional_fee, discount).map(|q| q.total)
}

/// Compute the itemised price of a booking
///
/// All intermediate values are kept in sixtieths of a currency unit so the
/// only division happens once, right before rounding.
pub fn quote(
    room: &Room,
    duration_minutes: i32,
    additional_fee: Decimal,
    discount: Discount,
) -> Result<PriceBreakdown, Vec<ValidationReason>> {
    let reasons = pricing_input_reasons(room, duration_minutes, additional_fee, discount);
    if !reasons.is_empty() {
        return Err(reasons);
    }

    let per_hour = Decimal::from(MINUTES_PER_HOUR);
    let overflow = || vec![ValidationReason::invalid_input("price", "amount out of range")];

    let base_x60 = room
        .hourly_rate
        .checked_mul(Decimal::from(duration_minutes))
        .ok_or_else(overflow)?;
    let fee_x60 = additional_fee.checked_mul(per_hour).ok_or_else(overflow)?;
    let subtotal_x60 = base_x60.checked_add(fee_x60).ok_or_else(overflow)?;

    let total = match discount {
        Discount::None => subtotal_x60 / per_hour,
        Discount::Percent(percent) => {
            let kept = MAX_DISCOUNT_PERCENT - percent;
            subtotal_x60.checked_mul(kept).ok_or_else(overflow)? / (per_hour * MAX_DISCOUNT_PERCENT)
        }
        Discount::Fixed(amount) if amount >= subtotal_x60 / per_hour => Decimal::ZERO,
        Discount::Fixed(amount) => {
            let amount_x60 = amount.checked_mul(per_hour).ok_or_else(overflow)?;
            subtotal_x60.checked_sub(amount_x60).ok_or_else(overflow)? / per_hour
        }
    };

    let total = to_cents(total.max(Decimal::ZERO));
    let subtotal = to_cents(subtotal_x60 / per_hour);

    Ok(PriceBreakdown {
        base: to_cents(base_x60 / per_hour),
        additional_fee: to_cents(additional_fee),
        subtotal,
        discount_amount: to_cents(subtotal - total),
        total,
    })
}

/// Round half-up to the smallest currency unit and fix the scale at two places
fn to_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_DECIMAL_PLACES);
    rounded
}

/// Preconditions shared by validation and pricing
fn pricing_input_reasons(
    room: &Room,
    duration_minutes: i32,
    additional_fee: Decimal,
    discount: Discount,
) -> Vec<ValidationReason> {
    let mut reasons = Vec::new();

    if duration_minutes <= 0 {
        reasons.push(ValidationReason::invalid_input(
            "duration_minutes",
            "must be greater than zero",
        ));
    }

    if room.hourly_rate < Decimal::ZERO {
        reasons.push(ValidationReason::invalid_input(
            "hourly_rate",
            "must not be negative",
        ));
    }

    if additional_fee < Decimal::ZERO {
        reasons.push(ValidationReason::invalid_input(
            "additional_fee",
            "must not be negative",
        ));
    }

    match discount {
        Discount::Percent(p) if p < Decimal::ZERO || p > MAX_DISCOUNT_PERCENT => {
            reasons.push(ValidationReason::invalid_input(
                "discount",
                "percentage must be between 0 and 100",
            ));
        }
        Discount::Fixed(amount) if amount < Decimal::ZERO => {
            reasons.push(ValidationReason::invalid_input(
                "discount",
                "fixed amount must not be negative",
            ));
        }
        _ => {}
    }

    reasons
}

fn check_business_hours(
    date: NaiveDate,
    requested: &TimeWindow,
    business_hours: &BusinessHours,
) -> Option<ValidationReason> {
    let weekday = date.weekday();
    match business_hours.for_weekday(weekday) {
        Some(hours) if hours.contains(requested) => None,
        Some(hours) => Some(ValidationReason::OutsideBusinessHours {
            weekday,
            requested: *requested,
            open_hours: Some(hours.window()),
        }),
        None => Some(ValidationReason::OutsideBusinessHours {
            weekday,
            requested: *requested,
            open_hours: None,
        }),
    }
}

/// Ids of blocking bookings in the same room and date that overlap `requested`
fn find_conflicts(
    room_id: i32,
    date: NaiveDate,
    requested: &TimeWindow,
    existing: &[ExistingBooking],
) -> Vec<Uuid> {
    existing
        .iter()
        .filter(|b| b.blocks(room_id, date))
        .filter(|b| b.window().overlaps(requested))
        .map(|b| b.id)
        .collect()
}
