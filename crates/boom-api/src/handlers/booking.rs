//! Booking handlers
//!
//! HTTP handlers for validating, quoting, creating and cancelling bookings.

use crate::dto::{ApiResponse, BookingCreateRequest, BookingResponse, QuoteResponse};
use crate::SharedBookingService;
use actix_web::{web, HttpResponse};
use boom_core::AppError;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

fn check(req: &BookingCreateRequest) -> Result<(), AppError> {
    req.validate().map_err(|e| {
        warn!("Booking request validation failed: {}", e);
        AppError::Validation(e.to_string())
    })
}

/// Check a booking without committing it
///
/// POST /api/v1/bookings/validate
///
/// Rule violations are part of a successful response.
#[instrument(skip(service, req))]
pub async fn validate_booking(
    service: web::Data<SharedBookingService>,
    req: web::Json<BookingCreateRequest>,
) -> Result<HttpResponse, AppError> {
    check(&req)?;

    debug!(
        room_id = req.room_id,
        date = %req.date,
        start = %req.start_time,
        "Validating booking"
    );

    let result = service.validate(&req.to_booking_request()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}

/// Price a booking
///
/// POST /api/v1/bookings/quote
#[instrument(skip(service, req))]
pub async fn quote_booking(
    service: web::Data<SharedBookingService>,
    req: web::Json<BookingCreateRequest>,
) -> Result<HttpResponse, AppError> {
    check(&req)?;

    let breakdown = service.quote(&req.to_booking_request()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(QuoteResponse::new(
        service.currency(),
        breakdown,
    ))))
}

/// Create a booking
///
/// POST /api/v1/bookings
#[instrument(skip(service, req))]
pub async fn create_booking(
    service: web::Data<SharedBookingService>,
    req: web::Json<BookingCreateRequest>,
) -> Result<HttpResponse, AppError> {
    check(&req)?;

    let booking = service.create_booking(&req.to_booking_request()).await?;

    info!(id = %booking.id, room_id = booking.room_id, "Booking created via API");

    Ok(HttpResponse::Created().json(ApiResponse::with_message(
        BookingResponse::from(booking),
        "Booking created successfully",
    )))
}

/// Get a single booking by ID
///
/// GET /api/v1/bookings/{id}
#[instrument(skip(service))]
pub async fn get_booking(
    service: web::Data<SharedBookingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let booking = service.get_booking(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(BookingResponse::from(booking))))
}

/// Cancel a booking
///
/// POST /api/v1/bookings/{id}/cancel
#[instrument(skip(service))]
pub async fn cancel_booking(
    service: web::Data<SharedBookingService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let booking = service.cancel_booking(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        BookingResponse::from(booking),
        "Booking cancelled",
    )))
}

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .route("", web::post().to(create_booking))
            .route("/validate", web::post().to(validate_booking))
            .route("/quote", web::post().to(quote_booking))
            .route("/{id}", web::get().to(get_booking))
            .route("/{id}/cancel", web::post().to(cancel_booking)),
    );
}
