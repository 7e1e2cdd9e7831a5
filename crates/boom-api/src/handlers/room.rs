//! Room handlers
//!
//! Room lookup, availability and business hours.

use crate::dto::{ApiResponse, AvailabilityQuery, AvailabilityResponse, RoomResponse};
use crate::SharedBookingService;
use actix_web::{web, HttpResponse};
use boom_core::AppError;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// List rooms
///
/// GET /api/v1/rooms
#[instrument(skip(service))]
pub async fn list_rooms(
    service: web::Data<SharedBookingService>,
) -> Result<HttpResponse, AppError> {
    let rooms: Vec<RoomResponse> = service
        .rooms()
        .await?
        .into_iter()
        .map(RoomResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(rooms)))
}

/// Get a single room by ID
///
/// GET /api/v1/rooms/{id}
#[instrument(skip(service))]
pub async fn get_room(
    service: web::Data<SharedBookingService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let room = service.room(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(RoomResponse::from(room))))
}

/// Free start times for a room on a date
///
/// GET /api/v1/rooms/{id}/availability?date=YYYY-MM-DD&duration_minutes=N
#[instrument(skip(service))]
pub async fn room_availability(
    service: web::Data<SharedBookingService>,
    path: web::Path<i32>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate().map_err(|e| {
        warn!("Availability query validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let room_id = path.into_inner();
    debug!(room_id, date = %query.date, minutes = query.duration_minutes, "Listing availability");

    let slots = service
        .availability(room_id, query.date, query.duration_minutes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse::new(
        room_id,
        query.date,
        query.duration_minutes,
        &slots,
    ))))
}

/// Weekly business hours
///
/// GET /api/v1/business-hours
pub async fn business_hours(service: web::Data<SharedBookingService>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(service.business_hours()))
}

/// Configure room routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rooms")
            .route("", web::get().to(list_rooms))
            .route("/{id}", web::get().to(get_room))
            .route("/{id}/availability", web::get().to(room_availability)),
    )
    .route("/business-hours", web::get().to(business_hours));
}
