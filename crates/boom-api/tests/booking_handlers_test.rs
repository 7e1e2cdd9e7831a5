//! Integration tests for booking and room handlers
//!
//! Runs the handlers against the in-memory store. Opening hours are
//! 09:00-23:00 Monday to Saturday, closed on Sunday.

use actix_web::{http::StatusCode, test, web, App};
use boom_api::{configure_bookings, configure_rooms, SharedBookingService};
use boom_core::config::BookingConfig;
use boom_core::models::{BusinessHours, DailyHours, Room};
use boom_services::{BookingService, InMemoryBookingStore};
use chrono::{NaiveTime, Weekday};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::sync::Arc;

fn service() -> web::Data<SharedBookingService> {
    let store = Arc::new(InMemoryBookingStore::new(vec![
        Room {
            id: 1,
            name: "Room A".to_string(),
            capacity: 6,
            hourly_rate: dec!(25.00),
            color: "#3B82F6".to_string(),
            enabled: true,
        },
        Room {
            id: 2,
            name: "Room B".to_string(),
            capacity: 10,
            hourly_rate: dec!(40.00),
            color: "#10B981".to_string(),
            enabled: false,
        },
    ]));

    let mut business_hours = BusinessHours::every_day(DailyHours::new(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    ));
    business_hours.set(Weekday::Sun, None);

    let config = BookingConfig {
        business_hours,
        slot_step_minutes: 60,
        ..Default::default()
    };

    web::Data::new(BookingService::new(store.clone(), store, &config))
}

macro_rules! app {
    ($service:expr) => {
        test::init_service(
            App::new().app_data($service.clone()).service(
                web::scope("/api/v1")
                    .configure(configure_bookings)
                    .configure(configure_rooms),
            ),
        )
        .await
    };
}

fn booking(start: &str, minutes: i32) -> Value {
    json!({
        "room_id": 1,
        "date": "2024-01-01",
        "start_time": start,
        "duration_minutes": minutes,
        "phone": "5551234567"
    })
}

#[actix_web::test]
async fn test_validate_priced_booking() {
    let service = service();
    let app = app!(service);

    let mut payload = booking("14:00", 120);
    payload["additional_fee"] = json!("10");
    payload["discount"] = json!({"type": "percent", "value": "10"});

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/validate")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["outcome"], "valid");
    assert_eq!(body["data"]["total_price"], "54.00");
    assert_eq!(body["data"]["reasons"], json!([]));
}

#[actix_web::test]
async fn test_validate_reports_all_violations() {
    let service = service();
    let app = app!(service);

    let mut payload = booking("22:30", 60);
    payload["phone"] = json!("0123");
    payload["party_size"] = json!(9);

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/validate")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["outcome"], "invalid");
    let codes: Vec<&str> = body["data"]["reasons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        vec!["capacity_exceeded", "invalid_phone_format", "outside_business_hours"]
    );
    assert!(body["data"].get("total_price").is_none());
}

#[actix_web::test]
async fn test_create_conflict_and_touching_boundary() {
    let service = service();
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking("14:00", 120))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let first_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["end_time"], "16:00");
    assert_eq!(body["data"]["total_price"], "50.00");

    // overlapping request names the existing booking
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking("15:00", 120))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "booking_rejected");
    assert_eq!(body["reasons"][0]["code"], "booking_conflict");
    assert_eq!(body["reasons"][0]["booking_ids"][0], first_id.as_str());

    // starting exactly when the first one ends is fine
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking("16:00", 60))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_get_and_cancel_booking() {
    let service = service();
    let app = app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking("10:00", 60))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{}", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "confirmed");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/cancel", id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "cancelled");

    let req = test::TestRequest::get()
        .uri("/api/v1/bookings/6f1c1f4e-0000-4000-8000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_quote_and_bad_requests() {
    let service = service();
    let app = app!(service);

    let mut payload = booking("10:00", 60);
    payload["discount"] = json!({"type": "fixed", "value": "5"});
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/quote")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["currency"], "USD");
    assert_eq!(body["data"]["subtotal"], "25.00");
    assert_eq!(body["data"]["total"], "20.00");

    // malformed pricing input
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/quote")
        .set_json(booking("10:00", -15))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // unknown room
    let mut payload = booking("10:00", 60);
    payload["room_id"] = json!(77);
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/validate")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // DTO validation
    let mut payload = booking("10:00", 60);
    payload["room_id"] = json!(0);
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings/validate")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_rooms_and_availability() {
    let service = service();
    let app = app!(service);

    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][1]["enabled"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(booking("09:00", 600))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/rooms/1/availability?date=2024-01-01&duration_minutes=120")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["slots"], json!(["19:00", "20:00", "21:00"]));

    // Sunday is closed
    let req = test::TestRequest::get()
        .uri("/api/v1/rooms/1/availability?date=2024-01-07")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["slots"], json!([]));

    let req = test::TestRequest::get().uri("/api/v1/business-hours").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["monday"]["open"], "09:00");
    assert_eq!(body["data"]["sunday"], Value::Null);

    let req = test::TestRequest::get().uri("/api/v1/rooms/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
