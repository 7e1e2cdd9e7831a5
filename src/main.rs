//! Boom Booking Server
//!
//! Serves booking validation, pricing and room availability over HTTP.
//! Rooms and business hours come from configuration.

use actix_cors::Cors;
use actix_web::{http::header, middleware, web, App, HttpResponse, HttpServer};
use anyhow::Context;
use boom_api::{configure_bookings, configure_rooms, SharedBookingService};
use boom_core::{AppConfig, AppError};
use boom_services::{BookingService, InMemoryBookingStore};
use std::env;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "boom-booking",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Configure API routes
fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // Health check
            .route("/health", web::get().to(health_check))
            // Rooms, availability and business hours
            .configure(configure_rooms)
            // Booking validation, quotes and commits
            .configure(configure_bookings),
    );
}

/// Initialize tracing/logging
fn init_tracing(config: &AppConfig) {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| config.logging.level.clone());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "boom_booking={},boom_api={},boom_services={},boom_core={},actix_web=info",
            log_level, log_level, log_level, log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.logging.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize logging
    init_tracing(&config);

    info!("Starting Boom Booking v{}", env!("CARGO_PKG_VERSION"));

    if config.booking.rooms.is_empty() {
        warn!("No rooms configured; every booking request will fail with room_not_found");
    }

    let store = Arc::new(InMemoryBookingStore::new(config.booking.rooms.clone()));
    let service: web::Data<SharedBookingService> = web::Data::new(BookingService::new(
        store.clone(),
        store,
        &config.booking,
    ));

    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    let cors_origins = config.server.cors_origins.clone();

    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    HttpServer::new(move || {
        // Configure CORS - clone cors_origins for each worker
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origins: Vec<&str> = cors_origins_inner.split(',').collect();
                if let Ok(origin_str) = origin.to_str() {
                    origins.iter().any(|o| o.trim() == origin_str)
                } else {
                    false
                }
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(service.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            // Middleware
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::trim())
            // Configure routes
            .configure(configure_routes)
            // Root redirect to health
            .route(
                "/",
                web::get().to(|| async {
                    HttpResponse::Found()
                        .append_header(("Location", "/api/v1/health"))
                        .finish()
                }),
            )
    })
    .workers(workers)
    .bind(&bind_addr)
    .with_context(|| format!("failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
