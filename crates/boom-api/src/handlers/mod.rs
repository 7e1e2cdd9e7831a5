//! HTTP request handlers

pub mod booking;
pub mod room;

pub use booking::configure as configure_bookings;
pub use room::configure as configure_rooms;
