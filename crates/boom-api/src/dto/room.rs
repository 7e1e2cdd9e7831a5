//! Room DTOs

use boom_core::models::Room;
use rust_decimal::Decimal;
use serde::Serialize;

/// Room response
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    /// Room ID
    pub id: i32,
    /// Display name
    pub name: String,
    /// Maximum number of guests
    pub capacity: i32,
    /// Price per hour
    pub hourly_rate: Decimal,
    /// Calendar color tag
    pub color: String,
    /// Whether the room accepts bookings
    pub enabled: bool,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            capacity: room.capacity,
            hourly_rate: room.hourly_rate,
            color: room.color,
            enabled: room.enabled,
        }
    }
}
