//! Room model
//!
//! A bookable karaoke room. Rooms are reference data owned by the settings
//! store; the booking path only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier
    pub id: i32,

    /// Display name (e.g., "Room A")
    pub name: String,

    /// Maximum number of guests
    pub capacity: i32,

    /// Rental price per hour
    pub hourly_rate: Decimal,

    /// Calendar color tag (e.g., "#3B82F6")
    #[serde(default)]
    pub color: String,

    /// Whether the room currently accepts bookings
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Room {
    /// Check whether a party of the given size fits in the room
    #[inline]
    pub fn fits(&self, party_size: i32) -> bool {
        party_size <= self.capacity
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            capacity: 1,
            hourly_rate: Decimal::ZERO,
            color: String::new(),
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fits() {
        let room = Room {
            id: 1,
            name: "Room A".to_string(),
            capacity: 8,
            hourly_rate: dec!(25.00),
            ..Default::default()
        };

        assert!(room.fits(8));
        assert!(room.fits(1));
        assert!(!room.fits(9));
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let room: Room = serde_json::from_str(
            r#"{"id": 2, "name": "Room B", "capacity": 4, "hourly_rate": "30.00"}"#,
        )
        .unwrap();

        assert!(room.enabled);
        assert_eq!(room.hourly_rate, dec!(30.00));
        assert!(room.color.is_empty());
    }
}
