//! Free start times for a room on a given date

use boom_core::models::{BusinessHours, ExistingBooking, Room, TimeWindow};
use chrono::{NaiveDate, NaiveTime};

/// List start times at which a booking of `duration_minutes` would be admitted
///
/// Candidates start at opening time and advance by `step_minutes`. A slot is
/// kept when the whole interval fits before closing and no blocking booking
/// in the room overlaps it. Closed days, disabled rooms and non-positive
/// durations or steps yield no slots.
pub fn available_slots(
    room: &Room,
    date: NaiveDate,
    business_hours: &BusinessHours,
    existing: &[ExistingBooking],
    duration_minutes: i32,
    step_minutes: i32,
) -> Vec<NaiveTime> {
    if !room.enabled || duration_minutes <= 0 || step_minutes <= 0 {
        return Vec::new();
    }

    let Some(hours) = business_hours.for_date(date) else {
        return Vec::new();
    };

    let open = hours.window();
    let duration = i64::from(duration_minutes);
    let step = i64::from(step_minutes);

    let taken: Vec<TimeWindow> = existing
        .iter()
        .filter(|b| b.blocks(room.id, date))
        .map(ExistingBooking::window)
        .collect();

    let mut slots = Vec::new();
    let mut start = open.start;
    while start + duration <= open.end {
        let candidate = TimeWindow::new(start, start + duration);
        if !taken.iter().any(|t| t.overlaps(&candidate)) {
            if let Some(time) = candidate.start_time() {
                slots.push(time);
            }
        }
        start += step;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use boom_core::models::{BookingStatus, DailyHours};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn room() -> Room {
        Room {
            id: 1,
            name: "Room A".to_string(),
            capacity: 6,
            hourly_rate: dec!(25),
            ..Default::default()
        }
    }

    fn evening_hours() -> BusinessHours {
        let mut week = BusinessHours::default();
        week.monday = Some(DailyHours::new(at(18, 0), at(22, 0)));
        week
    }

    #[test]
    fn test_empty_day() {
        let slots = available_slots(&room(), monday(), &evening_hours(), &[], 60, 60);
        assert_eq!(slots, vec![at(18, 0), at(19, 0), at(20, 0), at(21, 0)]);
    }

    #[test]
    fn test_skips_taken_time_but_allows_touching() {
        let taken = ExistingBooking {
            id: Uuid::new_v4(),
            room_id: 1,
            date: monday(),
            start_time: at(19, 0),
            duration_minutes: 90,
            status: BookingStatus::Confirmed,
        };

        let slots = available_slots(&room(), monday(), &evening_hours(), &[taken], 60, 30);
        // 19:00-20:30 is taken; 18:00 ends exactly at 19:00, 20:30 starts exactly at its end
        assert_eq!(slots, vec![at(18, 0), at(20, 30), at(21, 0)]);
    }

    #[test]
    fn test_cancelled_bookings_free_their_slot() {
        let cancelled = ExistingBooking {
            id: Uuid::new_v4(),
            room_id: 1,
            date: monday(),
            start_time: at(18, 0),
            duration_minutes: 240,
            status: BookingStatus::Cancelled,
        };

        let slots = available_slots(&room(), monday(), &evening_hours(), &[cancelled], 120, 60);
        assert_eq!(slots, vec![at(18, 0), at(19, 0), at(20, 0)]);
    }

    #[test]
    fn test_no_slots() {
        let tuesday = monday().succ_opt().unwrap();
        assert!(available_slots(&room(), tuesday, &evening_hours(), &[], 60, 30).is_empty());
        assert!(available_slots(&room(), monday(), &evening_hours(), &[], 0, 30).is_empty());
        assert!(available_slots(&room(), monday(), &evening_hours(), &[], 60, 0).is_empty());
        assert!(available_slots(&room(), monday(), &evening_hours(), &[], 300, 30).is_empty());

        let disabled = Room {
            enabled: false,
            ..room()
        };
        assert!(available_slots(&disabled, monday(), &evening_hours(), &[], 60, 30).is_empty());
    }
}
