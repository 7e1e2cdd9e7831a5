//! Half-open time intervals measured in minutes since midnight
//!
//! Windows are anchored to a single calendar date. A window may end past
//! [`MINUTES_PER_DAY`] when a booking runs over midnight; such a window can
//! never fit inside a business-hours window.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of minutes in a calendar day
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// `[start, end)` interval in minutes since midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Inclusive start minute
    pub start: i64,
    /// Exclusive end minute
    pub end: i64,
}

/// Minutes elapsed since midnight for a wall-clock time
#[inline]
pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight() / 60)
}

impl TimeWindow {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window starting at `start` and lasting `duration_minutes`
    pub fn starting_at(start: NaiveTime, duration_minutes: i64) -> Self {
        let start = minute_of_day(start);
        Self {
            start,
            end: start + duration_minutes,
        }
    }

    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Strict overlap: windows that only touch at a boundary do not overlap
    #[inline]
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// True when `self` lies entirely inside `outer`
    #[inline]
    pub fn within(&self, outer: &TimeWindow) -> bool {
        !outer.is_empty() && self.start >= outer.start && self.end <= outer.end
    }

    /// Start as a wall-clock time, if it falls on the window's day
    pub fn start_time(&self) -> Option<NaiveTime> {
        to_time(self.start)
    }
}

/// Render a minute offset as `HH:MM` (hours may exceed 23)
pub fn format_minute(minute: i64) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn to_time(minute: i64) -> Option<NaiveTime> {
    if !(0..MINUTES_PER_DAY).contains(&minute) {
        return None;
    }
    NaiveTime::from_hms_opt((minute / 60) as u32, (minute % 60) as u32, 0)
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_minute(self.start), format_minute(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_starting_at() {
        let window = TimeWindow::starting_at(at(14, 0), 120);
        assert_eq!(window, TimeWindow::new(840, 960));
        assert_eq!(window.duration_minutes(), 120);
        assert_eq!(window.to_string(), "14:00-16:00");
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let first = TimeWindow::starting_at(at(14, 0), 120);
        let second = TimeWindow::starting_at(at(16, 0), 60);
        assert!(!first.overlaps(&second));
        assert!(!second.overlaps(&first));
    }

    #[test]
    fn test_overlap() {
        let first = TimeWindow::starting_at(at(14, 0), 120);
        let second = TimeWindow::starting_at(at(15, 0), 120);
        let inner = TimeWindow::starting_at(at(14, 30), 15);
        assert!(first.overlaps(&second));
        assert!(first.overlaps(&inner));
        assert!(inner.overlaps(&first));
    }

    #[test]
    fn test_within() {
        let hours = TimeWindow::new(9 * 60, 23 * 60);
        assert!(TimeWindow::starting_at(at(9, 0), 60).within(&hours));
        assert!(TimeWindow::starting_at(at(22, 0), 60).within(&hours));
        assert!(!TimeWindow::starting_at(at(22, 30), 60).within(&hours));
        assert!(!TimeWindow::starting_at(at(8, 59), 30).within(&hours));
        assert!(!TimeWindow::new(600, 660).within(&TimeWindow::new(600, 600)));
    }

    #[test]
    fn test_past_midnight_display() {
        let window = TimeWindow::starting_at(at(23, 30), 60);
        assert_eq!(window.end, 1470);
        assert_eq!(window.to_string(), "23:30-24:30");
        assert_eq!(TimeWindow::new(1470, 1500).start_time(), None);
    }
}
