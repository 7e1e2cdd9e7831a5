//! Business hours model
//!
//! Per-weekday opening windows. A missing entry means the venue is closed
//! all day.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::hhmm;
use super::time_window::{minute_of_day, TimeWindow, MINUTES_PER_DAY};

/// Opening window for a single day
///
/// A `close` of `00:00` means midnight at the end of the day. Windows never
/// span midnight: a close that is not after the open yields an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    #[serde(with = "hhmm")]
    pub open: NaiveTime,

    #[serde(with = "hhmm")]
    pub close: NaiveTime,
}

impl DailyHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Opening window in minutes since midnight
    pub fn window(&self) -> TimeWindow {
        let start = minute_of_day(self.open);
        let end = match minute_of_day(self.close) {
            0 => MINUTES_PER_DAY,
            end => end,
        };
        TimeWindow::new(start, end.max(start))
    }

    /// True when the requested window lies entirely inside opening hours
    #[inline]
    pub fn contains(&self, requested: &TimeWindow) -> bool {
        requested.within(&self.window())
    }
}

/// Weekly business hours
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub monday: Option<DailyHours>,
    pub tuesday: Option<DailyHours>,
    pub wednesday: Option<DailyHours>,
    pub thursday: Option<DailyHours>,
    pub friday: Option<DailyHours>,
    pub saturday: Option<DailyHours>,
    pub sunday: Option<DailyHours>,
}

impl BusinessHours {
    /// Same opening window on every day of the week
    pub fn every_day(hours: DailyHours) -> Self {
        Self {
            monday: Some(hours),
            tuesday: Some(hours),
            wednesday: Some(hours),
            thursday: Some(hours),
            friday: Some(hours),
            saturday: Some(hours),
            sunday: Some(hours),
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DailyHours> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    pub fn for_date(&self, date: NaiveDate) -> Option<&DailyHours> {
        self.for_weekday(date.weekday())
    }

    /// Replace the hours for one weekday (`None` closes it)
    pub fn set(&mut self, weekday: Weekday, hours: Option<DailyHours>) {
        let slot = match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = hours;
    }
}
