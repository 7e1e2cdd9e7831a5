//! Serde helpers for wall-clock times written as `"HH:MM"`.
//!
//! Seconds are accepted on input (`"HH:MM:SS"`) but never emitted.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";
const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

/// Parse `"HH:MM"` or `"HH:MM:SS"`
pub fn parse(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, FORMAT_WITH_SECONDS))
        .ok()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_forms() {
        assert_eq!(parse("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse("23:00:00"), NaiveTime::from_hms_opt(23, 0, 0));
        assert_eq!(parse(" 07:05 "), NaiveTime::from_hms_opt(7, 5, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse("25:00"), None);
        assert_eq!(parse("9am"), None);
        assert_eq!(parse(""), None);
    }
}
