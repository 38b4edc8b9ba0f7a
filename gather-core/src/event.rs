//! Event records and their parsed schedule.
//!
//! The API transports an event's date and time as two loosely-typed
//! strings. They are parsed exactly once, at the boundary, into a
//! `Schedule` that carries a parse-failure variant instead of panicking.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A community event as the API returns it.
///
/// `id` and `created_at` are server-assigned and absent until the event
/// has been persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local wall-clock time, `HH:mm`. A trailing seconds component is
    /// tolerated and ignored.
    pub time: String,
    pub location: String,
    pub organizer_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Event {
    /// Parse the date/time fields into a schedule.
    pub fn schedule(&self) -> Schedule {
        Schedule::parse(&self.date, &self.time)
    }
}

/// An event's position in time, combined from its `date` and `time`
/// fields. No timezone is attached: client and server share a local clock.
///
/// A record with mangled fields becomes `Invalid` rather than an error, and
/// `Invalid` never counts as passed. Failing open to "upcoming" means a
/// malformed record can never silently block a legitimate join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    At(NaiveDateTime),
    Invalid,
}

impl Schedule {
    /// Combine `YYYY-MM-DD` and `HH:mm` into a single local instant.
    pub fn parse(date: &str, time: &str) -> Schedule {
        let Ok(date) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
            return Schedule::Invalid;
        };
        let Some(time) = parse_hour_minute(time) else {
            return Schedule::Invalid;
        };
        Schedule::At(NaiveDateTime::new(date, time))
    }

    /// Whether the instant lies strictly before `now`.
    pub fn is_passed(&self, now: NaiveDateTime) -> bool {
        match self {
            Schedule::At(instant) => *instant < now,
            Schedule::Invalid => false,
        }
    }
}

/// Parse `HH:mm` or `HH:mm:ss`, keeping only hours and minutes.
fn parse_hour_minute(time: &str) -> Option<NaiveTime> {
    let mut parts = time.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_date_and_time() {
        let schedule = Schedule::parse("2026-08-12", "18:30");
        assert_eq!(schedule, Schedule::At(at(2026, 8, 12, 18, 30)));
    }

    #[test]
    fn test_parse_ignores_seconds() {
        let schedule = Schedule::parse("2026-08-12", "18:30:45");
        assert_eq!(schedule, Schedule::At(at(2026, 8, 12, 18, 30)));
    }

    #[test]
    fn test_malformed_date_is_invalid_and_never_passed() {
        let schedule = Schedule::parse("not-a-date", "18:30");
        assert_eq!(schedule, Schedule::Invalid);
        assert!(!schedule.is_passed(at(2099, 1, 1, 0, 0)));
    }

    #[test]
    fn test_malformed_time_is_invalid() {
        assert_eq!(Schedule::parse("2026-08-12", "evening"), Schedule::Invalid);
        assert_eq!(Schedule::parse("2026-08-12", "25:00"), Schedule::Invalid);
    }

    #[test]
    fn test_is_passed_is_strict() {
        let schedule = Schedule::parse("2026-08-12", "18:30");
        assert!(schedule.is_passed(at(2026, 8, 12, 18, 31)));
        // The exact instant still counts as upcoming.
        assert!(!schedule.is_passed(at(2026, 8, 12, 18, 30)));
        assert!(!schedule.is_passed(at(2026, 8, 12, 18, 29)));
    }
}
