//! Opening-hours check.
//!
//! The check is a pure function of the opening hours and a timestamp. The
//! periodic re-evaluation is the caller's timer; nothing here keeps state.

use chrono::{Datelike, Timelike, Weekday};

use crate::shop::{OpeningHours, OpeningInterval};

/// Lowercase English key used in `OPENING_HOURS` for `day`.
///
/// Derived from the weekday value itself, never from a localized day name.
#[must_use]
pub fn weekday_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Whether the shop is open at `now`.
///
/// Only the hour is compared: open iff `start_hour <= hour < end_hour`. A
/// `"21:30"` closing time therefore closes at 21:00. A day without an entry,
/// or with an unparseable time, is closed.
#[must_use]
pub fn is_open<T>(hours: &OpeningHours, now: &T) -> bool
where
    T: Datelike + Timelike,
{
    let day = weekday_key(now.weekday());
    let Some(interval) = hours.get(day) else {
        return false;
    };

    match interval_hours(interval) {
        Some((start, end)) => (start..end).contains(&now.hour()),
        None => {
            tracing::warn!(
                day,
                start = %interval.start,
                end = %interval.end,
                "unparseable opening hours, treating day as closed"
            );
            false
        }
    }
}

fn interval_hours(interval: &OpeningInterval) -> Option<(u32, u32)> {
    Some((parse_hour(&interval.start)?, parse_hour(&interval.end)?))
}

/// Hour component of an `"HH:MM"` string.
fn parse_hour(time: &str) -> Option<u32> {
    time.split(':').next()?.trim().parse().ok()
}
