//! Quiet-hours (do-not-disturb) window evaluation.
//!
//! A window is configured as two local wall-clock `"HH:mm"` strings and may
//! span midnight (the common "quiet at night" case, e.g. 22:00-07:00).
//! A window with either bound absent or malformed is treated as disabled
//! rather than propagating a parse failure into the scheduling loop.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike};

use crate::timezone::resolve_local;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a strict `"HH:mm"` string into minutes since local midnight.
///
/// Returns `None` for anything that is not exactly two colon-separated
/// numeric fields with `HH` in 0..=23 and `mm` in 0..=59.
pub(crate) fn parse_hhmm(s: &str) -> Option<u32> {
    let (hours, minutes) = s.split_once(':')?;
    if hours.is_empty() || minutes.is_empty() {
        return None;
    }
    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// A user-configured do-not-disturb window in local wall-clock minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietWindow {
    start_min: u32,
    end_min: u32,
}

impl QuietWindow {
    /// Build a window from optional `"HH:mm"` bounds.
    ///
    /// Returns `None` (quiet hours disabled) when either bound is absent or
    /// malformed, or when the bounds coincide (an empty window).
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start_min = parse_hhmm(start?)?;
        let end_min = parse_hhmm(end?)?;
        if start_min == end_min {
            return None;
        }
        Some(Self { start_min, end_min })
    }

    /// Whether the window wraps past midnight (e.g. 22:00-07:00).
    pub fn spans_midnight(&self) -> bool {
        self.start_min > self.end_min
    }

    /// Whether a given minute-of-day falls inside `[start, end)`.
    pub fn contains_minute(&self, minute_of_day: u32) -> bool {
        let t = minute_of_day % MINUTES_PER_DAY;
        if self.spans_midnight() {
            t >= self.start_min || t < self.end_min
        } else {
            t >= self.start_min && t < self.end_min
        }
    }

    /// Whether the instant's local wall-clock time is inside the window.
    pub fn is_quiet<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        let time = instant.time();
        self.contains_minute(time.hour() * 60 + time.minute())
    }

    /// First non-quiet instant at or after the input.
    ///
    /// For an instant outside the window this is the identity. Inside the
    /// window it is the `end` boundary on the same local day, or on the next
    /// day when the window spans midnight and the instant sits in the
    /// pre-midnight arm.
    pub fn next_clear_instant<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<Tz> {
        if !self.is_quiet(instant) {
            return instant.clone();
        }
        let time = instant.time();
        let minute = time.hour() * 60 + time.minute();
        let date = instant.date_naive();
        let end_date = if self.spans_midnight() && minute >= self.start_min {
            date.succ_opt().unwrap_or(date)
        } else {
            date
        };
        let end_time = NaiveTime::from_hms_opt(self.end_min / 60, self.end_min % 60, 0)
            .unwrap_or(NaiveTime::MIN);
        resolve_local(&instant.timezone(), end_date.and_time(end_time))
    }
}
