//! Timezone-aware local day boundaries.
//!
//! The dashboard's "today" rolls over at local midnight, not UTC midnight,
//! and quiet-hours deferral has to materialize local wall-clock times as
//! real instants. Both need a resolver that copes with DST transitions:
//! a local midnight (or quiet-hours end) can be skipped or ambiguous on a
//! transition day. Skipped times are resolved by iterative forward search;
//! ambiguous times resolve to the earliest instant.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone};

/// Upper bound on the forward scan when a local time falls into a DST gap.
/// Real-world gaps are at most a few hours (Lord Howe is 30 minutes,
/// most zones 60).
const MAX_GAP_SCAN_MINUTES: i64 = 180;

/// Resolve a naive local datetime to a concrete instant in `tz`.
///
/// Skipped local times (spring-forward gap) advance minute by minute until
/// a representable time is found. Ambiguous local times (fall-back overlap)
/// resolve to the earlier of the two instants.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    let mut candidate = naive;
    for _ in 0..MAX_GAP_SCAN_MINUTES {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => candidate = candidate + Duration::minutes(1),
        }
    }
    // No real timezone has a gap this long; interpret as UTC as a last resort.
    tz.from_utc_datetime(&naive)
}

/// First local midnight strictly after the given instant.
pub fn next_local_midnight<Tz: TimeZone>(after: &DateTime<Tz>) -> DateTime<Tz> {
    let date = after.date_naive();
    let next_day = date.succ_opt().unwrap_or(date);
    resolve_local(&after.timezone(), next_day.and_time(NaiveTime::MIN))
}

/// Bounds of the instant's local calendar day: `[start, next_midnight)`.
pub fn local_day_bounds<Tz: TimeZone>(instant: &DateTime<Tz>) -> (DateTime<Tz>, DateTime<Tz>) {
    let start = resolve_local(
        &instant.timezone(),
        instant.date_naive().and_time(NaiveTime::MIN),
    );
    (start, next_local_midnight(instant))
}
