//! Next-fire-time resolution.
//!
//! Pure per-tick evaluation: no state survives a call other than
//! `last_reminder_at`, which the host carries in the session store. The
//! caller schedules a platform notification for the returned instant, or
//! re-polls later when `None` is returned.

use chrono::{DateTime, Duration, TimeZone};

use crate::reminders::interval::compute_interval_minutes;
use crate::reminders::quiet_hours::QuietWindow;
use crate::reminders::state::ReminderState;
use crate::settings::ReminderSettings;

/// Resolve the next reminder instant, or `None` to suppress reminders.
///
/// Semantics, in order:
///
/// 1. Notifications disabled: `None`.
/// 2. `now` inside quiet hours: `None` (currently silenced; re-poll later).
/// 3. With a prior fire, the candidate is `last + interval`. A candidate
///    already in the past fires `now` -- catch-up semantics, never a queued
///    backlog of missed reminders.
/// 4. Without a prior fire, the candidate is `now + min_interval`.
/// 5. A future candidate inside quiet hours is deferred to the end of the
///    window.
///
/// Malformed quiet-hours strings behave as "quiet hours disabled"; this
/// function cannot fail or panic on any settings/state combination.
pub fn next_fire_time<Tz: TimeZone>(
    settings: &ReminderSettings,
    state: &ReminderState<Tz>,
) -> Option<DateTime<Tz>> {
    if !settings.notifications_enabled {
        return None;
    }

    let quiet = QuietWindow::from_bounds(
        settings.quiet_hours_start.as_deref(),
        settings.quiet_hours_end.as_deref(),
    );
    if quiet.is_some_and(|w| w.is_quiet(&state.now)) {
        return None;
    }

    let candidate = match &state.last_reminder_at {
        Some(last) => {
            let interval = compute_interval_minutes(settings, state);
            let candidate = last.clone() + Duration::minutes(i64::from(interval));
            if candidate <= state.now {
                return Some(state.now.clone());
            }
            candidate
        }
        None => {
            // First reminder ever: wait out the minimum interval.
            let (min, _) = settings.normalized_range();
            state.now.clone() + Duration::minutes(i64::from(min))
        }
    };

    Some(match quiet {
        Some(w) => w.next_clear_instant(&candidate),
        None => candidate,
    })
}
