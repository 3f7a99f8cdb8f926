//! Reminder cadence derivation.
//!
//! Fixed mode returns the configured interval verbatim; smart mode applies
//! an ordered rule set over the focus signals, first match wins. Either way
//! the result is clamped into the configured `[min, max]` range as a final
//! safety step.

use chrono::TimeZone;

use crate::reminders::state::{FocusState, ReminderState};
use crate::settings::ReminderSettings;

/// Deep work stretches the interval toward the maximum.
const DEEP_FOCUS_FACTOR: f64 = 0.85;

/// Idle gets a gentle nudge slightly above the minimum.
const IDLE_FACTOR: f64 = 1.2;

/// A scattered hour backs off to 1.5x the minimum, capped at the maximum.
const SCATTERED_FACTOR: f64 = 1.5;

/// Context switches per hour above which the user counts as scattered.
const SCATTERED_SWITCH_THRESHOLD: u32 = 10;

/// Derive the reminder cadence in minutes.
///
/// Always within the settings' normalized `[min, max]` range, for any
/// settings/state combination.
pub fn compute_interval_minutes<Tz: TimeZone>(
    settings: &ReminderSettings,
    state: &ReminderState<Tz>,
) -> u32 {
    let (min, max) = settings.normalized_range();

    let raw = if !settings.smart_reminders_enabled {
        f64::from(settings.fixed_interval_minutes.max(1))
    } else if state.focus_state == FocusState::Deep {
        DEEP_FOCUS_FACTOR * f64::from(max)
    } else if state.is_idle {
        IDLE_FACTOR * f64::from(min)
    } else if state.context_switches_last_hour > SCATTERED_SWITCH_THRESHOLD {
        (SCATTERED_FACTOR * f64::from(min)).min(f64::from(max))
    } else {
        // Shallow focus, or no other rule matched.
        f64::from(min + max) / 2.0
    };

    (raw.round() as u32).clamp(min, max)
}
