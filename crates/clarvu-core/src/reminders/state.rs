//! Ephemeral evaluation state for the reminder engine.
//!
//! Recomputed from recent activity samples and idle signals on every timer
//! tick; never persisted (only `last_reminder_at` survives between ticks,
//! via the session store).

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Coarse classification of the user's current activity, used only to
/// modulate reminder cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusState {
    /// Sustained work in one productive context; stretch the interval.
    Deep,
    /// Active but switching between contexts.
    #[default]
    Shallow,
    /// No recent activity signal.
    Idle,
}

/// Snapshot of the signals the engine consumes for one evaluation.
#[derive(Debug, Clone)]
pub struct ReminderState<Tz: TimeZone> {
    /// Evaluation instant, supplied by the host.
    pub now: DateTime<Tz>,
    /// When the previous reminder fired, if any.
    pub last_reminder_at: Option<DateTime<Tz>>,
    /// Whether the idle detector currently reports no activity.
    pub is_idle: bool,
    /// Number of activity-context switches observed in the last hour.
    pub context_switches_last_hour: u32,
    /// Coarse focus classification.
    pub focus_state: FocusState,
}

impl<Tz: TimeZone> ReminderState<Tz> {
    /// A quiescent state at the given instant: no prior reminder, not idle,
    /// shallow focus. Callers overwrite fields with derived signals.
    pub fn at(now: DateTime<Tz>) -> Self {
        Self {
            now,
            last_reminder_at: None,
            is_idle: false,
            context_switches_last_hour: 0,
            focus_state: FocusState::Shallow,
        }
    }
}
