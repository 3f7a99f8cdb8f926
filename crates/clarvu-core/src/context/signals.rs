//! Folding activity samples into reminder-engine signals.
//!
//! The host records a sample whenever the foreground window or tab changes;
//! this module reduces the recent samples to the idle flag, context-switch
//! count, and focus state that drive the adaptive cadence.

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::context::detector::{classify, ActivityKind, Category};
use crate::reminders::state::{FocusState, ReminderState};

/// One observed foreground title at an instant.
#[derive(Debug, Clone)]
pub struct ActivitySample<Tz: TimeZone> {
    pub observed_at: DateTime<Tz>,
    pub title: String,
}

/// Tunables for signal derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Minutes without a sample before the user counts as idle.
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_minutes: u32,
    /// Minimum length of an unbroken productive run to count as deep work.
    #[serde(default = "default_deep_run")]
    pub deep_run_minutes: u32,
    /// Maximum switches in the last hour compatible with deep work.
    #[serde(default = "default_deep_max_switches")]
    pub deep_max_switches: u32,
}

fn default_idle_threshold() -> u32 {
    10
}
fn default_deep_run() -> u32 {
    25
}
fn default_deep_max_switches() -> u32 {
    4
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            idle_threshold_minutes: default_idle_threshold(),
            deep_run_minutes: default_deep_run(),
            deep_max_switches: default_deep_max_switches(),
        }
    }
}

/// Reduce recent samples to a [`ReminderState`] snapshot at `now`.
///
/// Only samples from the last hour participate. Samples need not be sorted;
/// they are ordered internally by timestamp.
pub fn derive_state<Tz: TimeZone>(
    samples: &[ActivitySample<Tz>],
    last_reminder_at: Option<DateTime<Tz>>,
    now: DateTime<Tz>,
    config: &SignalConfig,
) -> ReminderState<Tz> {
    let hour_ago = now.clone() - Duration::hours(1);
    let mut recent: Vec<&ActivitySample<Tz>> = samples
        .iter()
        .filter(|s| s.observed_at > hour_ago && s.observed_at <= now)
        .collect();
    recent.sort_by(|a, b| a.observed_at.cmp(&b.observed_at));

    let kinds: Vec<ActivityKind> = recent.iter().map(|s| classify(&s.title).kind).collect();
    let switches = kinds.windows(2).filter(|pair| pair[0] != pair[1]).count() as u32;

    let idle_threshold = Duration::minutes(i64::from(config.idle_threshold_minutes));
    let is_idle = match recent.last() {
        Some(last) => now.clone() - last.observed_at.clone() > idle_threshold,
        None => true,
    };

    let focus_state = if is_idle {
        FocusState::Idle
    } else if is_deep_run(&recent, &kinds, &now, switches, config) {
        FocusState::Deep
    } else {
        FocusState::Shallow
    };

    ReminderState {
        now,
        last_reminder_at,
        is_idle,
        context_switches_last_hour: switches,
        focus_state,
    }
}

/// A deep run is a trailing stretch of one productive kind, unbroken by
/// gaps longer than the idle threshold, lasting at least `deep_run_minutes`,
/// in an hour with few switches overall.
fn is_deep_run<Tz: TimeZone>(
    recent: &[&ActivitySample<Tz>],
    kinds: &[ActivityKind],
    now: &DateTime<Tz>,
    switches: u32,
    config: &SignalConfig,
) -> bool {
    let Some((&last_kind, earlier_kinds)) = kinds.split_last() else {
        return false;
    };
    if last_kind.category() != Category::Productive || switches > config.deep_max_switches {
        return false;
    }

    let idle_threshold = Duration::minutes(i64::from(config.idle_threshold_minutes));
    let mut run_start = recent[recent.len() - 1].observed_at.clone();
    for (sample, kind) in recent[..recent.len() - 1]
        .iter()
        .zip(earlier_kinds.iter())
        .rev()
    {
        if *kind != last_kind || run_start.clone() - sample.observed_at.clone() > idle_threshold {
            break;
        }
        run_start = sample.observed_at.clone();
    }

    now.clone() - run_start >= Duration::minutes(i64::from(config.deep_run_minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn sample(minutes_ago: i64, title: &str) -> ActivitySample<Utc> {
        ActivitySample {
            observed_at: noon() - Duration::minutes(minutes_ago),
            title: title.to_string(),
        }
    }

    #[test]
    fn no_samples_means_idle() {
        let state = derive_state(&[], None, noon(), &SignalConfig::default());
        assert!(state.is_idle);
        assert_eq!(state.focus_state, FocusState::Idle);
        assert_eq!(state.context_switches_last_hour, 0);
    }

    #[test]
    fn stale_last_sample_means_idle() {
        let samples = vec![sample(30, "clarvu - GitHub")];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert!(state.is_idle);
        assert_eq!(state.focus_state, FocusState::Idle);
    }

    #[test]
    fn sustained_productive_run_is_deep() {
        let samples = vec![
            sample(40, "engine.rs - GitHub"),
            sample(30, "quiet_hours.rs - GitHub"),
            sample(20, "interval.rs - GitHub"),
            sample(11, "state.rs - GitHub"),
            sample(5, "pull request #12 - GitHub"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert!(!state.is_idle);
        assert_eq!(state.focus_state, FocusState::Deep);
        assert_eq!(state.context_switches_last_hour, 0);
    }

    #[test]
    fn short_run_is_shallow() {
        let samples = vec![
            sample(10, "engine.rs - GitHub"),
            sample(5, "pull request #12 - GitHub"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert_eq!(state.focus_state, FocusState::Shallow);
    }

    #[test]
    fn distracting_run_is_not_deep() {
        let samples = vec![
            sample(40, "lofi beats - YouTube"),
            sample(20, "more lofi - YouTube"),
            sample(5, "even more lofi - YouTube"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert_eq!(state.focus_state, FocusState::Shallow);
    }

    #[test]
    fn switches_count_adjacent_kind_changes() {
        let samples = vec![
            sample(50, "engine.rs - GitHub"),
            sample(40, "Inbox - Gmail"),
            sample(30, "notes - Notion"),
            sample(20, "more notes - Notion"),
            sample(5, "lofi - YouTube"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        // coding -> communication -> writing -> writing -> entertainment
        assert_eq!(state.context_switches_last_hour, 3);
    }

    #[test]
    fn samples_older_than_an_hour_are_ignored() {
        let samples = vec![
            sample(90, "Inbox - Gmail"),
            sample(75, "lofi - YouTube"),
            sample(5, "engine.rs - GitHub"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert_eq!(state.context_switches_last_hour, 0);
    }

    #[test]
    fn gap_longer_than_idle_threshold_breaks_a_deep_run() {
        let samples = vec![
            sample(55, "engine.rs - GitHub"),
            // 41-minute gap: the run restarts here.
            sample(14, "interval.rs - GitHub"),
            sample(5, "state.rs - GitHub"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert_eq!(state.focus_state, FocusState::Shallow);
    }

    #[test]
    fn unsorted_samples_are_handled() {
        let samples = vec![
            sample(5, "pull request - GitHub"),
            sample(25, "engine.rs - GitHub"),
            sample(15, "interval.rs - GitHub"),
        ];
        let state = derive_state(&samples, None, noon(), &SignalConfig::default());
        assert_eq!(state.focus_state, FocusState::Deep);
    }

    #[test]
    fn last_reminder_passes_through() {
        let last = noon() - Duration::minutes(30);
        let state = derive_state(&[], Some(last), noon(), &SignalConfig::default());
        assert_eq!(state.last_reminder_at, Some(last));
    }
}
