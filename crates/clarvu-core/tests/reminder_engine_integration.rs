//! Integration tests for the reminder engine.
//!
//! These exercise the full resolution path -- settings, quiet hours,
//! adaptive cadence -- across timezones, the way a host application would
//! drive it from a timer tick.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use clarvu_core::{next_fire_time, FocusState, ReminderSettings, ReminderState};

fn night_quiet() -> ReminderSettings {
    ReminderSettings {
        quiet_hours_start: Some("22:00".to_string()),
        quiet_hours_end: Some("07:00".to_string()),
        ..Default::default()
    }
}

#[test]
fn full_evening_cycle_with_quiet_hours() {
    let tz = FixedOffset::east_opt(9 * 3600).unwrap(); // UTC+9
    let settings = night_quiet();

    // 20:00 local, fresh session: first fire after the minimum interval.
    let evening = tz.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap();
    let state = ReminderState::at(evening);
    let first = next_fire_time(&settings, &state).unwrap();
    assert_eq!(first, evening + Duration::minutes(15));

    // That reminder fired; the follow-up candidate lands inside the window
    // and is deferred to 07:00 the next local day.
    let late = tz.with_ymd_and_hms(2026, 3, 1, 21, 45, 0).unwrap();
    let mut state = ReminderState::at(late);
    state.last_reminder_at = Some(first);
    // Shallow interval is (15 + 60) / 2 = 38 -> candidate 20:53 already past,
    // so this is actually a catch-up fire.
    assert_eq!(next_fire_time(&settings, &state), Some(late));

    // After the catch-up, the next candidate is 22:23 -> deferred.
    let mut state = ReminderState::at(late);
    state.last_reminder_at = Some(late);
    assert_eq!(
        next_fire_time(&settings, &state),
        Some(tz.with_ymd_and_hms(2026, 3, 2, 7, 0, 0).unwrap())
    );

    // During the night nothing fires at all.
    let night = tz.with_ymd_and_hms(2026, 3, 2, 2, 30, 0).unwrap();
    let mut state = ReminderState::at(night);
    state.last_reminder_at = Some(late);
    assert_eq!(next_fire_time(&settings, &state), None);
}

#[test]
fn quiet_hours_follow_local_wall_clock_not_utc() {
    // 23:30 in UTC+9 is 14:30 UTC. Quiet in Tokyo, clear in UTC.
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let local = tokyo.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();

    let mut state = ReminderState::at(local);
    state.last_reminder_at = Some(local - Duration::hours(1));
    assert_eq!(next_fire_time(&night_quiet(), &state), None);

    let utc: DateTime<Utc> = local.with_timezone(&Utc);
    let mut state = ReminderState::at(utc);
    state.last_reminder_at = Some(utc - Duration::hours(1));
    assert_eq!(next_fire_time(&night_quiet(), &state), Some(utc));
}

#[test]
fn deep_focus_stretches_the_cycle() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
    let settings = ReminderSettings {
        min_interval_minutes: 20,
        max_interval_minutes: 45,
        ..Default::default()
    };

    let mut shallow = ReminderState::at(now);
    shallow.last_reminder_at = Some(now - Duration::minutes(1));
    let shallow_fire = next_fire_time(&settings, &shallow).unwrap();

    let mut deep = shallow.clone();
    deep.focus_state = FocusState::Deep;
    let deep_fire = next_fire_time(&settings, &deep).unwrap();

    // Deep: round(0.85 * 45) = 38; shallow: round((20 + 45) / 2) = 33.
    assert_eq!(shallow_fire, now + Duration::minutes(32));
    assert_eq!(deep_fire, now + Duration::minutes(37));
    assert!(deep_fire > shallow_fire);
}

#[test]
fn disabled_engine_is_inert_regardless_of_state() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let settings = ReminderSettings {
        notifications_enabled: false,
        ..night_quiet()
    };
    for last in [None, Some(now - Duration::hours(3))] {
        let mut state = ReminderState::at(now);
        state.last_reminder_at = last;
        state.focus_state = FocusState::Deep;
        assert_eq!(next_fire_time(&settings, &state), None);
    }
}

#[test]
fn repeated_evaluation_is_stable() {
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap();
    let mut state = ReminderState::at(now);
    state.last_reminder_at = Some(now - Duration::minutes(10));
    state.context_switches_last_hour = 14;
    let settings = night_quiet();

    let results: Vec<_> = (0..5).map(|_| next_fire_time(&settings, &state)).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn inverted_range_from_an_external_record_still_schedules() {
    // A record that predates write-time validation.
    let settings = ReminderSettings {
        min_interval_minutes: 60,
        max_interval_minutes: 15,
        ..Default::default()
    };
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let mut state = ReminderState::at(now);
    state.last_reminder_at = Some(now - Duration::minutes(1));

    let fire = next_fire_time(&settings, &state).unwrap();
    let minutes = (fire - now).num_minutes();
    assert!((14..=59).contains(&minutes), "got {minutes}");
}
