//! Client-session state store.
//!
//! Replaces ad hoc per-component flags (dismissal markers, cached
//! notification permission) with a single reducer-backed store with a
//! defined lifecycle: hydrated at session start, persisted on every change,
//! cleared on logout. A missing or corrupt file hydrates to defaults so the
//! host's timer loop never dies on session bookkeeping.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::storage::data_dir;

/// Cached platform notification-permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    #[default]
    Undecided,
}

/// Per-session reminder bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// When the previous reminder fired.
    pub last_reminder_at: Option<DateTime<Utc>>,
    /// Reminders are suppressed until this instant (user snooze).
    pub snoozed_until: Option<DateTime<Utc>>,
    /// Cached notification permission.
    pub permission: PermissionState,
    /// When this state was last hydrated from disk.
    pub hydrated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Whether a user snooze is in effect at `now`.
    pub fn is_snoozed(&self, now: DateTime<Utc>) -> bool {
        self.snoozed_until.is_some_and(|until| now < until)
    }
}

/// State transitions accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    /// A reminder was delivered at the given instant.
    ReminderFired { at: DateTime<Utc> },
    /// The user snoozed reminders until the given instant.
    Snoozed { until: DateTime<Utc> },
    /// The platform permission prompt was answered (or revoked).
    PermissionChanged { permission: PermissionState },
    /// Session ended; all per-session state is dropped.
    Logout,
}

/// Pure reducer: current state plus an action yields the next state.
pub fn reduce(state: &SessionState, action: &SessionAction) -> SessionState {
    match action {
        SessionAction::ReminderFired { at } => SessionState {
            last_reminder_at: Some(*at),
            // A delivered reminder consumes any pending snooze.
            snoozed_until: None,
            ..state.clone()
        },
        SessionAction::Snoozed { until } => SessionState {
            snoozed_until: Some(*until),
            ..state.clone()
        },
        SessionAction::PermissionChanged { permission } => SessionState {
            permission: *permission,
            ..state.clone()
        },
        SessionAction::Logout => SessionState::default(),
    }
}

/// File-backed session store.
pub struct SessionStore {
    state: SessionState,
    path: PathBuf,
}

impl SessionStore {
    /// Hydrate from the default location (`session.json` in the data dir).
    ///
    /// # Errors
    ///
    /// Only fails when the data directory cannot be resolved or created;
    /// a missing or unreadable state file hydrates to defaults.
    pub fn hydrate() -> Result<Self, CoreError> {
        let path = data_dir().map_err(CoreError::Config)?.join("session.json");
        Ok(Self::hydrate_from(path))
    }

    /// Hydrate from an explicit path (used by tests).
    pub fn hydrate_from(path: PathBuf) -> Self {
        let mut state = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<SessionState>(&content).ok())
            .unwrap_or_default();
        state.hydrated_at = Some(Utc::now());
        Self { state, path }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply an action and persist the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the new state cannot be written to disk; the
    /// in-memory state is updated regardless so the session keeps working.
    pub fn apply(&mut self, action: &SessionAction) -> Result<(), CoreError> {
        self.state = reduce(&self.state, action);
        self.persist()
    }

    /// Drop all session state, on disk and in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleared state cannot be written.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.apply(&SessionAction::Logout)
    }

    fn persist(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn reminder_fired_records_and_consumes_snooze() {
        let now = Utc::now();
        let state = SessionState {
            snoozed_until: Some(now + Duration::minutes(10)),
            ..Default::default()
        };
        let next = reduce(&state, &SessionAction::ReminderFired { at: now });
        assert_eq!(next.last_reminder_at, Some(now));
        assert!(next.snoozed_until.is_none());
    }

    #[test]
    fn snooze_is_active_until_expiry() {
        let now = Utc::now();
        let state = reduce(
            &SessionState::default(),
            &SessionAction::Snoozed {
                until: now + Duration::minutes(5),
            },
        );
        assert!(state.is_snoozed(now));
        assert!(!state.is_snoozed(now + Duration::minutes(6)));
    }

    #[test]
    fn logout_resets_everything() {
        let now = Utc::now();
        let mut state = SessionState::default();
        state = reduce(&state, &SessionAction::ReminderFired { at: now });
        state = reduce(
            &state,
            &SessionAction::PermissionChanged {
                permission: PermissionState::Granted,
            },
        );
        let cleared = reduce(&state, &SessionAction::Logout);
        assert_eq!(cleared, SessionState::default());
    }

    #[test]
    fn reducer_does_not_mutate_input() {
        let state = SessionState::default();
        let _ = reduce(
            &state,
            &SessionAction::PermissionChanged {
                permission: PermissionState::Denied,
            },
        );
        assert_eq!(state.permission, PermissionState::Undecided);
    }

    #[test]
    fn store_persists_across_hydration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let now = Utc::now();
        let mut store = SessionStore::hydrate_from(path.clone());
        store
            .apply(&SessionAction::ReminderFired { at: now })
            .unwrap();
        store
            .apply(&SessionAction::PermissionChanged {
                permission: PermissionState::Granted,
            })
            .unwrap();

        let rehydrated = SessionStore::hydrate_from(path);
        assert_eq!(rehydrated.state().last_reminder_at, Some(now));
        assert_eq!(rehydrated.state().permission, PermissionState::Granted);
        assert!(rehydrated.state().hydrated_at.is_some());
    }

    #[test]
    fn corrupt_file_hydrates_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::hydrate_from(path);
        assert_eq!(store.state().last_reminder_at, None);
        assert_eq!(store.state().permission, PermissionState::Undecided);
    }

    #[test]
    fn clear_empties_the_file_backed_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::hydrate_from(path.clone());
        store
            .apply(&SessionAction::ReminderFired { at: Utc::now() })
            .unwrap();
        store.clear().unwrap();

        let rehydrated = SessionStore::hydrate_from(path);
        assert_eq!(rehydrated.state().last_reminder_at, None);
    }
}
