//! # Clarvu Core Library
//!
//! This library provides the core logic for Clarvu, a productivity and
//! time-tracking companion. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI shell
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Reminder Engine**: A pure, timezone-aware scheduler that computes the
//!   next notification time from user settings, quiet hours, and a coarse
//!   focus-state classification. Re-invoked by the host on a timer tick.
//! - **Activity Classifier**: Rule-based keyword matching over window/tab
//!   titles, feeding the focus-state and context-switch signals the engine
//!   consumes.
//! - **Storage**: SQLite-based activity log and TOML-based configuration.
//! - **Session Store**: A single reducer-style store for per-session flags
//!   (snooze, notification permission, last fire), hydrated at session start
//!   and cleared on logout.
//!
//! ## Key Components
//!
//! - [`next_fire_time`]: Next reminder resolution
//! - [`QuietWindow`]: Do-not-disturb window evaluation
//! - [`classify`]: Activity classification from titles
//! - [`Database`]: Activity sample persistence
//! - [`Config`]: Application configuration management

pub mod context;
pub mod error;
pub mod reminders;
pub mod session;
pub mod settings;
pub mod storage;
pub mod timezone;

pub use context::{classify, derive_state, ActivityKind, ActivitySample, Category, Classification, SignalConfig};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use reminders::{compute_interval_minutes, next_fire_time, FocusState, QuietWindow, ReminderState};
pub use session::{PermissionState, SessionAction, SessionState, SessionStore};
pub use settings::ReminderSettings;
pub use storage::{Config, Database, SampleRecord};
pub use timezone::{local_day_bounds, next_local_midnight, resolve_local};
