//! Activity context detection.
//!
//! Turns raw window/tab titles into the coarse signals the reminder engine
//! consumes:
//!
//! - [`classify`]: rule-based keyword matching of a single title
//! - [`derive_state`]: folds recent samples into a [`ReminderState`]
//!   (focus state, context-switch count, idle flag)
//!
//! [`ReminderState`]: crate::reminders::ReminderState

pub mod detector;
pub mod signals;

pub use detector::{classify, ActivityKind, Category, Classification};
pub use signals::{derive_state, ActivitySample, SignalConfig};
