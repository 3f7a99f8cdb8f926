//! Reminder scheduling engine.
//!
//! A deterministic, timezone-aware scheduler with three layers:
//!
//! - [`QuietWindow`]: do-not-disturb evaluation over local wall-clock time
//! - [`compute_interval_minutes`]: fixed or adaptive cadence derivation
//! - [`next_fire_time`]: combines cadence, the last fire, and quiet hours
//!   into the next wake instant, or `None` to suppress reminders
//!
//! The engine is pure: it owns no clock, performs no I/O, and is re-invoked
//! by the host on each timer tick with freshly derived [`ReminderState`].

pub mod engine;
pub mod interval;
pub mod quiet_hours;
pub mod state;

pub use engine::next_fire_time;
pub use interval::compute_interval_minutes;
pub use quiet_hours::QuietWindow;
pub use state::{FocusState, ReminderState};
