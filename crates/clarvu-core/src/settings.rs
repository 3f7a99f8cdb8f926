//! User reminder settings.
//!
//! One settings record per user, mutated only through the settings surface
//! (CLI `config set`, or a GUI form). The reminder engine reads these as
//! plain data; validation happens here at the write boundary so the engine
//! never has to signal misconfiguration mid-tick.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::reminders::quiet_hours::parse_hhmm;

/// Reminder cadence and quiet-hours settings for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderSettings {
    /// Master switch. When off, the engine always suppresses reminders.
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
    /// Adaptive cadence driven by the activity classifier. When off,
    /// `fixed_interval_minutes` is used verbatim.
    #[serde(default = "default_true")]
    pub smart_reminders_enabled: bool,
    /// Lower bound of the adaptive cadence.
    #[serde(default = "default_min_interval")]
    pub min_interval_minutes: u32,
    /// Upper bound of the adaptive cadence.
    #[serde(default = "default_max_interval")]
    pub max_interval_minutes: u32,
    /// Cadence used when smart reminders are off.
    #[serde(default = "default_fixed_interval")]
    pub fixed_interval_minutes: u32,
    /// Start of the do-not-disturb window, local wall-clock "HH:mm".
    #[serde(default)]
    pub quiet_hours_start: Option<String>,
    /// End of the do-not-disturb window, local wall-clock "HH:mm".
    #[serde(default)]
    pub quiet_hours_end: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_min_interval() -> u32 {
    15
}
fn default_max_interval() -> u32 {
    60
}
fn default_fixed_interval() -> u32 {
    30
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            smart_reminders_enabled: true,
            min_interval_minutes: default_min_interval(),
            max_interval_minutes: default_max_interval(),
            fixed_interval_minutes: default_fixed_interval(),
            quiet_hours_start: None,
            quiet_hours_end: None,
        }
    }
}

impl ReminderSettings {
    /// Validate settings at the write boundary.
    ///
    /// Rejects an inverted interval range, zero-minute intervals, and
    /// malformed quiet-hours strings. The engine additionally normalizes
    /// defensively, since settings records may arrive from an external
    /// store that predates this check.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_interval_minutes == 0 {
            return Err(ValidationError::ZeroInterval {
                field: "min_interval_minutes",
            });
        }
        if self.fixed_interval_minutes == 0 {
            return Err(ValidationError::ZeroInterval {
                field: "fixed_interval_minutes",
            });
        }
        if self.min_interval_minutes > self.max_interval_minutes {
            return Err(ValidationError::IntervalRangeInverted {
                min: self.min_interval_minutes,
                max: self.max_interval_minutes,
            });
        }
        for (field, bound) in [
            ("quiet_hours_start", &self.quiet_hours_start),
            ("quiet_hours_end", &self.quiet_hours_end),
        ] {
            if let Some(value) = bound {
                if parse_hhmm(value).is_none() {
                    return Err(ValidationError::MalformedTime {
                        field,
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Interval bounds with an inverted range normalized by swapping.
    ///
    /// The engine uses this rather than the raw fields so a record that
    /// slipped past write-time validation still yields a sane cadence.
    pub fn normalized_range(&self) -> (u32, u32) {
        let min = self.min_interval_minutes.max(1);
        let max = self.max_interval_minutes.max(1);
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }
}
