//! Preset arguments
//!
//! Typed argument payloads for predicate construction. The shape is
//! validated against the preset before any predicate exists, so a
//! mis-shaped clause fails when the query is built, not at first
//! evaluation.

use chrono::Duration;
use sq_core::PropertyValue;

/// Argument payload supplied with a preset
#[derive(Debug, Clone, PartialEq)]
pub enum PresetArgs {
    /// A single comparison value (equality presets)
    Value(PropertyValue),
    /// A list of candidate values (membership presets)
    Values(Vec<PropertyValue>),
    /// A regex pattern (string presets)
    Pattern(String),
    /// An integer threshold (integer presets)
    Threshold(i64),
    /// A relative age measured back from now (datetime presets)
    Age(RelativeAge),
}

impl PresetArgs {
    /// Shape name used in validation error messages
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Value(_) => "a single value",
            Self::Values(_) => "a list of values",
            Self::Pattern(_) => "a regex pattern",
            Self::Threshold(_) => "an integer threshold",
            Self::Age(_) => "a relative age",
        }
    }
}

/// A duration measured backwards from the current instant
///
/// At least one component must be non-zero for a datetime preset to accept
/// it; an all-zero age would compare every timestamp against "now" itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelativeAge {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RelativeAge {
    pub fn days(days: u64) -> Self {
        Self {
            days,
            ..Default::default()
        }
    }

    pub fn hours(hours: u64) -> Self {
        Self {
            hours,
            ..Default::default()
        }
    }

    pub fn and_hours(mut self, hours: u64) -> Self {
        self.hours = hours;
        self
    }

    pub fn and_minutes(mut self, minutes: u64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn and_seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Total duration this age spans
    pub fn to_duration(self) -> Duration {
        let total_seconds =
            self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds;
        Duration::seconds(total_seconds as i64)
    }
}
