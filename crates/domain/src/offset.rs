use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Units a delivery offset can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
}

impl TimeUnit {
    /// Parses a unit name, ignoring case. Unrecognized names yield `None`
    /// so that a garbled unit behaves exactly like a missing one.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "day" => Some(TimeUnit::Day),
            "hour" => Some(TimeUnit::Hour),
            "minute" => Some(TimeUnit::Minute),
            _ => None,
        }
    }

    /// `amount` of this unit as a concrete duration. `None` when the amount
    /// is too large to represent
    pub fn to_duration(self, amount: i64) -> Option<Duration> {
        match self {
            TimeUnit::Day => Duration::try_days(amount),
            TimeUnit::Hour => Duration::try_hours(amount),
            TimeUnit::Minute => Duration::try_minutes(amount),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
        }
    }
}

/// How far from the booked time a time relative notification should fire.
/// Both parts are optional and a partial offset never defers delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeOffset {
    pub amount: Option<i64>,
    pub unit: Option<TimeUnit>,
}

impl TimeOffset {
    pub fn new(amount: i64, unit: TimeUnit) -> Self {
        Self {
            amount: Some(amount),
            unit: Some(unit),
        }
    }

    /// The offset as a concrete duration. Present only when both the amount
    /// and the unit are given and the amount is positive, so a zero or
    /// half-configured offset collapses to immediate delivery.
    pub fn resolved(&self) -> Option<Duration> {
        match (self.amount, self.unit) {
            (Some(amount), Some(unit)) if amount > 0 => unit.to_duration(amount),
            _ => None,
        }
    }
}
