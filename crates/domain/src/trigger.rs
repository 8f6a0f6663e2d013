use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The booking lifecycle events that can fire a webhook notification.
/// Partitioned into immediate triggers, which always fire at invocation
/// time, and time relative triggers, which fire at an offset from the
/// booked start or end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerEvent {
    NewEvent,
    EventCancelled,
    RescheduleEvent,
    BeforeEvent,
    AfterEvent,
}

impl TriggerEvent {
    /// Whether this trigger fires as soon as it is received, ignoring any
    /// configured offset
    pub fn is_immediate(&self) -> bool {
        matches!(
            self,
            TriggerEvent::NewEvent | TriggerEvent::EventCancelled | TriggerEvent::RescheduleEvent
        )
    }

    pub fn is_time_relative(&self) -> bool {
        !self.is_immediate()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerEvent::NewEvent => "NEW_EVENT",
            TriggerEvent::EventCancelled => "EVENT_CANCELLED",
            TriggerEvent::RescheduleEvent => "RESCHEDULE_EVENT",
            TriggerEvent::BeforeEvent => "BEFORE_EVENT",
            TriggerEvent::AfterEvent => "AFTER_EVENT",
        }
    }
}

impl Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for TriggerEvent {
    fn from(e: String) -> TriggerEvent {
        match &e[..] {
            "NEW_EVENT" => TriggerEvent::NewEvent,
            "EVENT_CANCELLED" => TriggerEvent::EventCancelled,
            "RESCHEDULE_EVENT" => TriggerEvent::RescheduleEvent,
            "BEFORE_EVENT" => TriggerEvent::BeforeEvent,
            "AFTER_EVENT" => TriggerEvent::AfterEvent,
            _ => unreachable!("Invalid trigger event"),
        }
    }
}

impl From<TriggerEvent> for String {
    fn from(e: TriggerEvent) -> String {
        e.as_str().to_string()
    }
}
