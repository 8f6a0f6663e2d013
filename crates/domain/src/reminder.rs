use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a deferred notification will go out once it matures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    Webhook,
}

impl From<String> for DeliveryMethod {
    fn from(e: String) -> DeliveryMethod {
        match &e[..] {
            "WEBHOOK" => DeliveryMethod::Webhook,
            _ => unreachable!("Invalid delivery method"),
        }
    }
}

impl From<DeliveryMethod> for String {
    fn from(e: DeliveryMethod) -> String {
        match e {
            DeliveryMethod::Webhook => "WEBHOOK".to_string(),
        }
    }
}

/// A `WebhookReminder` represents a webhook notification whose delivery was
/// deferred to a future instant. It is persisted when the scheduling
/// decision lands on "send later" and is picked up by the delivery job once
/// `scheduled_at` has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookReminder {
    /// The `Booking` this reminder is about
    pub booking_reference: String,
    /// The workflow step whose configuration produced this reminder
    pub workflow_step_id: i64,
    pub method: DeliveryMethod,
    /// The instant at which the notification should go out
    pub scheduled_at: DateTime<Utc>,
    /// Marks the reminder as owned by the delivery job
    pub scheduled: bool,
}

impl WebhookReminder {
    pub fn new(booking_reference: String, workflow_step_id: i64, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            booking_reference,
            workflow_step_id,
            method: DeliveryMethod::Webhook,
            scheduled_at,
            scheduled: true,
        }
    }
}
