use crate::reminder::WebhookReminder;
use serde::{Deserialize, Serialize};

/// Outcome of a single webhook delivery attempt. Always a value, never an
/// error, delivery failures are data to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub success: bool,
    /// HTTP status of the response, or 0 when the call never completed
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeliveryReport {
    pub fn ok(status_code: u16) -> Self {
        Self {
            success: true,
            status_code,
            message: None,
        }
    }

    /// The endpoint answered with a non success status
    pub fn rejected(status_code: u16) -> Self {
        Self {
            success: false,
            status_code,
            message: None,
        }
    }

    /// The call never completed, e.g. connection refused or timeout
    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            status_code: 0,
            message: Some(message),
        }
    }
}

/// Terminal state of a delivery scheduling decision.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    /// The step had no target url, so the notification was dropped before
    /// any payload was built
    Skipped,
    /// The notification went out right away
    Delivered(DeliveryReport),
    /// The notification was persisted for the delivery job
    Scheduled(WebhookReminder),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn failed_reports_have_no_status_but_a_message() {
        let report = DeliveryReport::failed("connection refused".into());
        assert!(!report.success);
        assert_eq!(report.status_code, 0);
        assert!(report.message.is_some());
    }

    #[test]
    fn rejected_reports_keep_the_status() {
        let report = DeliveryReport::rejected(503);
        assert!(!report.success);
        assert_eq!(report.status_code, 503);
    }
}
