use crate::dtos::{
    BookingDTO, DeliveryReportDTO, ScheduleOutcomeDTO, TimeSpanDTO, WebhookReminderDTO,
};
use herald_domain::{ScheduleOutcome, TriggerEvent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutcomeResponse {
    pub outcome: ScheduleOutcomeDTO,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryReportDTO>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<WebhookReminderDTO>,
}

impl ScheduleOutcomeResponse {
    pub fn new(outcome: ScheduleOutcome) -> Self {
        match outcome {
            ScheduleOutcome::Skipped => Self {
                outcome: ScheduleOutcomeDTO::Skipped,
                delivery: None,
                reminder: None,
            },
            ScheduleOutcome::Delivered(report) => Self {
                outcome: ScheduleOutcomeDTO::Delivered,
                delivery: Some(DeliveryReportDTO::new(report)),
                reminder: None,
            },
            ScheduleOutcome::Scheduled(reminder) => Self {
                outcome: ScheduleOutcomeDTO::Scheduled,
                delivery: None,
                reminder: Some(WebhookReminderDTO::new(reminder)),
            },
        }
    }
}

pub mod schedule_webhook {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub booking: BookingDTO,
        pub trigger_event: TriggerEvent,
        pub time_span: Option<TimeSpanDTO>,
        pub target_url: Option<String>,
        pub template: Option<String>,
        pub workflow_step_id: i64,
        pub seat_reference_uid: Option<String>,
        pub user_id: Option<i64>,
        pub team_id: Option<i64>,
    }

    pub type APIResponse = ScheduleOutcomeResponse;
}
