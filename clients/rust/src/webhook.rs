use crate::{APIResponse, BaseClient};
use herald_api_structs::dtos::{BookingDTO, TimeSpanDTO};
use herald_api_structs::*;
use herald_domain::TriggerEvent;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct WebhookClient {
    base: Arc<BaseClient>,
}

pub struct ScheduleWebhookInput {
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

impl WebhookClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn schedule(
        &self,
        input: ScheduleWebhookInput,
    ) -> APIResponse<schedule_webhook::APIResponse> {
        let body = schedule_webhook::RequestBody {
            booking: input.booking,
            trigger_event: input.trigger_event,
            time_span: input.time_span,
            target_url: input.target_url,
            template: input.template,
            workflow_step_id: input.workflow_step_id,
            seat_reference_uid: input.seat_reference_uid,
            user_id: input.user_id,
            team_id: input.team_id,
        };

        self.base.post(body, "webhooks".into(), StatusCode::OK).await
    }
}
