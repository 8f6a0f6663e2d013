use crate::error::HeraldError;
use crate::shared::usecase::{execute, UseCase};
use crate::webhook::build_payload;
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use herald_api_structs::schedule_webhook::{APIResponse, RequestBody};
use herald_domain::{
    Booking, ScheduleOutcome, TimeOffset, TriggerEvent, WebhookReminder, WorkflowStep,
};
use herald_infra::{Context, VariableRenderer, WebhookClient};
use tracing::warn;

pub async fn schedule_webhook_controller(
    ctx: web::Data<Context>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, HeraldError> {
    let body = body.0;
    let usecase = ScheduleWebhookUseCase {
        booking: body.booking.into_domain(),
        trigger: body.trigger_event,
        offset: body.time_span.unwrap_or_default().into_domain(),
        target_url: body.target_url.unwrap_or_default(),
        template: body.template,
        workflow_step_id: body.workflow_step_id,
        seat_reference_uid: body.seat_reference_uid,
        user_id: body.user_id,
        team_id: body.team_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|outcome| HttpResponse::Ok().json(APIResponse::new(outcome)))
        .map_err(HeraldError::from)
}

#[derive(Debug)]
pub struct ScheduleWebhookUseCase {
    pub booking: Booking,
    pub trigger: TriggerEvent,
    pub offset: TimeOffset,
    pub target_url: String,
    pub template: Option<String>,
    pub workflow_step_id: i64,
    pub seat_reference_uid: Option<String>,
    pub user_id: Option<i64>,
    pub team_id: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HeraldError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl ScheduleWebhookUseCase {
    /// The instant the notification is wanted at, relative to the event
    /// window. None for triggers that fire right away and for time relative
    /// triggers without a usable offset.
    fn target_instant(&self) -> Option<DateTime<Utc>> {
        match self.trigger {
            TriggerEvent::BeforeEvent => self
                .offset
                .resolved()
                .and_then(|offset| self.booking.start_time.checked_sub_signed(offset)),
            TriggerEvent::AfterEvent => self
                .offset
                .resolved()
                .and_then(|offset| self.booking.end_time.checked_add_signed(offset)),
            _ => None,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleWebhookUseCase {
    type Response = ScheduleOutcome;

    type Error = UseCaseError;

    const NAME: &'static str = "ScheduleWebhook";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        if self.target_url.is_empty() {
            warn!(
                "No webhook url for workflow step {} on booking {}, discarding notification",
                self.workflow_step_id, self.booking.reference
            );
            return Ok(ScheduleOutcome::Skipped);
        }

        let now = ctx.sys.get_utc_datetime();
        let renderer = VariableRenderer {};
        let payload = build_payload(
            &self.booking,
            self.trigger,
            self.template.as_deref(),
            &renderer,
            now,
        );

        if self.trigger.is_immediate() {
            let client = WebhookClient::new(ctx.config.webhook_timeout_millis);
            let report = client
                .send(&self.target_url, &payload, self.workflow_step_id)
                .await;
            return Ok(ScheduleOutcome::Delivered(report));
        }

        match self.target_instant() {
            Some(scheduled_at) if scheduled_at > now => {
                ctx.repos
                    .bookings
                    .upsert(&self.booking)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;

                let step = WorkflowStep {
                    id: self.workflow_step_id,
                    trigger: self.trigger,
                    webhook_url: self.target_url.clone(),
                    template: self.template.clone(),
                };
                ctx.repos
                    .workflow_steps
                    .upsert(&step)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;

                let reminder = WebhookReminder::new(
                    self.booking.reference.clone(),
                    self.workflow_step_id,
                    scheduled_at,
                );
                ctx.repos
                    .webhook_reminders
                    .insert(&reminder)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;

                Ok(ScheduleOutcome::Scheduled(reminder))
            }
            // The wanted instant is missing or already behind us, deliver
            // right away instead of losing the notification
            _ => {
                let client = WebhookClient::new(ctx.config.webhook_timeout_millis);
                let report = client
                    .send(&self.target_url, &payload, self.workflow_step_id)
                    .await;
                Ok(ScheduleOutcome::Delivered(report))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use herald_domain::{DeliveryMethod, Metadata, Participant, TimeUnit};
    use herald_infra::ISys;
    use std::sync::Arc;

    struct StaticTimeSys {}

    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.get_utc_datetime().timestamp_millis()
        }

        fn get_utc_datetime(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2023, 7, 14, 10, 0, 0).unwrap()
        }
    }

    fn setup() -> Context {
        let mut ctx = Context::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});
        ctx
    }

    /// Booking starting two hours after the mocked clock
    fn booking() -> Booking {
        Booking {
            id: Default::default(),
            reference: "booking-42".into(),
            title: "Quarterly sync".into(),
            event_type: "sync".into(),
            start_time: Utc.with_ymd_and_hms(2023, 7, 14, 12, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2023, 7, 14, 13, 0, 0).unwrap(),
            organizer: Participant {
                name: "Ola".into(),
                email: "ola@example.com".into(),
                timezone: Some(chrono_tz::Europe::Oslo),
                locale: None,
            },
            attendees: vec![],
            location: None,
            additional_notes: None,
            responses: None,
            metadata: Metadata::default(),
            video_call_url: None,
        }
    }

    fn usecase(trigger: TriggerEvent, offset: TimeOffset) -> ScheduleWebhookUseCase {
        ScheduleWebhookUseCase {
            booking: booking(),
            trigger,
            offset,
            // Nothing listens on the discard port so immediate deliveries
            // come back as failed reports without hitting the network
            target_url: "http://127.0.0.1:9/hook".into(),
            template: None,
            workflow_step_id: 7,
            seat_reference_uid: None,
            user_id: None,
            team_id: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_discards_notification_without_target_url() {
        let ctx = setup();
        let mut usecase = usecase(TriggerEvent::NewEvent, TimeOffset::default());
        usecase.target_url = "".into();

        let res = usecase.execute(&ctx).await;

        assert_eq!(res, Ok(ScheduleOutcome::Skipped));
        assert!(ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_delivers_immediate_triggers_and_persists_nothing() {
        let ctx = setup();
        for trigger in [
            TriggerEvent::NewEvent,
            TriggerEvent::EventCancelled,
            TriggerEvent::RescheduleEvent,
        ] {
            let mut usecase = usecase(
                trigger,
                TimeOffset {
                    amount: Some(2),
                    unit: Some(TimeUnit::Hour),
                },
            );

            match usecase.execute(&ctx).await {
                Ok(ScheduleOutcome::Delivered(report)) => {
                    assert!(!report.success);
                    assert_eq!(report.status_code, 0);
                }
                other => panic!("Expected delivered outcome, got {:?}", other),
            }
        }
        assert!(ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_schedules_before_event_trigger_with_future_target() {
        let ctx = setup();
        let mut usecase = usecase(
            TriggerEvent::BeforeEvent,
            TimeOffset {
                amount: Some(1),
                unit: Some(TimeUnit::Hour),
            },
        );

        let res = usecase.execute(&ctx).await;

        let expected_at = booking().start_time - Duration::hours(1);
        match res {
            Ok(ScheduleOutcome::Scheduled(reminder)) => {
                assert_eq!(reminder.booking_reference, "booking-42");
                assert_eq!(reminder.workflow_step_id, 7);
                assert_eq!(reminder.method, DeliveryMethod::Webhook);
                assert_eq!(reminder.scheduled_at, expected_at);
                assert!(reminder.scheduled);
            }
            other => panic!("Expected scheduled outcome, got {:?}", other),
        }

        let persisted = ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await;
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].scheduled_at, expected_at);

        let stored_booking = ctx
            .repos
            .bookings
            .find_by_reference("booking-42")
            .await
            .unwrap();
        assert_eq!(stored_booking.title, "Quarterly sync");

        let stored_step = ctx.repos.workflow_steps.find(7).await.unwrap();
        assert_eq!(stored_step.trigger, TriggerEvent::BeforeEvent);
        assert_eq!(stored_step.webhook_url, "http://127.0.0.1:9/hook");
    }

    #[actix_web::main]
    #[test]
    async fn it_schedules_after_event_trigger_relative_to_event_end() {
        let ctx = setup();
        let mut usecase = usecase(
            TriggerEvent::AfterEvent,
            TimeOffset {
                amount: Some(30),
                unit: Some(TimeUnit::Minute),
            },
        );

        let res = usecase.execute(&ctx).await;

        let expected_at = booking().end_time + Duration::minutes(30);
        match res {
            Ok(ScheduleOutcome::Scheduled(reminder)) => {
                assert_eq!(reminder.scheduled_at, expected_at);
            }
            other => panic!("Expected scheduled outcome, got {:?}", other),
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_delivers_right_away_when_target_is_in_the_past() {
        let ctx = setup();
        // Offset larger than the gap between now and the event start
        let mut usecase = usecase(
            TriggerEvent::BeforeEvent,
            TimeOffset {
                amount: Some(3),
                unit: Some(TimeUnit::Hour),
            },
        );

        let res = usecase.execute(&ctx).await;

        assert!(matches!(res, Ok(ScheduleOutcome::Delivered(_))));
        assert!(ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_delivers_right_away_when_offset_is_unusable() {
        let ctx = setup();
        let unusable = vec![
            TimeOffset {
                amount: Some(15),
                unit: None,
            },
            TimeOffset {
                amount: None,
                unit: Some(TimeUnit::Minute),
            },
            TimeOffset {
                amount: Some(0),
                unit: Some(TimeUnit::Minute),
            },
            TimeOffset {
                amount: Some(-10),
                unit: Some(TimeUnit::Minute),
            },
        ];

        for offset in unusable {
            let mut usecase = usecase(TriggerEvent::BeforeEvent, offset);
            let res = usecase.execute(&ctx).await;
            assert!(matches!(res, Ok(ScheduleOutcome::Delivered(_))));
        }
        assert!(ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_delivers_at_the_exact_target_instant() {
        let ctx = setup();
        // Target resolves to exactly the mocked now
        let mut usecase = usecase(
            TriggerEvent::BeforeEvent,
            TimeOffset {
                amount: Some(2),
                unit: Some(TimeUnit::Hour),
            },
        );

        let res = usecase.execute(&ctx).await;

        assert!(matches!(res, Ok(ScheduleOutcome::Delivered(_))));
        assert!(ctx
            .repos
            .webhook_reminders
            .find_by_booking("booking-42")
            .await
            .is_empty());
    }
}
