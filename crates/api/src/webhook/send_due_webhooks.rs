use crate::shared::usecase::UseCase;
use crate::webhook::build_payload;
use futures::future::join_all;
use herald_domain::{DeliveryReport, WebhookReminder};
use herald_infra::{Context, VariableRenderer, WebhookClient};
use tracing::warn;

/// Drains reminders that are due and delivers their notifications
#[derive(Debug)]
pub struct SendDueWebhooksUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueWebhooksUseCase {
    type Response = Vec<(WebhookReminder, DeliveryReport)>;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueWebhooks";

    /// This will run every minute
    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_utc_datetime();
        let due = ctx.repos.webhook_reminders.delete_all_before(now).await;
        if due.is_empty() {
            return Ok(Vec::new());
        }

        let renderer = VariableRenderer {};
        let mut outgoing = Vec::with_capacity(due.len());
        for reminder in due {
            let step = match ctx
                .repos
                .workflow_steps
                .find(reminder.workflow_step_id)
                .await
            {
                Some(step) => step,
                None => {
                    warn!(
                        "No workflow step {} for due reminder on booking {}, dropping it",
                        reminder.workflow_step_id, reminder.booking_reference
                    );
                    continue;
                }
            };
            let booking = match ctx
                .repos
                .bookings
                .find_by_reference(&reminder.booking_reference)
                .await
            {
                Some(booking) => booking,
                None => {
                    warn!(
                        "No booking {} for due reminder on workflow step {}, dropping it",
                        reminder.booking_reference, reminder.workflow_step_id
                    );
                    continue;
                }
            };

            let payload = build_payload(
                &booking,
                step.trigger,
                step.template.as_deref(),
                &renderer,
                now,
            );
            outgoing.push((reminder, step.webhook_url, payload));
        }

        let client = WebhookClient::new(ctx.config.webhook_timeout_millis);
        let sends = outgoing
            .iter()
            .map(|(reminder, url, payload)| client.send(url, payload, reminder.workflow_step_id));
        let reports = join_all(sends).await;

        Ok(outgoing
            .into_iter()
            .zip(reports)
            .map(|((reminder, _, _), report)| (reminder, report))
            .collect())
    }
}
