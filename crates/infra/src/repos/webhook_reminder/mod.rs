mod inmemory;
mod postgres;

pub use inmemory::InMemoryWebhookReminderRepo;
pub use postgres::PostgresWebhookReminderRepo;

use chrono::{DateTime, Utc};
use herald_domain::WebhookReminder;

#[async_trait::async_trait]
pub trait IWebhookReminderRepo: Send + Sync {
    /// Persists a deferred reminder. Unlike delivery failures this error
    /// matters to callers, a lost reminder is a lost notification
    async fn insert(&self, reminder: &WebhookReminder) -> anyhow::Result<()>;
    async fn find_by_booking(&self, booking_reference: &str) -> Vec<WebhookReminder>;
    /// Removes and returns every reminder due at or before `before`
    async fn delete_all_before(&self, before: DateTime<Utc>) -> Vec<WebhookReminder>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, Context};
    use chrono::{DateTime, Duration, Timelike, Utc};
    use herald_domain::WebhookReminder;

    async fn create_contexts() -> Vec<Context> {
        vec![Context::create_inmemory(), setup_context().await]
    }

    /// Second precision so values survive a round trip through postgres
    fn now() -> DateTime<Utc> {
        Utc::now().with_nanosecond(0).unwrap()
    }

    #[tokio::test]
    async fn insert_and_find() {
        for ctx in create_contexts().await {
            let reminder = WebhookReminder::new("booking-reminders".into(), 201, now());

            assert!(ctx.repos.webhook_reminders.insert(&reminder).await.is_ok());

            let found = ctx
                .repos
                .webhook_reminders
                .find_by_booking(&reminder.booking_reference)
                .await;
            assert_eq!(found.len(), 1);
            assert_eq!(found[0], reminder);

            assert!(ctx
                .repos
                .webhook_reminders
                .find_by_booking("no-such-booking")
                .await
                .is_empty());

            // Cleanup so other contexts against the same database start fresh
            ctx.repos
                .webhook_reminders
                .delete_all_before(Utc::now() + Duration::hours(1))
                .await;
        }
    }

    #[tokio::test]
    async fn delete_all_before_drains_only_due_reminders() {
        for ctx in create_contexts().await {
            let now = now();
            let due = WebhookReminder::new("booking-due".into(), 202, now - Duration::minutes(5));
            let exactly_now = WebhookReminder::new("booking-now".into(), 203, now);
            let future =
                WebhookReminder::new("booking-future".into(), 204, now + Duration::hours(2));

            for reminder in [&due, &exactly_now, &future] {
                assert!(ctx.repos.webhook_reminders.insert(reminder).await.is_ok());
            }

            let drained = ctx.repos.webhook_reminders.delete_all_before(now).await;
            assert_eq!(drained.len(), 2);
            assert!(drained.contains(&due));
            assert!(drained.contains(&exactly_now));

            // The future reminder is untouched
            let left = ctx
                .repos
                .webhook_reminders
                .find_by_booking(&future.booking_reference)
                .await;
            assert_eq!(left.len(), 1);

            // A second drain finds nothing new
            assert!(ctx
                .repos
                .webhook_reminders
                .delete_all_before(now)
                .await
                .is_empty());

            ctx.repos
                .webhook_reminders
                .delete_all_before(now + Duration::hours(3))
                .await;
        }
    }
}
