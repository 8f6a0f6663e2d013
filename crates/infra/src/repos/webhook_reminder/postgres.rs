use super::IWebhookReminderRepo;
use chrono::{DateTime, Utc};
use herald_domain::WebhookReminder;
use sqlx::{FromRow, PgPool};

pub struct PostgresWebhookReminderRepo {
    pool: PgPool,
}

impl PostgresWebhookReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WebhookReminderRaw {
    booking_reference: String,
    workflow_step_id: i64,
    method: String,
    scheduled_at: DateTime<Utc>,
    scheduled: bool,
}

impl Into<WebhookReminder> for WebhookReminderRaw {
    fn into(self) -> WebhookReminder {
        WebhookReminder {
            booking_reference: self.booking_reference,
            workflow_step_id: self.workflow_step_id,
            method: self.method.into(),
            scheduled_at: self.scheduled_at,
            scheduled: self.scheduled,
        }
    }
}

#[async_trait::async_trait]
impl IWebhookReminderRepo for PostgresWebhookReminderRepo {
    async fn insert(&self, reminder: &WebhookReminder) -> anyhow::Result<()> {
        let method: String = reminder.method.into();
        sqlx::query(
            r#"
            INSERT INTO webhook_reminders
            (booking_reference, workflow_step_id, method, scheduled_at, scheduled)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&reminder.booking_reference)
        .bind(reminder.workflow_step_id)
        .bind(method)
        .bind(reminder.scheduled_at)
        .bind(reminder.scheduled)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_booking(&self, booking_reference: &str) -> Vec<WebhookReminder> {
        let reminders: Vec<WebhookReminderRaw> = sqlx::query_as(
            r#"
            SELECT * FROM webhook_reminders AS r
            WHERE r.booking_reference = $1
            "#,
        )
        .bind(booking_reference)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }

    async fn delete_all_before(&self, before: DateTime<Utc>) -> Vec<WebhookReminder> {
        let reminders: Vec<WebhookReminderRaw> = sqlx::query_as(
            r#"
            DELETE FROM webhook_reminders AS r
            WHERE r.scheduled_at <= $1
            RETURNING *
            "#,
        )
        .bind(before)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default();

        reminders.into_iter().map(|r| r.into()).collect()
    }
}
