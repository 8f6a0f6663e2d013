mod booking;
mod shared;
mod webhook_reminder;
mod workflow_step;

pub use booking::IBookingRepo;
pub use webhook_reminder::IWebhookReminderRepo;
pub use workflow_step::IWorkflowStepRepo;

use booking::{InMemoryBookingRepo, PostgresBookingRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use webhook_reminder::{InMemoryWebhookReminderRepo, PostgresWebhookReminderRepo};
use workflow_step::{InMemoryWorkflowStepRepo, PostgresWorkflowStepRepo};

#[derive(Clone)]
pub struct Repos {
    pub bookings: Arc<dyn IBookingRepo>,
    pub workflow_steps: Arc<dyn IWorkflowStepRepo>,
    pub webhook_reminders: Arc<dyn IWebhookReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        sqlx::migrate!().run(&pool).await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            workflow_steps: Arc::new(PostgresWorkflowStepRepo::new(pool.clone())),
            webhook_reminders: Arc::new(PostgresWebhookReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepo::new()),
            workflow_steps: Arc::new(InMemoryWorkflowStepRepo::new()),
            webhook_reminders: Arc::new(InMemoryWebhookReminderRepo::new()),
        }
    }
}
