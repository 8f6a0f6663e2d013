use super::IWebhookReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use herald_domain::WebhookReminder;

pub struct InMemoryWebhookReminderRepo {
    reminders: std::sync::Mutex<Vec<WebhookReminder>>,
}

impl InMemoryWebhookReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IWebhookReminderRepo for InMemoryWebhookReminderRepo {
    async fn insert(&self, reminder: &WebhookReminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find_by_booking(&self, booking_reference: &str) -> Vec<WebhookReminder> {
        find_by(&self.reminders, |r| {
            r.booking_reference == booking_reference
        })
    }

    async fn delete_all_before(&self, before: DateTime<Utc>) -> Vec<WebhookReminder> {
        find_and_delete_by(&self.reminders, |r| r.scheduled_at <= before)
    }
}
