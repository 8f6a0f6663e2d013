use crate::shared::usecase::execute;
use crate::webhook::send_due_webhooks::SendDueWebhooksUseCase;
use actix_web::rt::time::{interval, sleep_until, Instant};
use herald_infra::Context;
use std::time::Duration;
use tracing::info;

pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Aligns the delivery job to minute boundaries so reminders go out at the
/// instant they were scheduled for, then drains due reminders every minute
pub fn start_send_webhooks_job(ctx: Context) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);

        sleep_until(start).await;
        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(send_due_webhooks(context));
        }
    });
}

async fn send_due_webhooks(context: Context) {
    let usecase = SendDueWebhooksUseCase {};
    if let Ok(deliveries) = execute(usecase, &context).await {
        if !deliveries.is_empty() {
            info!("Delivered {} due webhook notifications", deliveries.len());
        }
    }
}
