mod schedule_webhook;
pub mod send_due_webhooks;

use actix_web::web;
use chrono::{DateTime, Utc};
use herald_domain::{Booking, TemplateVariables, TriggerEvent, WebhookPayload};
use herald_infra::ITemplateRenderer;
use schedule_webhook::schedule_webhook_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhooks", web::post().to(schedule_webhook_controller));
}

/// Builds the outbound body for a notification. Steps with a template get
/// the rendered template, everything else gets the default payload.
pub(crate) fn build_payload(
    booking: &Booking,
    trigger: TriggerEvent,
    template: Option<&str>,
    renderer: &dyn ITemplateRenderer,
    now: DateTime<Utc>,
) -> WebhookPayload {
    match template {
        Some(template) if !template.is_empty() => {
            let variables = TemplateVariables::from_booking(booking);
            let locale = variables.locale.clone().unwrap_or_else(|| "en".into());
            let rendered = renderer.render(template, &variables, &locale);
            WebhookPayload::from_rendered(&rendered, trigger)
        }
        _ => WebhookPayload::default_for(booking, trigger, now),
    }
}
