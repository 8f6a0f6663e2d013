mod base;
mod status;
mod webhook;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use herald_api_structs::dtos::*;
pub use herald_api_structs::ScheduleOutcomeResponse;
pub use herald_domain::{DeliveryMethod, Metadata, TimeOffset, TimeUnit, TriggerEvent};
use status::StatusClient;
use std::sync::Arc;
use webhook::WebhookClient;
pub use webhook::ScheduleWebhookInput;

/// Herald Server SDK
///
/// The SDK contains methods for interacting with the Herald server API.
#[derive(Clone)]
pub struct HeraldSDK {
    pub status: StatusClient,
    pub webhook: WebhookClient,
}

impl HeraldSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let status = StatusClient::new(base.clone());
        let webhook = WebhookClient::new(base);

        Self { status, webhook }
    }
}
