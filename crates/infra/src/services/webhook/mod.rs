use herald_domain::{DeliveryReport, WebhookPayload};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Identifying header sent with every outbound webhook call
pub const WEBHOOK_USER_AGENT: &str = "Herald-Workflow-Webhook/1.0";

/// Dispatches webhook notifications over HTTP. One POST per call, no
/// retries. The outcome is always a `DeliveryReport`, delivery problems
/// are values to the caller and never errors.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(timeout_millis: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_millis))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    pub async fn send(
        &self,
        url: &str,
        payload: &WebhookPayload,
        workflow_step_id: i64,
    ) -> DeliveryReport {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(e) => {
                error!(
                    "Unable to parse webhook url: {} for workflow step: {}. Error: {:?}",
                    url, workflow_step_id, e
                );
                return DeliveryReport::failed(format!("Invalid webhook url: {}", e));
            }
        };

        debug!(
            "Sending webhook to url: {} for workflow step: {}",
            url, workflow_step_id
        );
        let res = self
            .client
            .post(url.clone())
            .header("User-Agent", WEBHOOK_USER_AGENT)
            .json(payload)
            .send()
            .await;

        match res {
            Ok(res) => {
                let status = res.status().as_u16();
                if res.status().is_success() {
                    debug!(
                        "Webhook to url: {} for workflow step: {} succeeded with status: {}",
                        url, workflow_step_id, status
                    );
                    DeliveryReport::ok(status)
                } else {
                    error!(
                        "Webhook to url: {} for workflow step: {} was rejected with status: {}",
                        url, workflow_step_id, status
                    );
                    DeliveryReport::rejected(status)
                }
            }
            Err(e) => {
                error!(
                    "Webhook to url: {} for workflow step: {} could not be delivered. Error: {:?}",
                    url, workflow_step_id, e
                );
                DeliveryReport::failed(e.to_string())
            }
        }
    }
}
