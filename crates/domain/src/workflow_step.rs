use crate::trigger::TriggerEvent;
use serde::{Deserialize, Serialize};

/// The delivery configuration of one workflow step. Captured whenever a
/// notification is deferred so the delivery job can rebuild the payload at
/// maturity without the original request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: i64,
    pub trigger: TriggerEvent,
    pub webhook_url: String,
    /// Raw template for a custom payload. Absent means the default payload
    pub template: Option<String>,
}
