mod inmemory;
mod postgres;

pub use inmemory::InMemoryWorkflowStepRepo;
pub use postgres::PostgresWorkflowStepRepo;

use herald_domain::WorkflowStep;

#[async_trait::async_trait]
pub trait IWorkflowStepRepo: Send + Sync {
    async fn upsert(&self, step: &WorkflowStep) -> anyhow::Result<()>;
    async fn find(&self, step_id: i64) -> Option<WorkflowStep>;
}
