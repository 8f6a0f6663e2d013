use super::IWorkflowStepRepo;
use crate::repos::shared::inmemory_repo::*;
use herald_domain::WorkflowStep;

pub struct InMemoryWorkflowStepRepo {
    steps: std::sync::Mutex<Vec<WorkflowStep>>,
}

impl InMemoryWorkflowStepRepo {
    pub fn new() -> Self {
        Self {
            steps: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IWorkflowStepRepo for InMemoryWorkflowStepRepo {
    async fn upsert(&self, step: &WorkflowStep) -> anyhow::Result<()> {
        upsert_by(step, &self.steps, |s| s.id == step.id);
        Ok(())
    }

    async fn find(&self, step_id: i64) -> Option<WorkflowStep> {
        let steps = find_by(&self.steps, |s| s.id == step_id);
        if steps.is_empty() {
            return None;
        }
        Some(steps[0].clone())
    }
}
