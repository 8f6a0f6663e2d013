use super::IWorkflowStepRepo;
use herald_domain::WorkflowStep;
use sqlx::{FromRow, PgPool};

pub struct PostgresWorkflowStepRepo {
    pool: PgPool,
}

impl PostgresWorkflowStepRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkflowStepRaw {
    step_id: i64,
    trigger_event: String,
    webhook_url: String,
    template: Option<String>,
}

impl Into<WorkflowStep> for WorkflowStepRaw {
    fn into(self) -> WorkflowStep {
        WorkflowStep {
            id: self.step_id,
            trigger: self.trigger_event.into(),
            webhook_url: self.webhook_url,
            template: self.template,
        }
    }
}

#[async_trait::async_trait]
impl IWorkflowStepRepo for PostgresWorkflowStepRepo {
    async fn upsert(&self, step: &WorkflowStep) -> anyhow::Result<()> {
        let trigger_event: String = step.trigger.into();
        sqlx::query(
            r#"
            INSERT INTO workflow_steps
            (step_id, trigger_event, webhook_url, template)
            VALUES($1, $2, $3, $4)
            ON CONFLICT (step_id) DO UPDATE SET
                trigger_event = EXCLUDED.trigger_event,
                webhook_url = EXCLUDED.webhook_url,
                template = EXCLUDED.template
            "#,
        )
        .bind(step.id)
        .bind(trigger_event)
        .bind(&step.webhook_url)
        .bind(&step.template)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, step_id: i64) -> Option<WorkflowStep> {
        let step: Option<WorkflowStepRaw> = sqlx::query_as(
            r#"
            SELECT * FROM workflow_steps AS s
            WHERE s.step_id = $1
            "#,
        )
        .bind(step_id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or(None);

        step.map(|s| s.into())
    }
}
