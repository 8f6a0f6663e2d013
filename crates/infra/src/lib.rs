mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IBookingRepo, IWebhookReminderRepo, IWorkflowStepRepo, Repos};
pub use services::template::{ITemplateRenderer, VariableRenderer};
pub use services::webhook::{WebhookClient, WEBHOOK_USER_AGENT};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::warn;

#[derive(Clone)]
pub struct Context {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl Context {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Context {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(postgres_connection_string) => {
            Context::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        Err(_) => {
            warn!(
                "{} env var was not present, falling back to inmemory repos.",
                PSQL_CONNECTION_STRING
            );
            Context::create_inmemory()
        }
    }
}
