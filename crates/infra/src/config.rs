use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How long an outbound webhook call may take before the transport
    /// gives up. Failed calls are reported, never retried, so this is the
    /// only bound on delivery time.
    pub webhook_timeout_millis: u64,
}

const DEFAULT_WEBHOOK_TIMEOUT_MILLIS: u64 = 10 * 1000;

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };
        let webhook_timeout_millis = match std::env::var("WEBHOOK_TIMEOUT_MILLIS") {
            Ok(timeout) => match timeout.parse::<u64>() {
                Ok(timeout) => timeout,
                Err(_) => {
                    warn!(
                        "The given WEBHOOK_TIMEOUT_MILLIS: {} is not valid, falling back to the default: {}.",
                        timeout, DEFAULT_WEBHOOK_TIMEOUT_MILLIS
                    );
                    DEFAULT_WEBHOOK_TIMEOUT_MILLIS
                }
            },
            Err(_) => DEFAULT_WEBHOOK_TIMEOUT_MILLIS,
        };
        Self {
            port,
            webhook_timeout_millis,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
