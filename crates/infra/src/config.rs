use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// How often the delivery sweep looks for due notification schedules,
    /// in seconds.
    pub sweep_interval_secs: u64,
    /// Server key for the push delivery transport. When it is missing the
    /// sweep still runs, but dispatches through an inert in-process
    /// transport.
    pub fcm_server_key: Option<String>,
}

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

        let default_sweep_interval = 60 * 60; // hourly
        let sweep_interval_secs = match std::env::var("SWEEP_INTERVAL_SECS") {
            Ok(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!(
                        "The given SWEEP_INTERVAL_SECS: {} is not valid, falling back to the default: {}.",
                        value, default_sweep_interval
                    );
                    default_sweep_interval
                }
            },
            Err(_) => default_sweep_interval,
        };

        let fcm_server_key = std::env::var("FCM_SERVER_KEY").ok();
        if fcm_server_key.is_none() {
            info!("Did not find FCM_SERVER_KEY environment variable. Push delivery will be disabled.");
        }

        Self {
            port,
            sweep_interval_secs,
            fcm_server_key,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
