use std::env;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub ping_message: String,
    /// Interval of the background wait-time decay task. Zero disables it.
    pub queue_tick_seconds: u64,
    pub prediction_jitter: bool,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ping_message: "pong".to_string(),
            queue_tick_seconds: 0,
            prediction_jitter: true,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            host: env::var("HOST")
                .unwrap_or_else(|_| {
                    warn!("HOST not set, using default");
                    defaults.host.clone()
                }),
            port: parse_var("PORT", defaults.port),
            ping_message: env::var("PING_MESSAGE")
                .unwrap_or_else(|_| defaults.ping_message.clone()),
            queue_tick_seconds: parse_var("QUEUE_TICK_SECONDS", defaults.queue_tick_seconds),
            prediction_jitter: parse_var("PREDICTION_JITTER", defaults.prediction_jitter),
            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),
        };

        if !config.is_queue_simulation_enabled() {
            warn!("QUEUE_TICK_SECONDS is 0, background wait-time decay disabled");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_queue_simulation_enabled(&self) -> bool {
        self.queue_tick_seconds > 0
    }
}

fn parse_var<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has an invalid value '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
