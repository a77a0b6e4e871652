use std::{env, fmt::Display, str::FromStr, time::Duration};

use catalog::DEFAULT_BASE_URL;
use tracing::{info, warn};

pub struct Config {
    pub api_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: try_load("RECIPES_API_URL", DEFAULT_BASE_URL),
            http_timeout: Duration::from_millis(try_load("RECIPES_HTTP_TIMEOUT_MS", "10000")),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
