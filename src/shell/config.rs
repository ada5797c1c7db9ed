// Runtime configuration read from the environment.
//
// Variables
// - HOTELS_HTTP_ADDR: listen address, default 0.0.0.0:8080.
// - HOTELS_REQUEST_TIMEOUT_MS: per-request deadline, default 10000.
// - HOTELS_SEED_DEMO_DATA: seed the in-memory store on start, default true.

use anyhow::{Context, bail};
use std::net::SocketAddr;
use std::time::Duration;

const HTTP_ADDR: &str = "HOTELS_HTTP_ADDR";
const REQUEST_TIMEOUT_MS: &str = "HOTELS_REQUEST_TIMEOUT_MS";
const SEED_DEMO_DATA: &str = "HOTELS_SEED_DEMO_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub request_timeout: Duration,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_millis(10_000),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(HTTP_ADDR) {
            config.http_addr = raw
                .parse()
                .with_context(|| format!("{HTTP_ADDR} is not a socket address: {raw:?}"))?;
        }
        if let Some(raw) = lookup(REQUEST_TIMEOUT_MS) {
            let millis: u64 = raw
                .parse()
                .with_context(|| format!("{REQUEST_TIMEOUT_MS} is not a number: {raw:?}"))?;
            if millis == 0 {
                bail!("{REQUEST_TIMEOUT_MS} must be greater than zero");
            }
            config.request_timeout = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(SEED_DEMO_DATA) {
            config.seed_demo_data = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => bail!("{SEED_DEMO_DATA} is not a boolean: {raw:?}"),
            };
        }

        Ok(config)
    }
}
