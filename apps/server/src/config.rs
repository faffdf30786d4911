use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub app_name: String,
    pub environment: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            app_name: "Stock Evaluator".into(),
            environment: "development".into(),
            cors_allow: vec!["*".into()],
            request_timeout: Duration::from_millis(30000),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let listen_addr = match lookup("STOCKEVAL_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid STOCKEVAL_LISTEN_ADDR '{}'", addr))?,
            None => defaults.listen_addr,
        };
        let app_name = lookup("STOCKEVAL_APP_NAME").unwrap_or(defaults.app_name);
        let environment = lookup("STOCKEVAL_ENVIRONMENT").unwrap_or(defaults.environment);
        let cors_allow = lookup("STOCKEVAL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = lookup("STOCKEVAL_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(30000);
        let log_format = match lookup("STOCKEVAL_LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            app_name,
            environment,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
