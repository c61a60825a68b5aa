use std::sync::Once;
use std::time::Duration;

use client::{ApiResult, Connection};
use thiserror::Error;

pub const BASE_URL_VAR: &str = "E2E_BASE_URL";
pub const TIMEOUT_VAR: &str = "E2E_TIMEOUT_SECS";
pub const MAX_CONCURRENCY_VAR: &str = "E2E_MAX_CONCURRENCY";
pub const ADMIN_EMAIL_VAR: &str = "E2E_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_VAR: &str = "E2E_ADMIN_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got `{value}`")]
    InvalidNumber { var: &'static str, value: String },

    #[error("{present} is set but {missing} is not")]
    IncompleteCredentials {
        present: &'static str,
        missing: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Configuration for E2E scenarios
#[derive(Debug, Clone)]
pub struct E2EConfig {
    /// Base URL of the discussion-board API
    pub base_url: String,
    /// Wall-clock budget of one scenario
    pub timeout: Duration,
    /// Timeout of a single HTTP request
    pub request_timeout: Duration,
    /// Scenarios the runner executes at once
    pub max_concurrency: usize,
    /// Pre-provisioned administrator; scenarios join a fresh one when unset
    pub admin: Option<Credentials>,
}

impl Default for E2EConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:37001".to_string(),
            timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(10),
            max_concurrency: 4,
            admin: None,
        }
    }
}

impl E2EConfig {
    /// Local backend with short timeouts.
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:37001".to_string(),
            timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(5),
            max_concurrency: 2,
            admin: None,
        }
    }

    /// Defaults overridden by `E2E_*` variables, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_env();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(value) = lookup(TIMEOUT_VAR) {
            config.timeout = Duration::from_secs(parse_positive(TIMEOUT_VAR, &value)? as u64);
        }
        if let Some(value) = lookup(MAX_CONCURRENCY_VAR) {
            config.max_concurrency = parse_positive(MAX_CONCURRENCY_VAR, &value)?;
        }
        config.admin = match (lookup(ADMIN_EMAIL_VAR), lookup(ADMIN_PASSWORD_VAR)) {
            (Some(email), Some(password)) => Some(Credentials { email, password }),
            (Some(_), None) => {
                return Err(ConfigError::IncompleteCredentials {
                    present: ADMIN_EMAIL_VAR,
                    missing: ADMIN_PASSWORD_VAR,
                })
            }
            (None, Some(_)) => {
                return Err(ConfigError::IncompleteCredentials {
                    present: ADMIN_PASSWORD_VAR,
                    missing: ADMIN_EMAIL_VAR,
                })
            }
            (None, None) => None,
        };
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Anonymous connection to the configured backend.
    pub fn connection(&self) -> ApiResult<Connection> {
        Connection::with_timeout(&self.base_url, self.request_timeout)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        }),
    }
}

// Load .env once per process
fn load_env() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = dotenv::from_filename("tests/.env");
        let _ = dotenv::dotenv();
    });
}
