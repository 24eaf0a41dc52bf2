//! Runtime configuration, loaded from `.env` and environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}={value:?} is invalid: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CafeConfig {
    /// How often the teacher's progress view re-reads storage.
    pub poll_interval: Duration,
    /// Upper bound on every store call.
    pub store_timeout: Duration,
    pub channel_capacity: usize,
    pub classroom_quota: usize,
    pub code_length: usize,
    /// Fresh codes tried before classroom creation gives up.
    pub code_attempts: usize,
    /// Tick of the staggered menu reveal.
    pub reveal_interval: Duration,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            store_timeout: Duration::from_secs(2),
            channel_capacity: 32,
            classroom_quota: 5,
            code_length: 6,
            code_attempts: 10,
            reveal_interval: Duration::from_millis(350),
        }
    }
}

impl CafeConfig {
    /// Reads `ADDUP_*` variables, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            poll_interval: millis(&lookup, "ADDUP_POLL_INTERVAL_MS", defaults.poll_interval)?,
            store_timeout: millis(&lookup, "ADDUP_STORE_TIMEOUT_MS", defaults.store_timeout)?,
            channel_capacity: number(&lookup, "ADDUP_CHANNEL_CAPACITY", defaults.channel_capacity)?,
            classroom_quota: number(&lookup, "ADDUP_CLASSROOM_QUOTA", defaults.classroom_quota)?,
            code_length: number(&lookup, "ADDUP_CODE_LENGTH", defaults.code_length)?,
            code_attempts: number(&lookup, "ADDUP_CODE_ATTEMPTS", defaults.code_attempts)?,
            reveal_interval: millis(&lookup, "ADDUP_REVEAL_INTERVAL_MS", defaults.reveal_interval)?,
        };
        Ok(config)
    }
}

fn number<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    let parsed = value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        value: value.clone(),
        reason: e.to_string(),
    })?;
    if parsed == T::default() {
        return Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(parsed)
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let default_ms = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    number(lookup, key, default_ms).map(Duration::from_millis)
}
