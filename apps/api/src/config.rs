use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; invalid numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Enables the generative note writer when set.
    pub gemini_api_key: Option<String>,
    /// Base URL of the profile data service. Without it every note is a fallback note.
    pub profile_source_url: Option<String>,
    pub profile_timeout_secs: u64,
    /// Ceiling on simultaneously in-flight gated requests.
    pub max_concurrent_requests: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_concurrent_requests: usize =
            parse_or(&optional, "MAX_CONCURRENT_REQUESTS", 20)?;
        if max_concurrent_requests == 0 {
            anyhow::bail!("MAX_CONCURRENT_REQUESTS must be at least 1");
        }

        Ok(Config {
            port: parse_or(&optional, "PORT", 3001)?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            gemini_api_key: optional("GEMINI_API_KEY"),
            profile_source_url: optional("PROFILE_SOURCE_URL"),
            profile_timeout_secs: parse_or(&optional, "PROFILE_TIMEOUT_SECS", 30)?,
            max_concurrent_requests,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
