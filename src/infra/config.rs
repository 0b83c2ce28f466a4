//! Centralized configuration (environment variables + defaults).
//!
//! Unset variables fall back to their defaults; set-but-invalid values are errors.

use anyhow::Context;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 2000;
pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 50;

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: {:?}", name, v)),
        _ => Ok(default),
    }
}

/// Credits the session starts with (`SEED_BALANCE`, default 5922).
pub fn seed_balance() -> anyhow::Result<u64> {
    parse_var("SEED_BALANCE", crate::domain::catalog::SEED_BALANCE)
}

/// Address the HTTP shell listens on (`API_BIND_ADDR`).
pub fn api_bind_addr() -> String {
    std::env::var("API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_API_BIND_ADDR.to_string())
}

/// Total length of the reveal animation (`REVEAL_DURATION_MS`).
pub fn reveal_duration() -> anyhow::Result<Duration> {
    parse_var("REVEAL_DURATION_MS", DEFAULT_REVEAL_DURATION_MS).map(Duration::from_millis)
}

/// Time between two animation frames (`REVEAL_INTERVAL_MS`, at least 1).
pub fn reveal_interval() -> anyhow::Result<Duration> {
    parse_var("REVEAL_INTERVAL_MS", DEFAULT_REVEAL_INTERVAL_MS)
        .map(|ms| Duration::from_millis(ms.max(1)))
}

/// Directory backup files are written to (`EXPORT_DIR`, default: current directory).
pub fn export_dir() -> PathBuf {
    std::env::var("EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
