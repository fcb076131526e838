//! # Database Configuration Module
//!
//! Values come from environment variables, typically loaded from a `.env`
//! file by the binaries before calling [`DbConfig::from_env`].
//!
//! - `DATABASE_URL`: SQLite connection string (default: `sqlite://c3lingo.db`)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://c3lingo.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub log_level: Level,
}

impl DbConfig {
    /// # Errors
    ///
    /// Fails when `DATABASE_MAX_CONNECTIONS` is set but is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => parse_max_connections(&value)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}

pub fn parse_max_connections(value: &str) -> Result<u32> {
    let max_connections: u32 = value
        .trim()
        .parse()
        .wrap_err("Invalid DATABASE_MAX_CONNECTIONS value")?;
    if max_connections == 0 {
        eyre::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
    }
    Ok(max_connections)
}

pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
