use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("CONNECTION_STRING")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                "Missing required environment variable: CONNECTION_STRING (or DATABASE_URL)"
                    .to_string()
            })?;

        let host: IpAddr = or_default(&lookup, "HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = or_default(&lookup, "PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let max_body_size: usize = or_default(&lookup, "MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = or_default(&lookup, "DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid DB_MAX_CONNECTIONS: {e}"))?;
        if db_max_connections == 0 {
            return Err("Invalid DB_MAX_CONNECTIONS: must be at least 1".to_string());
        }

        let acquire_secs: u64 = or_default(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", "5")
            .parse()
            .map_err(|e| format!("Invalid DB_ACQUIRE_TIMEOUT_SECS: {e}"))?;

        let log_level = or_default(&lookup, "LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            db_max_connections,
            db_acquire_timeout: Duration::from_secs(acquire_secs),
            log_level,
        })
    }
}

fn or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| default.to_string())
}
