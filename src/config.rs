use std::net::SocketAddr;
use thiserror::Error;

/// One year.
const MAX_SESSION_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable '{key}' has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings. Every key has a default, so an empty environment works.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Rows shown per page of the listings table.
    pub page_size: usize,
    /// Name the letters are signed with.
    pub signature: String,
    pub session_ttl_secs: i64,
    /// Uploads larger than this are refused.
    pub max_upload_bytes: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            page_size: 10,
            signature: "StudentName".to_string(),
            session_ttl_secs: 2 * 60 * 60,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let page_size = parse_or("LOI_PAGE_SIZE", &lookup, defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "LOI_PAGE_SIZE",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        let session_ttl_secs: i64 =
            parse_or("LOI_SESSION_TTL_SECS", &lookup, defaults.session_ttl_secs)?;
        if !(1..=MAX_SESSION_TTL_SECS).contains(&session_ttl_secs) {
            return Err(ConfigError::Invalid {
                key: "LOI_SESSION_TTL_SECS",
                value: session_ttl_secs.to_string(),
                reason: format!("must be between 1 and {MAX_SESSION_TTL_SECS}"),
            });
        }

        let max_upload_bytes: u64 =
            parse_or("LOI_MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes)?;
        if max_upload_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "LOI_MAX_UPLOAD_BYTES",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Config {
            bind_addr: parse_or("LOI_BIND_ADDR", &lookup, defaults.bind_addr)?,
            max_workers: parse_or("LOI_MAX_WORKERS", &lookup, defaults.max_workers)?,
            page_size,
            signature: lookup("LOI_SIGNATURE")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.signature),
            session_ttl_secs,
            max_upload_bytes,
        })
    }
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
