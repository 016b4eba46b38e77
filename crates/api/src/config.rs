use std::str::FromStr;

use numclass_facts::api::DEFAULT_NUMBERS_API_URL;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Allowed cross-origin callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `Access-Control-Allow-Origin: *`.
    Any,
    /// An explicit allow-list of origins.
    List(Vec<String>),
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared read-only with the router and handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins; `*` (the default) allows any origin.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    ///
    /// Answers 408 when exceeded, so it must stay well above
    /// `fact_timeout_secs` plus the worst-case property evaluation (a single
    /// divisor scan, several seconds for primes near `i64::MAX`).
    pub request_timeout_secs: u64,
    /// Base URL of the numeric-trivia service.
    pub numbers_api_url: String,
    /// Timeout for a single fun-fact lookup in seconds (default: `5`).
    pub fact_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `5000`                  |
    /// | `CORS_ORIGINS`         | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `NUMBERS_API_URL`      | `http://numbersapi.com` |
    /// | `FACT_TIMEOUT_SECS`    | `5`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 5000, "u16")?;
        let cors_origins =
            parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()));
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?;
        let numbers_api_url =
            lookup("NUMBERS_API_URL").unwrap_or_else(|| DEFAULT_NUMBERS_API_URL.into());
        let fact_timeout_secs = parse_var(&lookup, "FACT_TIMEOUT_SECS", 5, "u64")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            numbers_api_url,
            fact_timeout_secs,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            cors_origins: CorsOrigins::Any,
            request_timeout_secs: 30,
            numbers_api_url: DEFAULT_NUMBERS_API_URL.into(),
            fact_timeout_secs: 5,
        }
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}

fn parse_cors_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}
