//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use super::constants::{
    DEBUG_LOG_LEVEL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MIN_CONNECTIONS, ENV_APP_ENV, ENV_CONNECT_TIMEOUT_SECS, ENV_DATABASE_URL,
    ENV_MAX_CONNECTIONS, ENV_MIN_CONNECTIONS, ENV_SECRET_KEY,
};
use crate::errors::{AppError, AppResult};

/// Settings profile selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Production,
    Development,
    Test,
}

impl AppEnv {
    /// Log filter used when neither `--verbose` nor `RUST_LOG` is given
    pub fn default_log_level(&self) -> &'static str {
        match self {
            AppEnv::Production => DEFAULT_LOG_LEVEL,
            AppEnv::Development | AppEnv::Test => DEBUG_LOG_LEVEL,
        }
    }
}

impl FromStr for AppEnv {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(AppEnv::Production),
            "dev" | "development" => Ok(AppEnv::Development),
            "test" => Ok(AppEnv::Test),
            other => Err(AppError::config(format!(
                "{} must be one of prod, dev, test (got {:?})",
                ENV_APP_ENV, other
            ))),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnv::Production => write!(f, "prod"),
            AppEnv::Development => write!(f, "dev"),
            AppEnv::Test => write!(f, "test"),
        }
    }
}

/// Application settings. Built once at startup and never mutated.
#[derive(Debug)]
pub struct Settings {
    pub app_env: AppEnv,
    database_url: SecretString,
    pub min_connection_count: u32,
    pub max_connection_count: u32,
    pub connect_timeout: Duration,
    secret_key: Option<SecretString>,
    pub log_level: String,
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `AppError::Config` when a value is missing, unparsable, or the
    /// pool bounds are inconsistent.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = match lookup(ENV_APP_ENV) {
            Some(value) => value.parse()?,
            None => AppEnv::default(),
        };

        let database_url = lookup(ENV_DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::config(format!("{} must be set", ENV_DATABASE_URL)))?;

        let min_connection_count =
            parse_or(&lookup, ENV_MIN_CONNECTIONS, DEFAULT_MIN_CONNECTIONS)?;
        let max_connection_count =
            parse_or(&lookup, ENV_MAX_CONNECTIONS, DEFAULT_MAX_CONNECTIONS)?;
        let connect_timeout_secs =
            parse_or(&lookup, ENV_CONNECT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)?;

        if max_connection_count == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                ENV_MAX_CONNECTIONS
            )));
        }
        if min_connection_count > max_connection_count {
            return Err(AppError::config(format!(
                "{} ({}) exceeds {} ({})",
                ENV_MIN_CONNECTIONS, min_connection_count, ENV_MAX_CONNECTIONS, max_connection_count
            )));
        }

        Ok(Self {
            app_env,
            database_url: SecretString::from(database_url),
            min_connection_count,
            max_connection_count,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            secret_key: lookup(ENV_SECRET_KEY).map(SecretString::from),
            log_level: app_env.default_log_level().to_string(),
        })
    }

    /// Database URL for driver use only. Never log this value.
    pub fn database_url(&self) -> &str {
        self.database_url.expose_secret()
    }

    /// Application secret, if configured.
    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_ref().map(|key| key.expose_secret())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{} has an invalid value: {:?}", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_to_production() {
        let settings =
            Settings::from_lookup(lookup_from(&[(ENV_DATABASE_URL, "postgres://db/app")])).unwrap();

        assert_eq!(settings.app_env, AppEnv::Production);
        assert_eq!(settings.min_connection_count, DEFAULT_MIN_CONNECTIONS);
        assert_eq!(settings.max_connection_count, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
        assert_eq!(settings.log_level, "info");
        assert!(settings.secret_key().is_none());
    }

    #[test]
    fn test_reads_all_values() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_APP_ENV, "test"),
            (ENV_DATABASE_URL, "postgres://db/app_test"),
            (ENV_MIN_CONNECTIONS, "2"),
            (ENV_MAX_CONNECTIONS, "5"),
            (ENV_CONNECT_TIMEOUT_SECS, "3"),
            (ENV_SECRET_KEY, "s3cr3t"),
        ]))
        .unwrap();

        assert_eq!(settings.app_env, AppEnv::Test);
        assert_eq!(settings.database_url(), "postgres://db/app_test");
        assert_eq!(settings.min_connection_count, 2);
        assert_eq!(settings.max_connection_count, 5);
        assert_eq!(settings.connect_timeout, Duration::from_secs(3));
        assert_eq!(settings.secret_key(), Some("s3cr3t"));
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_app_env_aliases() {
        assert_eq!("prod".parse::<AppEnv>().unwrap(), AppEnv::Production);
        assert_eq!("Production".parse::<AppEnv>().unwrap(), AppEnv::Production);
        assert_eq!("dev".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!("development".parse::<AppEnv>().unwrap(), AppEnv::Development);
        assert_eq!(" test ".parse::<AppEnv>().unwrap(), AppEnv::Test);
        assert!("staging".parse::<AppEnv>().is_err());
    }

    #[test]
    fn test_missing_database_url() {
        let result = Settings::from_lookup(lookup_from(&[(ENV_APP_ENV, "dev")]));
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = Settings::from_lookup(lookup_from(&[(ENV_DATABASE_URL, "  ")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_inverted_pool_bounds() {
        let result = Settings::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "postgres://db/app"),
            (ENV_MIN_CONNECTIONS, "8"),
            (ENV_MAX_CONNECTIONS, "4"),
        ]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_max_and_garbage() {
        let zero = Settings::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "postgres://db/app"),
            (ENV_MIN_CONNECTIONS, "0"),
            (ENV_MAX_CONNECTIONS, "0"),
        ]));
        assert!(matches!(zero, Err(AppError::Config(_))));

        let garbage = Settings::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "postgres://db/app"),
            (ENV_MAX_CONNECTIONS, "many"),
        ]));
        assert!(matches!(garbage, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_DATABASE_URL, "postgres://user:hunter2@db/app"),
            (ENV_SECRET_KEY, "topsecret"),
        ]))
        .unwrap();

        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("topsecret"));
    }
}
