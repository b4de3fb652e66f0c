use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use dotenvy::dotenv;

/// Log output format for the `fmt` layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format: {other}"),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub allowed_origins: Vec<String>,
    /// Fixed seed for reviewer selection; entropy-seeded when unset
    pub rng_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from the
    /// individual `DB_*` settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                var("DB_USER", "reviewer"),
                var("DB_PASSWORD", ""),
                var("DB_HOST", "localhost"),
                var("DB_PORT", "5432"),
                var("DB_NAME", "reviewer-pr-db"),
                var("DB_SSLMODE", "disable"),
            ),
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(format) => format.parse()?,
            None if var("ENV", "development") == "development" => LogFormat::Pretty,
            None => LogFormat::Json,
        };

        Ok(Self {
            database_url,
            port: var("APP_PORT", "8080")
                .parse()
                .context("APP_PORT must be a valid port number")?,
            db_max_connections: var("DB_MAX_CONNECTIONS", "10")
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            allowed_origins: var("ALLOWED_ORIGINS", "*")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            rng_seed: lookup("REVIEWER_RNG_SEED")
                .map(|seed| seed.parse())
                .transpose()
                .context("REVIEWER_RNG_SEED must be an unsigned integer")?,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(
            config.database_url,
            "postgres://reviewer:@localhost:5432/reviewer-pr-db?sslmode=disable"
        );
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.allowed_origins, vec!["*"]);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_database_url_composed_from_parts() {
        let config = config_from(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USER", "svc"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "reviews"),
            ("DB_SSLMODE", "require"),
        ])
        .unwrap();
        assert_eq!(
            config.database_url,
            "postgres://svc:secret@db:6543/reviews?sslmode=require"
        );
    }

    #[test]
    fn test_database_url_takes_precedence() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/other"),
            ("DB_HOST", "ignored"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://localhost/other");
    }

    #[test]
    fn test_production_logs_json() {
        let config = config_from(&[("ENV", "production")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Json);

        let config = config_from(&[("ENV", "production"), ("LOG_FORMAT", "pretty")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_origins_and_seed() {
        let config = config_from(&[
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("REVIEWER_RNG_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("APP_PORT", "http")]).is_err());
        assert!(config_from(&[("REVIEWER_RNG_SEED", "-1")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
