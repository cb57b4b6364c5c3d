//! Runtime settings read from the environment (optionally seeded from `.env` by the binary).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SQLite location, e.g. `sqlite://app.db` or `sqlite::memory:`.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Dev mode: verbose default log filter and SQL statement logging.
    pub debug: bool,
    pub max_connections: u32,
    /// Insert sample rows when both tables are empty.
    pub seed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            debug: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed: false,
        }
    }
}

impl Settings {
    /// Read `DATABASE_URL`, `BAKERY_HOST`, `BAKERY_PORT`, `BAKERY_DEBUG`,
    /// `BAKERY_MAX_CONNECTIONS` and `BAKERY_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let port = match lookup("BAKERY_PORT") {
            Some(v) => parse_number("BAKERY_PORT", &v)?,
            None => defaults.port,
        };
        let max_connections = match lookup("BAKERY_MAX_CONNECTIONS") {
            Some(v) => parse_number("BAKERY_MAX_CONNECTIONS", &v)?,
            None => defaults.max_connections,
        };
        let debug = match lookup("BAKERY_DEBUG") {
            Some(v) => parse_bool("BAKERY_DEBUG", &v)?,
            None => defaults.debug,
        };
        let seed = match lookup("BAKERY_SEED") {
            Some(v) => parse_bool("BAKERY_SEED", &v)?,
            None => defaults.seed,
        };
        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("BAKERY_HOST").unwrap_or(defaults.host),
            port,
            debug,
            max_connections,
            seed,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BAKERY_HOST",
            value: self.host.clone(),
        })
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "bakery_api=debug,tower_http=debug"
        } else {
            "bakery_api=info,tower_http=info"
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 5555);
        assert_eq!(settings.bind_addr().unwrap().to_string(), "127.0.0.1:5555");
    }

    #[test]
    fn reads_every_variable() {
        let settings = settings_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BAKERY_HOST", "0.0.0.0"),
            ("BAKERY_PORT", "8080"),
            ("BAKERY_DEBUG", "true"),
            ("BAKERY_MAX_CONNECTIONS", "2"),
            ("BAKERY_SEED", "1"),
        ])
        .unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert!(settings.debug);
        assert!(settings.seed);
        assert_eq!(settings.max_connections, 2);
        assert_eq!(settings.default_log_filter(), "bakery_api=debug,tower_http=debug");
    }

    #[test]
    fn rejects_bad_port() {
        let err = settings_from(&[("BAKERY_PORT", "bakery")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BAKERY_PORT", .. }));
    }

    #[test]
    fn rejects_bad_flag() {
        let err = settings_from(&[("BAKERY_DEBUG", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "BAKERY_DEBUG", .. }));
    }

    #[test]
    fn rejects_bad_host() {
        let settings = settings_from(&[("BAKERY_HOST", "not a host")]).unwrap();
        assert!(settings.bind_addr().is_err());
    }
}
