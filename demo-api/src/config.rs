use garde::Validate;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./test.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// A single failed constraint on a loaded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationDetail {
    /// Environment variable the value came from.
    pub key: &'static str,
    pub message: String,
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    /// Values parsed but broke a constraint.
    Validation(Vec<ConfigValidationDetail>),
}

impl ConfigError {
    fn from_report(report: &garde::Report) -> Self {
        let details = report
            .iter()
            .map(|(path, error)| ConfigValidationDetail {
                key: env_key(&path.to_string()),
                message: error.message().to_string(),
            })
            .collect();
        ConfigError::Validation(details)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "Invalid value '{value}' for {key}: {reason}")
            }
            ConfigError::Validation(details) => {
                write!(f, "Config validation errors:")?;
                for detail in details {
                    write!(f, "\n  - {}: {}", detail.key, detail.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Service configuration, read from environment variables.
///
/// | Variable                   | Default               |
/// |----------------------------|-----------------------|
/// | `DATABASE_URL`             | `sqlite://./test.db`  |
/// | `BIND_ADDR`                | `0.0.0.0:8000`        |
/// | `DATABASE_MAX_CONNECTIONS` | `5`                   |
///
/// Unset or empty variables fall back to their default.
///
/// `DATABASE_URL` must be a SQLite URL in the sqlx form: `sqlite://<path>`
/// (relative paths as `sqlite://./app.db`, absolute as `sqlite:///var/app.db`)
/// or `sqlite::memory:`. The SQLAlchemy relative form `sqlite:///./app.db`
/// is rejected, since sqlx would read it as the absolute path `/./app.db`.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AppConfig {
    #[garde(custom(sqlite_url))]
    pub database_url: String,
    #[garde(skip)]
    pub bind_addr: String,
    #[garde(range(min = 1))]
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl AppConfig {
    /// Load from the process environment, after loading a `.env` file if one
    /// exists. `.env` never overwrites variables that are already set.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build and validate a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            None => defaults.max_connections,
            Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
        };

        let config = Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections,
        };
        config.validate().map_err(|report| ConfigError::from_report(&report))?;
        Ok(config)
    }
}

fn env_key(field: &str) -> &'static str {
    match field {
        "database_url" => "DATABASE_URL",
        "max_connections" => "DATABASE_MAX_CONNECTIONS",
        _ => "UNKNOWN",
    }
}

fn sqlite_url(value: &str, _ctx: &()) -> garde::Result {
    if !value.starts_with("sqlite:") {
        return Err(garde::Error::new("only sqlite: URLs are supported"));
    }
    if value.starts_with("sqlite:///./") || value.starts_with("sqlite:///../") {
        let path = value.trim_start_matches("sqlite:///");
        return Err(garde::Error::new(format!(
            "relative paths use two slashes: sqlite://{path}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn validation_keys(err: ConfigError) -> Vec<&'static str> {
        match err {
            ConfigError::Validation(details) => details.into_iter().map(|d| d.key).collect(),
            other => panic!("expected a validation error, got {other}"),
        }
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_url, "sqlite://./test.db");
    }

    #[test]
    fn variables_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("DATABASE_MAX_CONNECTIONS", " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn unparsable_pool_size_is_invalid() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn zero_pool_size_fails_validation() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert_eq!(validation_keys(err), vec!["DATABASE_MAX_CONNECTIONS"]);
    }

    #[test]
    fn absolute_sqlite_paths_are_accepted() {
        let config = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "sqlite:///var/lib/app.db")]))
            .unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/app.db");
    }

    #[test]
    fn sqlalchemy_relative_form_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "sqlite:///./test.db")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("DATABASE_URL"), "{message}");
        assert!(message.contains("sqlite://./test.db"), "{message}");
    }

    #[test]
    fn non_sqlite_urls_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("DATABASE_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        let mut keys = validation_keys(err);
        keys.sort();
        assert_eq!(keys, vec!["DATABASE_MAX_CONNECTIONS", "DATABASE_URL"]);
    }
}
