use std::env;
use thiserror::Error;

/// Default cap on the number of records returned by `GET /api/status`.
pub const DEFAULT_LIST_LIMIT: i64 = 1000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Mongo { uri: String, database: String },
    Memory,
}

/// Runtime settings, read from the process environment.
///
/// | Variable | Default |
/// |---|---|
/// | `MONGO_URL` | required when `STORE_BACKEND=mongo` |
/// | `DB_NAME` | required when `STORE_BACKEND=mongo` |
/// | `STORE_BACKEND` | `mongo` |
/// | `STATUS_LIST_LIMIT` | `1000` |
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `8001` |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub list_limit: i64,
    pub backend: StoreBackend,
}

impl Settings {
    /// Loads settings from the environment. Call `dotenv::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let backend = match lookup("STORE_BACKEND").as_deref().unwrap_or("mongo") {
            "mongo" => StoreBackend::Mongo {
                uri: require("MONGO_URL")?,
                database: require("DB_NAME")?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8001,
        };

        let list_limit = match lookup("STATUS_LIST_LIMIT") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "STATUS_LIST_LIMIT",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_LIST_LIMIT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            list_limit,
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_mongo_defaults() {
        let settings = settings(&[
            ("MONGO_URL", "mongodb://localhost:27017"),
            ("DB_NAME", "testdb"),
        ])
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                host: "0.0.0.0".to_string(),
                port: 8001,
                list_limit: DEFAULT_LIST_LIMIT,
                backend: StoreBackend::Mongo {
                    uri: "mongodb://localhost:27017".to_string(),
                    database: "testdb".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_mongo_requires_url_and_db_name() {
        assert_eq!(settings(&[]), Err(ConfigError::Missing("MONGO_URL")));
        assert_eq!(
            settings(&[("MONGO_URL", "mongodb://localhost:27017")]),
            Err(ConfigError::Missing("DB_NAME"))
        );
    }

    #[test]
    fn test_memory_backend_needs_no_database() {
        let settings = settings(&[("STORE_BACKEND", "memory"), ("PORT", "9000")]).unwrap();
        assert_eq!(settings.backend, StoreBackend::Memory);
        assert_eq!(settings.port, 9000);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(matches!(
            settings(&[("STORE_BACKEND", "redis")]),
            Err(ConfigError::Invalid { key: "STORE_BACKEND", .. })
        ));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(matches!(
            settings(&[("STORE_BACKEND", "memory"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        ));
    }

    #[test]
    fn test_list_limit_must_be_positive() {
        let ok = settings(&[("STORE_BACKEND", "memory"), ("STATUS_LIST_LIMIT", "25")]).unwrap();
        assert_eq!(ok.list_limit, 25);

        for bad in ["0", "-3", "many"] {
            assert!(matches!(
                settings(&[("STORE_BACKEND", "memory"), ("STATUS_LIST_LIMIT", bad)]),
                Err(ConfigError::Invalid { key: "STATUS_LIST_LIMIT", .. })
            ));
        }
    }
}
