use crate::{env_or_default, env_required, ConfigError, FromEnv};

/// MySQL connection configuration.
///
/// The host is given as `host:port` (e.g. `localhost:3306`); a missing port
/// falls back to 3306.
#[derive(Clone, Debug)]
pub struct MySqlConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl MySqlConfig {
    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn split_host_port(addr: &str) -> Result<(String, u16), ConfigError> {
        match addr.split_once(':') {
            Some((host, port)) => {
                let port = port.parse().map_err(|e| ConfigError::ParseError {
                    key: "MYSQL_DB_HOST".to_string(),
                    details: format!("invalid port '{}': {}", port, e),
                })?;
                Ok((host.to_string(), port))
            }
            None => Ok((addr.to_string(), 3306)),
        }
    }
}

impl FromEnv for MySqlConfig {
    /// Reads from environment variables:
    /// - MYSQL_DB_HOST: `host:port`, defaults to `localhost:3306`
    /// - MYSQL_DB_USER: required
    /// - MYSQL_DB_PASSWORD: required
    /// - MYSQL_DB_NAME: defaults to `catalog`
    fn from_env() -> Result<Self, ConfigError> {
        let addr = env_or_default("MYSQL_DB_HOST", "localhost:3306");
        let (host, port) = Self::split_host_port(&addr)?;

        Ok(Self {
            host,
            port,
            username: env_required("MYSQL_DB_USER")?,
            password: env_required("MYSQL_DB_PASSWORD")?,
            database: env_or_default("MYSQL_DB_NAME", "catalog"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_config_from_env_with_defaults() {
        temp_env::with_vars(
            [
                ("MYSQL_DB_HOST", None::<&str>),
                ("MYSQL_DB_USER", Some("catalog")),
                ("MYSQL_DB_PASSWORD", Some("secret")),
                ("MYSQL_DB_NAME", None),
            ],
            || {
                let config = MySqlConfig::from_env().unwrap();
                assert_eq!(config.host, "localhost");
                assert_eq!(config.port, 3306);
                assert_eq!(config.database, "catalog");
                assert_eq!(config.address(), "localhost:3306");
            },
        );
    }

    #[test]
    fn test_mysql_config_from_env_custom_host_port() {
        temp_env::with_vars(
            [
                ("MYSQL_DB_HOST", Some("db.internal:3307")),
                ("MYSQL_DB_USER", Some("catalog")),
                ("MYSQL_DB_PASSWORD", Some("secret")),
            ],
            || {
                let config = MySqlConfig::from_env().unwrap();
                assert_eq!(config.host, "db.internal");
                assert_eq!(config.port, 3307);
            },
        );
    }

    #[test]
    fn test_mysql_config_host_without_port() {
        temp_env::with_vars(
            [
                ("MYSQL_DB_HOST", Some("db.internal")),
                ("MYSQL_DB_USER", Some("catalog")),
                ("MYSQL_DB_PASSWORD", Some("secret")),
            ],
            || {
                let config = MySqlConfig::from_env().unwrap();
                assert_eq!(config.host, "db.internal");
                assert_eq!(config.port, 3306);
            },
        );
    }

    #[test]
    fn test_mysql_config_invalid_port() {
        temp_env::with_vars(
            [
                ("MYSQL_DB_HOST", Some("db.internal:not_a_port")),
                ("MYSQL_DB_USER", Some("catalog")),
                ("MYSQL_DB_PASSWORD", Some("secret")),
            ],
            || {
                let result = MySqlConfig::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("MYSQL_DB_HOST"));
            },
        );
    }

    #[test]
    fn test_mysql_config_missing_user() {
        temp_env::with_vars(
            [
                ("MYSQL_DB_USER", None::<&str>),
                ("MYSQL_DB_PASSWORD", Some("secret")),
            ],
            || {
                let result = MySqlConfig::from_env();
                assert!(result.is_err());
                assert!(result.unwrap_err().to_string().contains("MYSQL_DB_USER"));
            },
        );
    }
}
