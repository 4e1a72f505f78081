//! Configuration for the Catalog API

use core_config::{mysql::MySqlConfig, server::ServerConfig, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub mysql: MySqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mysql = MySqlConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            mysql,
            server,
            environment,
        })
    }
}
