use core_config::{app_info, env_optional, server::ServerConfig, AppInfo, ConfigError, FromEnv};
use std::path::PathBuf;

pub use core_config::Environment;

/// Explorer-specific settings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerSettings {
    /// External JSON schema document to serve instead of the built-in one
    pub schema_file: Option<PathBuf>,
}

impl FromEnv for ExplorerSettings {
    /// Reads the optional `EXPLORER_SCHEMA_FILE`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            schema_file: env_optional("EXPLORER_SCHEMA_FILE").map(PathBuf::from),
        })
    }
}

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub explorer: ExplorerSettings,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8585 by default
        let explorer = ExplorerSettings::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            explorer,
        })
    }
}
