//! Configuration loading from files and environment variables.

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, File};

use crate::error::{ServiceError, ServiceResult};

use super::AppConfig;

/// Load configuration from the optional config file and env vars
pub fn load_config() -> ServiceResult<AppConfig> {
    build(
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("DDRAGON")
                    .separator("__")
                    .try_parsing(true),
            ),
    )
}

fn build(builder: ConfigBuilder<DefaultState>) -> ServiceResult<AppConfig> {
    let config: AppConfig = builder
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })?;

    if config.data_dragon.timeout_secs == 0 {
        return Err(ServiceError::Config {
            message: "data_dragon.timeout_secs must be greater than zero".to_string(),
        });
    }

    Ok(config)
}
