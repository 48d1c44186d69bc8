//! Server configuration.
//!
//! Every setting has a default, so the server runs without a config file.
//! Values come from an optional `config.{toml,yaml,json}` in the working
//! directory, overridden by `DDRAGON__`-prefixed environment variables.

mod loader;

use serde::Deserialize;

pub use loader::load_config;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dragon: DataDragonConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Data Dragon feed configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataDragonConfig {
    /// Base URL of the Data Dragon CDN
    #[serde(default = "default_data_dragon_url")]
    pub base_url: String,

    /// Patch version the data paths are pinned to
    #[serde(default = "default_data_dragon_version")]
    pub version: String,

    /// Language/region of the data files
    #[serde(default = "default_data_dragon_locale")]
    pub locale: String,

    /// Request timeout in seconds
    #[serde(default = "default_data_dragon_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for DataDragonConfig {
    fn default() -> Self {
        Self {
            base_url: default_data_dragon_url(),
            version: default_data_dragon_version(),
            locale: default_data_dragon_locale(),
            timeout_secs: default_data_dragon_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// MCP server identity
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Name reported in `serverInfo` during initialize
    #[serde(default = "default_server_name")]
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
        }
    }
}

// ==================== Default Value Functions ====================

fn default_data_dragon_url() -> String {
    "https://ddragon.leagueoflegends.com".to_string()
}

fn default_data_dragon_version() -> String {
    "15.18.1".to_string()
}

fn default_data_dragon_locale() -> String {
    "en_US".to_string()
}

fn default_data_dragon_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "lol-app/1.0".to_string()
}

fn default_server_name() -> String {
    "league-of-legends".to_string()
}
