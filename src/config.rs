//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: `BLOG_API_`, `__` as the section
//!    separator, e.g. `BLOG_API_MICROCMS__API_KEY`)
//! 2. Current working directory: ./config.toml
//! 3. Default values
//!
//! The CMS credentials and the inbound shared API key have no defaults;
//! the process refuses to start when any of them is missing.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Primary content source (headless CMS) configuration
    #[serde(default)]
    pub microcms: MicroCmsConfig,

    /// Secondary content source configuration
    #[serde(default)]
    pub zenn: ZennConfig,

    /// Inbound authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Primary content source configuration
///
/// The service id and API key identify the CMS tenant; both are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroCmsConfig {
    /// CMS API key (required)
    #[serde(default)]
    pub api_key: String,

    /// CMS service identifier (required)
    #[serde(default)]
    pub service_id: String,

    /// Base URL override, mainly for tests. When unset, the URL is derived
    /// from the service id.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Secondary content source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZennConfig {
    /// API base URL
    #[serde(default = "default_zenn_base_url")]
    pub base_url: String,

    /// Author whose articles are listed
    #[serde(default = "default_zenn_username")]
    pub username: String,
}

/// Inbound authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret every non-health request must present in `X-API-Key`
    /// (required)
    #[serde(default)]
    pub api_key: String,
}

fn default_service_name() -> String {
    "blog-api".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_zenn_base_url() -> String {
    "https://zenn.dev/api".to_string()
}

fn default_zenn_username() -> String {
    "kozennoki".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            port: default_port(),
            log_level: default_log_level(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ZennConfig {
    fn default() -> Self {
        Self {
            base_url: default_zenn_base_url(),
            username: default_zenn_username(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            microcms: MicroCmsConfig::default(),
            zenn: ZennConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, `./config.toml`, and environment
    /// variables, then validate the required secrets.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    ///
    /// Useful for testing or non-standard deployments.
    pub fn load_from(path: &str) -> Result<Self> {
        let config: Self = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()))
            // Load from config file (if exists)
            .merge(Toml::file(path))
            // Override with environment variables
            .merge(Env::prefixed("BLOG_API_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.microcms.api_key.is_empty() {
            return Err(figment::Error::from("microcms.api_key is required".to_string()).into());
        }
        if self.microcms.service_id.is_empty() {
            return Err(figment::Error::from("microcms.service_id is required".to_string()).into());
        }
        if self.auth.api_key.is_empty() {
            return Err(figment::Error::from("auth.api_key is required".to_string()).into());
        }
        Ok(())
    }
}
