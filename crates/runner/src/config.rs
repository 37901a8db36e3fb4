//! Uploader configuration
//!
//! A JSON file (or the embedded default) selects the deployment, and
//! `FINNIZE_*` environment variables layer credentials on top.

use log::warn;
use serde::{Deserialize, Serialize};
use signalfeed_core::UtcOffset;
use signalfeed_gateway::{AuthConfig, Environment, PermissionClaims, PublisherConfig};
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_API_KEY: &str = "FINNIZE_API_KEY";
pub const ENV_API_SECRET: &str = "FINNIZE_API_SECRET";
pub const ENV_ENDPOINT: &str = "FINNIZE_ENDPOINT";
/// `True` switches to the internal permission header
pub const ENV_INTERNAL: &str = "FINNIZE_ENVIRONMENT";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploaderConfig {
    pub environment: Environment,
    /// Takes precedence over the environment's endpoint
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    /// Offset trade lists are exported in unless given per upload
    pub utc: UtcOffset,
    pub auth: AuthConfig,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            utc: UtcOffset::default(),
            auth: AuthConfig::None,
        }
    }
}

/// Load uploader configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<UploaderConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<UploaderConfig, ConfigError> {
    let config: UploaderConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<UploaderConfig, ConfigError> {
    let default_config = include_str!("uploader_config.json");
    load_config_from_str(default_config)
}

impl UploaderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timeout_secs",
                value: "0".to_string(),
                reason: "must be at least one second".to_string(),
            });
        }
        Ok(())
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or_else(|| self.environment.signal_endpoint())
    }

    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig::new(self.endpoint())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_auth(self.auth.clone())
    }

    /// Apply `FINNIZE_*` variables from the process environment
    pub fn with_process_env(self) -> Result<Self, ConfigError> {
        self.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `FINNIZE_*` variables read through `lookup`
    ///
    /// Empty values count as unset. Permission claims win over an API key
    /// when `FINNIZE_ENVIRONMENT` is true.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::MissingEnv(key));

        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.endpoint = Some(endpoint);
        }

        let internal = match get(ENV_INTERNAL) {
            Some(raw) => parse_flag(ENV_INTERNAL, &raw)?,
            None => false,
        };

        if internal {
            self.auth = AuthConfig::Permission(PermissionClaims {
                role_id: require("ROLE_ID")?,
                name: require("NAME")?,
                can_login_admin_site: require("CAN_LOGIN_ADMIN_SITE")?,
                can_create_strategy: require("CAN_CREATE_STRATEGY")?,
                user_id: require("USER_ID")?,
                broker_id: require("BROKER_ID")?,
            });
        } else if let Some(api_key) = get(ENV_API_KEY) {
            self.auth = AuthConfig::api_key(api_key, require(ENV_API_SECRET)?);
        }

        Ok(self)
    }

    /// Apply `--env` and `--endpoint` from the command line
    ///
    /// Endpoint precedence, highest first: `--endpoint`, `FINNIZE_ENDPOINT`,
    /// the config file's `endpoint`, then the environment. Call after the
    /// environment overlay.
    pub fn with_cli_overrides(
        mut self,
        environment: Option<Environment>,
        endpoint: Option<String>,
    ) -> Self {
        if let Some(environment) = environment {
            self.environment = environment;
            if let (None, Some(explicit)) = (&endpoint, &self.endpoint) {
                warn!(
                    "--env {} has no effect on the endpoint: {} is set explicitly",
                    environment, explicit
                );
            }
        }
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint);
        }
        self
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "True" | "true" | "1" => Ok(true),
        "False" | "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            value: other.to_string(),
            reason: "expected True or False".to_string(),
        }),
    }
}
