//! Endpoint and authorization configuration for the publisher

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::GatewayError;

/// Header carrying the internal permission claims
pub const PERMISSION_HEADER: &str = "x-permission";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Deployment of the strategy-signal service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Uat,
    #[default]
    Prd,
}

impl Environment {
    /// Strategy-signal endpoint of this deployment
    pub fn signal_endpoint(&self) -> &'static str {
        match self {
            Environment::Dev => "https://dev-client-gateway.finnize.com/api/v1/strategy-signal/",
            Environment::Uat => "https://uat-client-gateway.finnize.com/api/v1/strategy-signal/",
            Environment::Prd => "https://client-gateway.finnize.com/api/v1/strategy-signal/",
        }
    }
}

impl FromStr for Environment {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "uat" => Ok(Environment::Uat),
            "prd" | "prod" => Ok(Environment::Prd),
            _ => Err(GatewayError::UnknownVariant {
                kind: "environment",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Dev => "dev",
            Environment::Uat => "uat",
            Environment::Prd => "prd",
        };
        f.write_str(name)
    }
}

/// Claims sent in the permission header by internal deployments
///
/// Values are forwarded exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionClaims {
    pub role_id: String,
    pub name: String,
    pub can_login_admin_site: String,
    pub can_create_strategy: String,
    pub user_id: String,
    pub broker_id: String,
}

/// How requests to the endpoint are authorized
///
/// Only guru accounts may upload or delete backtest signals.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthConfig {
    /// No authorization header
    #[default]
    None,
    /// `Authorization: Bearer <key>.<secret>`
    ApiKey { api_key: String, api_secret: String },
    /// `X-Permission: <claims as JSON>`
    Permission(PermissionClaims),
}

impl AuthConfig {
    pub fn api_key(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        AuthConfig::ApiKey {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Headers to attach to every request
    pub fn headers(&self) -> Result<HeaderMap, GatewayError> {
        let mut headers = HeaderMap::new();
        match self {
            AuthConfig::None => {}
            AuthConfig::ApiKey {
                api_key,
                api_secret,
            } => {
                let mut value = header_value(&format!("Bearer {}.{}", api_key, api_secret))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            AuthConfig::Permission(claims) => {
                let value = header_value(&serde_json::to_string(claims)?)?;
                headers.insert(HeaderName::from_static(PERMISSION_HEADER), value);
            }
        }
        Ok(headers)
    }

    pub fn mode(&self) -> &'static str {
        match self {
            AuthConfig::None => "none",
            AuthConfig::ApiKey { .. } => "api_key",
            AuthConfig::Permission(_) => "permission",
        }
    }
}

fn header_value(raw: &str) -> Result<HeaderValue, GatewayError> {
    HeaderValue::from_str(raw).map_err(|e| GatewayError::InvalidHeader(e.to_string()))
}

// Secrets stay out of logs
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::ApiKey { api_key, .. } => f
                .debug_struct("ApiKey")
                .field("api_key", api_key)
                .field("api_secret", &"***")
                .finish(),
            AuthConfig::Permission(claims) => f.debug_tuple("Permission").field(claims).finish(),
        }
    }
}

/// Everything the HTTP publisher needs
#[derive(Debug, Clone, PartialEq)]
pub struct PublisherConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub auth: AuthConfig,
}

impl PublisherConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
            auth: AuthConfig::None,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.signal_endpoint())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.auth = auth;
        self
    }

    /// Parse the endpoint, rejecting anything that is not http(s)
    pub fn endpoint_url(&self) -> Result<Url, GatewayError> {
        let invalid = |reason: String| GatewayError::InvalidEndpoint {
            url: self.endpoint.clone(),
            reason,
        };
        let url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}
