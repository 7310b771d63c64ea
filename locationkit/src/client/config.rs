//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use super::error::LocationError;
use super::retry::RetryPolicy;
use crate::config::ConfigFile;

/// Default region when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("locationkit/", env!("CARGO_PKG_VERSION"));

/// Settings for a [`LocationClient`](super::LocationClient).
///
/// # Example
///
/// ```
/// use locationkit::client::{ClientConfig, RetryPolicy};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_region("eu-central-1")
///     .with_api_key("v1.public.abc")
///     .with_timeout(Duration::from_secs(10))
///     .with_retry_policy(RetryPolicy::None);
/// assert_eq!(config.region, "eu-central-1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub region: String,
    /// Overrides `https://geo.{region}.amazonaws.com`.
    pub endpoint: Option<String>,
    /// Sent as the `key` query member on operations that accept one.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub retry_policy: RetryPolicy,
    /// Prepend the operation's host prefix (`tracking.`, `cp.maps.`, ...)
    /// to the endpoint host.
    pub inject_host_prefix: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_policy: RetryPolicy::default(),
            inject_host_prefix: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_host_prefix_injection(mut self, enabled: bool) -> Self {
        self.inject_host_prefix = enabled;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds a client configuration from the on-disk settings.
    pub fn from_config_file(file: &ConfigFile) -> Self {
        let mut config = Self::default()
            .with_region(file.client.region.clone())
            .with_timeout(Duration::from_secs(file.client.timeout_secs))
            .with_retry_policy(RetryPolicy::default().with_max_attempts(file.retry.max_attempts));
        config.endpoint = file.client.endpoint.clone();
        config.api_key = file.client.api_key.clone();
        config
    }

    /// Base URL for an operation, host prefix applied.
    pub fn base_url(&self, host_prefix: &str) -> Result<Url, LocationError> {
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://geo.{}.amazonaws.com", self.region),
        };

        let mut url = Url::parse(&endpoint)
            .map_err(|e| LocationError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        if self.inject_host_prefix && !host_prefix.is_empty() {
            let host = url
                .host_str()
                .ok_or_else(|| LocationError::InvalidEndpoint(format!("{}: no host", endpoint)))?
                .to_string();
            url.set_host(Some(&format!("{}{}", host_prefix, host)))
                .map_err(|e| LocationError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_with_prefix() {
        let config = ClientConfig::default().with_region("ap-southeast-2");
        let url = config.base_url("cp.maps.").unwrap();
        assert_eq!(url.as_str(), "https://cp.maps.geo.ap-southeast-2.amazonaws.com/");
    }

    #[test]
    fn test_custom_endpoint_without_injection() {
        let config = ClientConfig::default()
            .with_endpoint("http://localhost:4566")
            .with_host_prefix_injection(false);
        let url = config.base_url("tracking.").unwrap();
        assert_eq!(url.as_str(), "http://localhost:4566/");
    }

    #[test]
    fn test_custom_endpoint_with_injection() {
        let config = ClientConfig::default().with_endpoint("https://geo.example.test");
        let url = config.base_url("places.").unwrap();
        assert_eq!(url.host_str(), Some("places.geo.example.test"));
    }

    #[test]
    fn test_default_user_agent_carries_crate_version() {
        let config = ClientConfig::default();
        assert_eq!(
            config.user_agent,
            format!("locationkit/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = ClientConfig::default().with_endpoint("not a url");
        assert!(matches!(
            config.base_url("maps."),
            Err(LocationError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_from_config_file() {
        let mut file = ConfigFile::default();
        file.client.region = "eu-west-1".to_string();
        file.client.api_key = Some("k".to_string());
        file.client.timeout_secs = 5;
        file.retry.max_attempts = 5;

        let config = ClientConfig::from_config_file(&file);
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.endpoint, None);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry_policy.max_attempts(), 5);
    }
}
