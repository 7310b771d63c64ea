//! Addressable configuration keys (`section.key`).

use std::str::FromStr;

use reqwest::Url;

use super::{ConfigError, ConfigFile};

/// Every setting that can be read or written by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ClientRegion,
    ClientEndpoint,
    ClientApiKey,
    ClientTimeoutSecs,
    RetryMaxAttempts,
}

const ALL_KEYS: [ConfigKey; 5] = [
    ConfigKey::ClientRegion,
    ConfigKey::ClientEndpoint,
    ConfigKey::ClientApiKey,
    ConfigKey::ClientTimeoutSecs,
    ConfigKey::RetryMaxAttempts,
];

impl ConfigKey {
    /// All keys in file order.
    pub fn all() -> &'static [ConfigKey] {
        &ALL_KEYS
    }

    /// Full name, e.g. `client.region`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClientRegion => "client.region",
            Self::ClientEndpoint => "client.endpoint",
            Self::ClientApiKey => "client.api_key",
            Self::ClientTimeoutSecs => "client.timeout_secs",
            Self::RetryMaxAttempts => "retry.max_attempts",
        }
    }

    pub fn section(&self) -> &'static str {
        self.split().0
    }

    pub fn key_name(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        let name = self.name();
        name.split_once('.').unwrap_or(("", name))
    }

    /// Current value as text; empty when not set.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            Self::ClientRegion => config.client.region.clone(),
            Self::ClientEndpoint => config.client.endpoint.clone().unwrap_or_default(),
            Self::ClientApiKey => config.client.api_key.clone().unwrap_or_default(),
            Self::ClientTimeoutSecs => config.client.timeout_secs.to_string(),
            Self::RetryMaxAttempts => config.retry.max_attempts.to_string(),
        }
    }

    /// Parses and stores a value. An empty value clears optional settings.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: self.name().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            Self::ClientRegion => {
                if value.is_empty() {
                    return Err(invalid("region must not be empty"));
                }
                config.client.region = value.to_string();
            }
            Self::ClientEndpoint => {
                if value.is_empty() {
                    config.client.endpoint = None;
                } else {
                    Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
                    config.client.endpoint = Some(value.to_string());
                }
            }
            Self::ClientApiKey => {
                config.client.api_key = (!value.is_empty()).then(|| value.to_string());
            }
            Self::ClientTimeoutSecs => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| invalid("expected a whole number of seconds"))?;
                if secs == 0 {
                    return Err(invalid("timeout must be at least 1 second"));
                }
                config.client.timeout_secs = secs;
            }
            Self::RetryMaxAttempts => {
                let attempts: u32 = value
                    .parse()
                    .map_err(|_| invalid("expected a whole number"))?;
                if attempts == 0 {
                    return Err(invalid("at least one attempt is required"));
                }
                config.retry.max_attempts = attempts;
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
