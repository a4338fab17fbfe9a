//! Configuration types for the Klarna Checkout SDK.
//!
//! This module provides the configuration used to construct a
//! [`Connector`](crate::Connector).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ConnectorConfig`]: The configuration struct holding all connector settings
//! - [`ConnectorConfigBuilder`]: A builder for constructing [`ConnectorConfig`] instances
//! - [`SharedSecret`]: A validated shared secret with masked debug output
//! - [`BaseUri`]: A validated base URI of the Checkout API
//!
//! # Example
//!
//! ```rust
//! use klarna_checkout::{BaseUri, ConnectorConfig, SharedSecret};
//!
//! let config = ConnectorConfig::builder()
//!     .shared_secret(SharedSecret::new("my-secret").unwrap())
//!     .base_uri(BaseUri::test())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUri, SharedSecret};

use std::time::Duration;

use crate::error::ConfigError;

/// Default number of redirect hops followed within one exchange.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for a [`Connector`](crate::Connector).
///
/// # Thread Safety
///
/// `ConnectorConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use klarna_checkout::{BaseUri, ConnectorConfig, SharedSecret};
///
/// let config = ConnectorConfig::builder()
///     .shared_secret(SharedSecret::new("my-secret").unwrap())
///     .base_uri(BaseUri::live())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
/// ```
#[derive(Clone, Debug)]
pub struct ConnectorConfig {
    shared_secret: SharedSecret,
    base_uri: BaseUri,
    timeout: Option<Duration>,
    max_redirects: usize,
    user_agent_prefix: Option<String>,
}

impl ConnectorConfig {
    /// Creates a new builder for constructing a `ConnectorConfig`.
    #[must_use]
    pub fn builder() -> ConnectorConfigBuilder {
        ConnectorConfigBuilder::new()
    }

    /// Returns the shared secret.
    #[must_use]
    pub const fn shared_secret(&self) -> &SharedSecret {
        &self.shared_secret
    }

    /// Returns the base URI.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the maximum number of redirect hops per exchange.
    #[must_use]
    pub const fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ConnectorConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConnectorConfig>();
};

/// Builder for constructing [`ConnectorConfig`] instances.
///
/// Required fields are `shared_secret` and `base_uri`.
///
/// # Defaults
///
/// - `timeout`: `None` (no transport timeout)
/// - `max_redirects`: [`DEFAULT_MAX_REDIRECTS`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConnectorConfigBuilder {
    shared_secret: Option<SharedSecret>,
    base_uri: Option<BaseUri>,
    timeout: Option<Duration>,
    max_redirects: Option<usize>,
    user_agent_prefix: Option<String>,
}

impl ConnectorConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared secret used to sign requests (required).
    #[must_use]
    pub fn shared_secret(mut self, secret: SharedSecret) -> Self {
        self.shared_secret = Some(secret);
        self
    }

    /// Sets the base URI of the Checkout API (required).
    #[must_use]
    pub fn base_uri(mut self, uri: BaseUri) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the timeout applied by the transport to each physical request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of redirect hops followed in one exchange.
    #[must_use]
    pub const fn max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = Some(max);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ConnectorConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shared_secret` or
    /// `base_uri` are not set.
    pub fn build(self) -> Result<ConnectorConfig, ConfigError> {
        let shared_secret = self.shared_secret.ok_or(ConfigError::MissingRequiredField {
            field: "shared_secret",
        })?;
        let base_uri = self
            .base_uri
            .ok_or(ConfigError::MissingRequiredField { field: "base_uri" })?;

        Ok(ConnectorConfig {
            shared_secret,
            base_uri,
            timeout: self.timeout,
            max_redirects: self.max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_shared_secret() {
        let result = ConnectorConfigBuilder::new().base_uri(BaseUri::test()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "shared_secret"
            })
        ));
    }

    #[test]
    fn test_builder_requires_base_uri() {
        let result = ConnectorConfigBuilder::new()
            .shared_secret(SharedSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_uri" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ConnectorConfig::builder()
            .shared_secret(SharedSecret::new("secret").unwrap())
            .base_uri(BaseUri::test())
            .build()
            .unwrap();

        assert_eq!(config.base_uri(), &BaseUri::test());
        assert_eq!(config.max_redirects(), DEFAULT_MAX_REDIRECTS);
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = ConnectorConfig::builder()
            .shared_secret(SharedSecret::new("secret").unwrap())
            .base_uri(BaseUri::live())
            .timeout(Duration::from_secs(5))
            .max_redirects(3)
            .user_agent_prefix("MyShop/2.1")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.max_redirects(), 3);
        assert_eq!(config.user_agent_prefix(), Some("MyShop/2.1"));
        assert_eq!(config.shared_secret().as_ref(), "secret");
    }

    #[test]
    fn test_config_debug_does_not_leak_secret() {
        let config = ConnectorConfig::builder()
            .shared_secret(SharedSecret::new("very-secret").unwrap())
            .base_uri(BaseUri::test())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("ConnectorConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
