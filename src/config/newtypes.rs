//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A validated Klarna shared secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SharedSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use klarna_checkout::SharedSecret;
///
/// let secret = SharedSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SharedSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Creates a new validated shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySharedSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySharedSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for SharedSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(*****)")
    }
}

/// A validated base URI of the Klarna Checkout API.
///
/// The URI must be absolute, use the `http` or `https` scheme and carry a
/// host. A trailing slash is removed so resource paths can be appended
/// directly.
///
/// # Serialization
///
/// `BaseUri` serializes to and deserializes from its string form:
///
/// ```rust
/// use klarna_checkout::BaseUri;
///
/// let uri = BaseUri::new("https://checkout.klarna.com/").unwrap();
/// let json = serde_json::to_string(&uri).unwrap();
/// assert_eq!(json, r#""https://checkout.klarna.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use klarna_checkout::BaseUri;
///
/// let uri = BaseUri::test();
/// assert_eq!(uri.as_ref(), "https://checkout.testdrive.klarna.com");
/// assert_eq!(
///     uri.join("/checkout/orders").unwrap().as_str(),
///     "https://checkout.testdrive.klarna.com/checkout/orders"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri(String);

impl BaseUri {
    /// Base URI of the live Checkout API.
    pub const LIVE: &'static str = "https://checkout.klarna.com";

    /// Base URI of the Checkout test drive environment.
    pub const TEST: &'static str = "https://checkout.testdrive.klarna.com";

    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the URI is not an absolute
    /// http(s) URL with a host, or if it carries a query or fragment.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let trimmed = uri.trim().trim_end_matches('/');

        let parsed =
            Url::parse(trimmed).map_err(|_| ConfigError::InvalidBaseUri { uri: uri.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().is_none()
            || parsed.query().is_some()
            || parsed.fragment().is_some()
        {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the base URI of the live Checkout API.
    #[must_use]
    pub fn live() -> Self {
        Self(Self::LIVE.to_string())
    }

    /// Returns the base URI of the Checkout test drive environment.
    #[must_use]
    pub fn test() -> Self {
        Self(Self::TEST.to_string())
    }

    /// Appends an absolute path (starting with `/`) to the base URI.
    ///
    /// # Errors
    ///
    /// Returns a [`url::ParseError`] if the combined string is not a valid URL.
    pub fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}{path}", self.0))
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for BaseUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
