//! Per-call overrides for a connector exchange.

use serde_json::{Map, Value};
use url::Url;

use crate::clients::errors::InvalidArgumentError;

/// Options for a single [`Connector::apply`](crate::Connector::apply) call.
///
/// - `uri` overrides the resource location as the request target.
/// - `data` overrides the resource's marshaled data as the POST body.
///
/// Options are consumed by `apply` and never reused.
///
/// # Example
///
/// ```rust
/// use klarna_checkout::ConnectorOptions;
/// use serde_json::json;
///
/// let options = ConnectorOptions::new()
///     .with_uri_str("https://checkout.testdrive.klarna.com/checkout/orders")
///     .unwrap()
///     .with_data(json!({"purchase_country": "SE"}).as_object().unwrap().clone());
///
/// assert!(options.uri().is_some());
/// assert!(options.data().is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorOptions {
    uri: Option<Url>,
    data: Option<Map<String, Value>>,
}

impl ConnectorOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target URI.
    #[must_use]
    pub fn with_uri(mut self, uri: Url) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Parses and sets the target URI.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::InvalidUri`] if `uri` is not a valid
    /// absolute URL.
    pub fn with_uri_str(self, uri: &str) -> Result<Self, InvalidArgumentError> {
        let parsed = Url::parse(uri).map_err(|e| InvalidArgumentError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.with_uri(parsed))
    }

    /// Sets the payload sent instead of the resource's own data.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns the target URI override.
    #[must_use]
    pub const fn uri(&self) -> Option<&Url> {
        self.uri.as_ref()
    }

    /// Returns the payload override.
    #[must_use]
    pub const fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Option<Url>, Option<Map<String, Value>>) {
        (self.uri, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_are_empty() {
        let options = ConnectorOptions::new();
        assert!(options.uri().is_none());
        assert!(options.data().is_none());
    }

    #[test]
    fn test_with_uri_str_rejects_relative_uri() {
        let result = ConnectorOptions::new().with_uri_str("/checkout/orders");
        assert!(matches!(
            result,
            Err(InvalidArgumentError::InvalidUri { uri, .. }) if uri == "/checkout/orders"
        ));
    }

    #[test]
    fn test_into_parts_returns_overrides() {
        let data = json!({"foo": "boo"}).as_object().unwrap().clone();
        let options = ConnectorOptions::new()
            .with_uri_str("http://klarna.com/x")
            .unwrap()
            .with_data(data.clone());

        let (uri, payload) = options.into_parts();
        assert_eq!(uri.unwrap().as_str(), "http://klarna.com/x");
        assert_eq!(payload, Some(data));
    }
}
