//! HTTP request types for the Klarna Checkout SDK.
//!
//! This module provides the [`HttpRequest`] type handed to a
//! [`Transport`](crate::clients::Transport) for one physical request, and the
//! [`HttpMethod`] enum of verbs the Checkout API accepts.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::clients::errors::InvalidArgumentError;

/// HTTP methods supported by the Checkout API.
///
/// Only `GET` and `POST` are used; parsing any other verb fails with
/// [`InvalidArgumentError::UnsupportedMethod`].
///
/// # Example
///
/// ```rust
/// use klarna_checkout::clients::HttpMethod;
///
/// assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
/// assert!("PATCH".parse::<HttpMethod>().is_err());
/// assert!("get".parse::<HttpMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for fetching resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            other => Err(InvalidArgumentError::UnsupportedMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// One physical HTTP request sent through a transport.
///
/// Header names are stored as given; lookups through [`HttpRequest::header`]
/// are case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute target URI.
    pub uri: Url,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// The serialized request body, if any.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, uri: Url) -> Self {
        Self {
            method,
            uri,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.headers.retain(|key, _| !key.eq_ignore_ascii_case(&name));
        self.headers.insert(name, value.into());
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body bytes, or an empty slice for requests without a body.
    #[must_use]
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().map_or(&[], str::as_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("https://checkout.testdrive.klarna.com/checkout/orders").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_http_method_parse_rejects_other_verbs() {
        for verb in ["PUT", "DELETE", "PATCH", "HEAD", "post", ""] {
            let result = verb.parse::<HttpMethod>();
            assert!(matches!(
                result,
                Err(InvalidArgumentError::UnsupportedMethod { method }) if method == verb
            ));
        }
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::new(HttpMethod::Get, uri());
        request.set_header("accept", "text/plain");
        request.set_header("Accept", "application/json");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("ACCEPT"), Some("application/json"));
    }

    #[test]
    fn test_body_bytes_defaults_to_empty() {
        let mut request = HttpRequest::new(HttpMethod::Post, uri());
        assert!(request.body_bytes().is_empty());

        request.body = Some("{}".to_string());
        assert_eq!(request.body_bytes(), b"{}");
    }
}
