//! HTTP response types for the Klarna Checkout SDK.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport) and by
//! [`Connector::apply`](crate::Connector::apply).

use std::collections::HashMap;

/// An HTTP response from the Checkout API.
///
/// Header names are stored lowercased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use klarna_checkout::clients::HttpResponse;
///
/// let response = HttpResponse::new(201, "Created")
///     .with_header("Location", "https://checkout.klarna.com/checkout/orders/ABC");
///
/// assert!(response.is_success());
/// assert_eq!(
///     response.location(),
///     Some("https://checkout.klarna.com/checkout/orders/ABC")
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase of the status line.
    pub reason: String,
    /// Response headers keyed by lowercased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers and an empty body.
    #[must_use]
    pub fn new(code: u16, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    /// Appends a header value.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Sets the response body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the last `Location` header value, if present.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for 3xx status codes.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        self.code >= 300 && self.code <= 399
    }

    /// Returns `true` for status codes the Checkout API uses to report failure (400-599).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.code >= 400 && self.code <= 599
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_case_insensitive() {
        let response = HttpResponse::new(200, "OK").with_header("Content-Type", "application/json");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_location_uses_last_value() {
        let response = HttpResponse::new(301, "Moved Permanently")
            .with_header("Location", "http://first/")
            .with_header("location", "http://second/");

        assert_eq!(response.location(), Some("http://second/"));
        assert_eq!(response.header("location"), Some("http://first/"));
    }

    #[test]
    fn test_status_classes() {
        assert!(HttpResponse::new(204, "No Content").is_success());
        assert!(HttpResponse::new(303, "See Other").is_redirect());
        assert!(HttpResponse::new(404, "Not Found").is_error());
        assert!(HttpResponse::new(599, "").is_error());
        assert!(!HttpResponse::new(600, "").is_error());
        assert!(!HttpResponse::new(399, "").is_error());
    }
}
