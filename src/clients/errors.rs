//! Error types for Checkout API exchanges.
//!
//! This module contains the error types returned by
//! [`Connector::apply`](crate::Connector::apply) and by the resource
//! operations built on top of it.
//!
//! # Error Handling
//!
//! - [`InvalidArgumentError`]: Caller misuse detected before any network I/O
//! - [`ErrorResponse`]: The API answered with a 4xx/5xx status
//! - [`TransportError`]: The transport failed to complete a physical request
//! - [`ConnectorError`]: Unified error type encompassing all of the above plus
//!   redirect failures and malformed success bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use klarna_checkout::{ConnectorError, Fetchable};
//!
//! match order.fetch(&connector).await {
//!     Ok(_) => println!("Status: {:?}", order.get("status")),
//!     Err(ConnectorError::Api(e)) => {
//!         println!("API error {}: {:?}", e.code, e.http_status_message());
//!     }
//!     Err(ConnectorError::RedirectLoop { uri }) => {
//!         println!("Redirect loop at {uri}");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned when a call is rejected before any request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidArgumentError {
    /// The HTTP method is not `GET` or `POST`.
    #[error("Unsupported HTTP Method. ({method})")]
    UnsupportedMethod {
        /// The method that was provided.
        method: String,
    },

    /// Neither the options nor the resource provide a target URI.
    #[error("No URI to send the request to. Set a resource location or an options URI.")]
    MissingLocation,

    /// A URI supplied by the caller could not be parsed.
    #[error("Invalid URI '{uri}': {reason}")]
    InvalidUri {
        /// The URI that was provided.
        uri: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Error returned when the API responds with a status in the 400-599 range.
///
/// The body is parsed as JSON when possible. Its schema is defined by the
/// server, so it is kept as an opaque [`Value`]; `json` is `None` when the
/// body was empty or not valid JSON.
///
/// # Example
///
/// ```rust
/// use klarna_checkout::clients::ErrorResponse;
/// use serde_json::json;
///
/// let error = ErrorResponse {
///     code: 402,
///     reason: "Payment Required".to_string(),
///     json: Some(json!({
///         "http_status_message": "Payment Required",
///         "internal_message": "Checkout not completed"
///     })),
/// };
///
/// assert_eq!(error.to_string(), "402 Payment Required");
/// assert_eq!(error.internal_message(), Some("Checkout not completed"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{code} {reason}")]
pub struct ErrorResponse {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase of the status line.
    pub reason: String,
    /// The parsed error body, if it was valid JSON.
    pub json: Option<Value>,
}

impl ErrorResponse {
    /// Returns a string field of the JSON body.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.json.as_ref()?.get(key)?.as_str()
    }

    /// Returns the `http_status_message` field of the body, if present.
    #[must_use]
    pub fn http_status_message(&self) -> Option<&str> {
        self.field("http_status_message")
    }

    /// Returns the `internal_message` field of the body, if present.
    #[must_use]
    pub fn internal_message(&self) -> Option<&str> {
        self.field("internal_message")
    }
}

/// Error returned by a [`Transport`](crate::clients::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, TLS or timeout error from the HTTP client.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request header could not be encoded.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// Any other transport failure, used by custom transports.
    #[error("Transport failure: {0}")]
    Other(String),
}

/// Unified error type for Checkout API exchanges.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The call was rejected before any request was sent.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),

    /// The same URI was requested twice within one exchange.
    #[error("Infinite redirect loop detected. ({uri})")]
    RedirectLoop {
        /// The URI that was about to be requested again.
        uri: String,
    },

    /// The redirect chain exceeded the configured maximum.
    #[error("Maximum redirects ({max}) exceeded.")]
    TooManyRedirects {
        /// The configured maximum number of hops.
        max: usize,
    },

    /// A `Location` header could not be parsed as a URI.
    #[error("Invalid Location header '{location}': {reason}")]
    InvalidLocation {
        /// The raw header value.
        location: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The API reported a failure (4xx/5xx).
    #[error(transparent)]
    Api(#[from] ErrorResponse),

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A 200 response carried a body that is not a JSON object.
    #[error("Malformed response body: {reason}")]
    MalformedResponse {
        /// Why the body was rejected.
        reason: String,
    },
}

impl ConnectorError {
    /// Returns `true` for I/O-class failures: transport errors, malformed
    /// response bodies and redirect failures.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::MalformedResponse { .. }
                | Self::RedirectLoop { .. }
                | Self::TooManyRedirects { .. }
                | Self::InvalidLocation { .. }
        )
    }

    /// Returns the API error details if the server reported a failure.
    #[must_use]
    pub const fn as_api_error(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsupported_method_message() {
        let error = InvalidArgumentError::UnsupportedMethod {
            method: "PATCH".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported HTTP Method. (PATCH)");
    }

    #[test]
    fn test_error_response_accessors() {
        let error = ErrorResponse {
            code: 404,
            reason: "Not Found".to_string(),
            json: Some(json!({"reason": "not_found", "http_status_message": "Not Found"})),
        };
        assert_eq!(error.field("reason"), Some("not_found"));
        assert_eq!(error.http_status_message(), Some("Not Found"));
        assert_eq!(error.internal_message(), None);
    }

    #[test]
    fn test_error_response_without_json() {
        let error = ErrorResponse {
            code: 503,
            reason: "Service Unavailable".to_string(),
            json: None,
        };
        assert_eq!(error.field("reason"), None);
        assert_eq!(error.to_string(), "503 Service Unavailable");
    }

    #[test]
    fn test_connector_error_io_classification() {
        assert!(ConnectorError::RedirectLoop {
            uri: "http://a/".to_string()
        }
        .is_io());
        assert!(ConnectorError::MalformedResponse {
            reason: "eof".to_string()
        }
        .is_io());
        assert!(ConnectorError::Transport(TransportError::Other("down".to_string())).is_io());
        assert!(!ConnectorError::InvalidArgument(InvalidArgumentError::MissingLocation).is_io());
        assert!(!ConnectorError::Api(ErrorResponse {
            code: 400,
            reason: "Bad Request".to_string(),
            json: None,
        })
        .is_io());
    }

    #[test]
    fn test_as_api_error() {
        let error = ConnectorError::from(ErrorResponse {
            code: 401,
            reason: "Unauthorized".to_string(),
            json: None,
        });
        assert_eq!(error.as_api_error().map(|e| e.code), Some(401));
        assert!(ConnectorError::from(InvalidArgumentError::MissingLocation)
            .as_api_error()
            .is_none());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &InvalidArgumentError::MissingLocation;
        let _: &dyn std::error::Error = &TransportError::Other("x".to_string());
        let _: &dyn std::error::Error = &ConnectorError::TooManyRedirects { max: 1 };
    }
}
