//! Pluggable HTTP transport.
//!
//! The [`Connector`](crate::Connector) never talks to the network itself. It
//! hands each physical request to a [`Transport`], which only has to send a
//! request and return the status, headers and body. Redirects are followed by
//! the connector, so a transport must not follow them on its own.
//!
//! [`ReqwestTransport`] is the default implementation. Tests and custom
//! integrations can supply any other implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ConnectorConfig;

/// Sends one physical HTTP request.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use klarna_checkout::clients::{HttpRequest, HttpResponse, Transport, TransportError};
///
/// struct AlwaysNotFound;
///
/// #[async_trait]
/// impl Transport for AlwaysNotFound {
///     async fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(404, "Not Found"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response without following redirects.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// Automatic redirects are disabled so the connector can run its
/// interceptors on every hop.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport configured from the connector configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying client cannot be
    /// built (e.g., TLS initialization failure).
    pub fn new(config: &ConnectorConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an existing `reqwest` client.
    ///
    /// The client should be built with `redirect::Policy::none()`; otherwise
    /// redirect hops bypass the connector's interceptors.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_headers(request: &HttpRequest) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::with_capacity(request.headers.len());
        for (name, value) in &request.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| TransportError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Returns the reason phrase sent by the server, or the canonical one.
    ///
    /// hyper only records the phrase when it differs from the canonical
    /// reason of the status code.
    fn reason_phrase(res: &reqwest::Response) -> String {
        res.extensions()
            .get::<ReasonPhrase>()
            .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
            .or_else(|| res.status().canonical_reason().map(ToString::to_string))
            .unwrap_or_default()
    }

    /// Parses response headers into a `HashMap` keyed by lowercased name.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(request.uri.clone()),
            HttpMethod::Post => self.client.post(request.uri.clone()),
        };

        req_builder = req_builder.headers(Self::build_headers(request)?);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let reason = Self::reason_phrase(&res);
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        Ok(HttpResponse {
            code,
            reason,
            headers,
            body,
        })
    }
}
