//! The connector that executes signed Checkout API exchanges.
//!
//! This module provides the [`Connector`] type. One call to
//! [`Connector::apply`] is one logical exchange: the initial request plus any
//! redirect hops, each signed and checked by the interceptor chain, and the
//! final response classified against the resource.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::auth::Digest;
use crate::clients::errors::{ConnectorError, InvalidArgumentError};
use crate::clients::handler;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::interceptors::{
    resolve_location, AuthorizationInterceptor, Exchange, RedirectLoopInterceptor,
    RequestInterceptor, ResourceLocationInterceptor, ResponseInterceptor,
};
use crate::clients::options::ConnectorOptions;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::clients::user_agent::UserAgent;
use crate::config::{BaseUri, ConnectorConfig};
use crate::rest::Resource;

/// Executes signed exchanges against the Checkout API.
///
/// The connector handles:
/// - Request construction from the resource and per-call options
/// - `Authorization: Klarna <digest>` on every physical request
/// - Redirect following with loop detection and a hop limit
/// - Resource location updates from 201/301 responses
/// - Response classification and resource parsing
///
/// # Thread Safety
///
/// `Connector` is `Send + Sync` and holds no per-exchange state, so one
/// instance can serve concurrent exchanges on distinct resources.
///
/// # Example
///
/// ```rust,ignore
/// use klarna_checkout::{BaseUri, Connector, ConnectorConfig, Fetchable, Order, SharedSecret};
///
/// let config = ConnectorConfig::builder()
///     .shared_secret(SharedSecret::new("shared-secret").unwrap())
///     .base_uri(BaseUri::test())
///     .build()
///     .unwrap();
/// let connector = Connector::new(config)?;
///
/// let mut order = Order::at(order_uri);
/// order.fetch(&connector).await?;
/// ```
pub struct Connector {
    transport: Arc<dyn Transport>,
    base_uri: BaseUri,
    user_agent: UserAgent,
    max_redirects: usize,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

// Verify Connector is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connector>();
};

impl Connector {
    /// Creates a connector backed by a [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Transport`] if the HTTP client cannot be
    /// built (e.g., TLS initialization failure).
    pub fn new(config: ConnectorConfig) -> Result<Self, ConnectorError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a connector that sends requests through `transport`.
    ///
    /// The built-in interceptors are registered in this order: request
    /// signing, then redirect loop detection; the resource location update
    /// runs first among response interceptors.
    #[must_use]
    pub fn with_transport(config: ConnectorConfig, transport: Arc<dyn Transport>) -> Self {
        let digest = Digest::new(config.shared_secret().clone());

        let mut user_agent = UserAgent::new();
        if let Some(prefix) = config.user_agent_prefix() {
            user_agent = user_agent.with_prefix(prefix);
        }

        Self {
            transport,
            base_uri: config.base_uri().clone(),
            user_agent,
            max_redirects: config.max_redirects(),
            request_interceptors: vec![
                Arc::new(AuthorizationInterceptor::new(digest)),
                Arc::new(RedirectLoopInterceptor),
            ],
            response_interceptors: vec![Arc::new(ResourceLocationInterceptor)],
        }
    }

    /// Appends a request interceptor after the built-in ones.
    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Appends a response interceptor after the built-in ones.
    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Replaces the user agent sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Returns the base URI the resources are created under.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the user agent sent with every request.
    #[must_use]
    pub const fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    /// Returns the maximum number of redirect hops per exchange.
    #[must_use]
    pub const fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Runs one exchange for `resource`.
    ///
    /// `method` must be exactly `"GET"` or `"POST"`. The target is the options
    /// URI when given, otherwise the resource location. A POST sends the
    /// options data when given, otherwise the resource's marshaled data.
    ///
    /// Redirects are followed here: 303 always, as a GET without a body;
    /// 301/302/307/308 only when the current request is a GET. The final
    /// response is classified:
    ///
    /// - 200: the body is parsed into the resource
    /// - 400..=599: [`ConnectorError::Api`]
    /// - anything else: returned as-is
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] if:
    /// - The method is unsupported or no target URI is known (`InvalidArgument`),
    ///   before any request is sent
    /// - A URI would be requested twice (`RedirectLoop`)
    /// - The redirect chain exceeds the hop limit (`TooManyRedirects`)
    /// - A `Location` header cannot be resolved (`InvalidLocation`)
    /// - The transport fails (`Transport`)
    /// - The API answers 400..=599 (`Api`)
    /// - A 200 body is not a JSON object (`MalformedResponse`)
    pub async fn apply(
        &self,
        method: &str,
        resource: &mut dyn Resource,
        options: Option<ConnectorOptions>,
    ) -> Result<HttpResponse, ConnectorError> {
        let method: HttpMethod = method.parse()?;
        let (uri, data) = options
            .map(ConnectorOptions::into_parts)
            .unwrap_or_default();

        let uri = uri
            .or_else(|| resource.location().cloned())
            .ok_or(InvalidArgumentError::MissingLocation)?;

        let mut request = HttpRequest::new(method, uri);
        request.set_header("Accept", resource.accept());
        request.set_header("User-Agent", self.user_agent.to_string());

        if method == HttpMethod::Post {
            let payload = data.unwrap_or_else(|| resource.marshal());
            request.set_header("Content-Type", resource.content_type());
            request.body = Some(Value::Object(payload).to_string());
        }

        let mut exchange = Exchange::new(resource);
        let mut hops = 0;

        loop {
            for interceptor in &self.request_interceptors {
                interceptor.process(&mut request, &mut exchange)?;
            }

            tracing::debug!("Sending {} {}", request.method, request.uri);
            let response = self.transport.send(&request).await?;
            tracing::debug!(
                "Received {} {} from {}",
                response.code,
                response.reason,
                request.uri
            );

            for interceptor in &self.response_interceptors {
                interceptor.process(&request, &response, &mut exchange)?;
            }

            match Self::redirect_request(&request, &response)? {
                Some(next) => {
                    hops += 1;
                    if hops > self.max_redirects {
                        return Err(ConnectorError::TooManyRedirects {
                            max: self.max_redirects,
                        });
                    }
                    tracing::debug!(
                        "Following {} redirect to {} (hop {hops})",
                        response.code,
                        next.uri
                    );
                    request = next;
                }
                None => return handler::handle(response, exchange.resource_mut()),
            }
        }
    }

    /// Builds the next hop for a redirect response, or `None` when the
    /// response is final.
    fn redirect_request(
        request: &HttpRequest,
        response: &HttpResponse,
    ) -> Result<Option<HttpRequest>, ConnectorError> {
        let method = match response.code {
            303 => HttpMethod::Get,
            301 | 302 | 307 | 308 if request.method == HttpMethod::Get => HttpMethod::Get,
            _ => return Ok(None),
        };

        let Some(location) = response.location() else {
            return Ok(None);
        };

        let mut next = HttpRequest::new(method, resolve_location(&request.uri, location)?);
        for (name, value) in &request.headers {
            if name.eq_ignore_ascii_case("Content-Type")
                || name.eq_ignore_ascii_case("Authorization")
            {
                continue;
            }
            next.set_header(name.clone(), value.clone());
        }
        Ok(Some(next))
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connector")
            .field("base_uri", &self.base_uri)
            .field("user_agent", &self.user_agent.to_string())
            .field("max_redirects", &self.max_redirects)
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn request(method: HttpMethod, uri: &str) -> HttpRequest {
        let mut request = HttpRequest::new(method, Url::parse(uri).unwrap());
        request.set_header("Accept", "application/json");
        request.set_header("Content-Type", "application/json");
        request.set_header("Authorization", "Klarna abc");
        request.body = Some("{}".to_string());
        request
    }

    fn redirect(code: u16, location: &str) -> HttpResponse {
        HttpResponse::new(code, "").with_header("Location", location)
    }

    #[test]
    fn test_see_other_turns_post_into_bodiless_get() {
        let req = request(HttpMethod::Post, "http://klarna.com/orders");
        let next = Connector::redirect_request(&req, &redirect(303, "/orders/1"))
            .unwrap()
            .unwrap();

        assert_eq!(next.method, HttpMethod::Get);
        assert_eq!(next.uri.as_str(), "http://klarna.com/orders/1");
        assert!(next.body.is_none());
        assert_eq!(next.header("Accept"), Some("application/json"));
        assert!(next.header("Content-Type").is_none());
        assert!(next.header("Authorization").is_none());
    }

    #[test]
    fn test_post_is_not_redirected_by_other_codes() {
        let req = request(HttpMethod::Post, "http://klarna.com/orders");
        for code in [301, 302, 307, 308] {
            let next = Connector::redirect_request(&req, &redirect(code, "http://new/")).unwrap();
            assert!(next.is_none(), "POST must not follow {code}");
        }
    }

    #[test]
    fn test_get_follows_redirect_codes() {
        let req = request(HttpMethod::Get, "http://klarna.com/orders/1");
        for code in [301, 302, 303, 307, 308] {
            let next = Connector::redirect_request(&req, &redirect(code, "http://new/"))
                .unwrap()
                .unwrap();
            assert_eq!(next.uri.as_str(), "http://new/");
        }
    }

    #[test]
    fn test_redirect_without_location_is_final() {
        let req = request(HttpMethod::Get, "http://klarna.com/orders/1");
        let response = HttpResponse::new(302, "Found");
        assert!(Connector::redirect_request(&req, &response)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_non_redirect_status_is_final() {
        let req = request(HttpMethod::Get, "http://klarna.com/orders/1");
        for code in [200, 201, 304, 404] {
            let response = redirect(code, "http://new/");
            assert!(Connector::redirect_request(&req, &response)
                .unwrap()
                .is_none());
        }
    }
}
