//! HTTP client types for Klarna Checkout API communication.
//!
//! This module provides the connector layer: the pipeline that turns a
//! resource operation into signed HTTP requests, follows redirects and
//! classifies the final response.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Connector`]: Executes exchanges for resources
//! - [`ConnectorOptions`]: Per-call URI and payload overrides
//! - [`Transport`]: Sends one physical request; [`ReqwestTransport`] by default
//! - [`RequestInterceptor`] / [`ResponseInterceptor`]: Hooks around each hop
//! - [`HttpRequest`] / [`HttpResponse`]: One physical request and response
//! - [`UserAgent`]: The `User-Agent` header value
//! - [`ConnectorError`]: Unified error type for exchanges
//!
//! # Example
//!
//! ```rust,ignore
//! use klarna_checkout::{Connector, ConnectorOptions, CheckoutResource};
//!
//! let mut resource = CheckoutResource::new("application/vnd.klarna.checkout.aggregated-order-v2+json");
//! let options = ConnectorOptions::new()
//!     .with_uri_str("https://checkout.testdrive.klarna.com/checkout/orders/ABC")?;
//!
//! let response = connector.apply("GET", &mut resource, Some(options)).await?;
//! println!("{} -> {:?}", response.code, resource.get("status"));
//! ```
//!
//! # Redirect Behavior
//!
//! Automatic redirects of the HTTP client are disabled. The connector follows
//! them itself so every hop is signed and checked:
//!
//! - **303 (See Other)**: Always followed, as a GET without a body
//! - **301, 302, 307, 308**: Followed only when the current request is a GET
//! - **Repeated URI**: Fails with [`ConnectorError::RedirectLoop`]
//! - **Too many hops**: Fails with [`ConnectorError::TooManyRedirects`]

mod connector;
mod errors;
mod handler;
mod http_request;
mod http_response;
mod interceptors;
mod options;
mod transport;
mod user_agent;

pub use connector::Connector;
pub use errors::{ConnectorError, ErrorResponse, InvalidArgumentError, TransportError};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
pub use interceptors::{
    AuthorizationInterceptor, Exchange, RedirectLoopInterceptor, RequestInterceptor,
    ResourceLocationInterceptor, ResponseInterceptor,
};
pub use options::ConnectorOptions;
pub use transport::{ReqwestTransport, Transport};
pub use user_agent::{UserAgent, SDK_VERSION};
