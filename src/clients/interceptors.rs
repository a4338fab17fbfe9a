//! Request and response interceptors run around every physical request.
//!
//! The [`Connector`](crate::Connector) keeps an ordered list of
//! [`RequestInterceptor`]s and [`ResponseInterceptor`]s. For each physical
//! request of an exchange (the initial request and every redirect hop) it
//! runs the request interceptors in registration order right before sending,
//! and the response interceptors right after receiving, before deciding
//! whether to follow a redirect. The first error short-circuits the chain and
//! ends the exchange.
//!
//! State that spans the hops of one exchange lives in an [`Exchange`], which
//! is created fresh for every `apply` call.
//!
//! The built-in interceptors, registered by every connector:
//!
//! - [`AuthorizationInterceptor`]: signs each request with the body digest
//! - [`RedirectLoopInterceptor`]: fails when a URI is requested twice
//! - [`ResourceLocationInterceptor`]: updates the resource location on 201/301

use std::collections::HashSet;

use url::Url;

use crate::auth::Digest;
use crate::clients::errors::ConnectorError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::rest::Resource;

/// Per-exchange context shared by the interceptors of one `apply` call.
pub struct Exchange<'a> {
    resource: &'a mut dyn Resource,
    visited: HashSet<String>,
}

impl<'a> Exchange<'a> {
    /// Starts an exchange for the given resource with no visited URIs.
    pub fn new(resource: &'a mut dyn Resource) -> Self {
        Self {
            resource,
            visited: HashSet::new(),
        }
    }

    /// Returns the resource the exchange operates on.
    #[must_use]
    pub fn resource(&self) -> &(dyn Resource + 'a) {
        &*self.resource
    }

    /// Returns the resource the exchange operates on, mutably.
    pub fn resource_mut(&mut self) -> &mut (dyn Resource + 'a) {
        &mut *self.resource
    }

    /// Records a visited URI. Returns `false` if it was already visited.
    pub fn visit(&mut self, uri: &Url) -> bool {
        self.visited.insert(uri.as_str().to_string())
    }

    /// Returns the URIs requested so far.
    #[must_use]
    pub const fn visited(&self) -> &HashSet<String> {
        &self.visited
    }
}

impl std::fmt::Debug for Exchange<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exchange")
            .field("location", &self.resource.location())
            .field("visited", &self.visited)
            .finish()
    }
}

/// Hook run immediately before a physical request is sent.
pub trait RequestInterceptor: Send + Sync {
    /// Inspects or modifies the outgoing request.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the exchange before the request is sent.
    fn process(
        &self,
        request: &mut HttpRequest,
        exchange: &mut Exchange<'_>,
    ) -> Result<(), ConnectorError>;
}

/// Hook run immediately after a physical response is received.
pub trait ResponseInterceptor: Send + Sync {
    /// Inspects the response of `request`.
    ///
    /// # Errors
    ///
    /// Returning an error aborts the exchange.
    fn process(
        &self,
        request: &HttpRequest,
        response: &HttpResponse,
        exchange: &mut Exchange<'_>,
    ) -> Result<(), ConnectorError>;
}

/// Sets `Authorization: Klarna <digest>` from the body of each request.
///
/// Requests without a body are signed with the digest of the empty message,
/// so a POST turned into a GET by a 303 redirect is re-signed correctly.
#[derive(Clone, Debug)]
pub struct AuthorizationInterceptor {
    digest: Digest,
}

impl AuthorizationInterceptor {
    /// Creates the interceptor for the given digest.
    #[must_use]
    pub const fn new(digest: Digest) -> Self {
        Self { digest }
    }
}

impl RequestInterceptor for AuthorizationInterceptor {
    fn process(
        &self,
        request: &mut HttpRequest,
        _exchange: &mut Exchange<'_>,
    ) -> Result<(), ConnectorError> {
        let authorization = self.digest.authorization(request.body_bytes());
        request.set_header("Authorization", authorization);
        Ok(())
    }
}

/// Fails the exchange when a URI is about to be requested a second time.
#[derive(Clone, Copy, Debug, Default)]
pub struct RedirectLoopInterceptor;

impl RequestInterceptor for RedirectLoopInterceptor {
    fn process(
        &self,
        request: &mut HttpRequest,
        exchange: &mut Exchange<'_>,
    ) -> Result<(), ConnectorError> {
        if !exchange.visit(&request.uri) {
            return Err(ConnectorError::RedirectLoop {
                uri: request.uri.to_string(),
            });
        }
        Ok(())
    }
}

/// Updates the resource location from the `Location` header of 201 Created
/// and 301 Moved Permanently responses.
///
/// Relative locations are resolved against the request URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceLocationInterceptor;

impl ResponseInterceptor for ResourceLocationInterceptor {
    fn process(
        &self,
        request: &HttpRequest,
        response: &HttpResponse,
        exchange: &mut Exchange<'_>,
    ) -> Result<(), ConnectorError> {
        if response.code != 201 && response.code != 301 {
            return Ok(());
        }

        let Some(location) = response.location() else {
            return Ok(());
        };

        let uri = resolve_location(&request.uri, location)?;
        tracing::debug!("Updating resource location to {uri}");
        exchange.resource_mut().set_location(uri);
        Ok(())
    }
}

/// Resolves a `Location` header value against the URI that produced it.
pub(crate) fn resolve_location(base: &Url, location: &str) -> Result<Url, ConnectorError> {
    base.join(location.trim())
        .map_err(|e| ConnectorError::InvalidLocation {
            location: location.to_string(),
            reason: e.to_string(),
        })
}
