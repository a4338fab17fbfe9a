//! Resource capability traits and the generic Checkout resource.
//!
//! The [`Connector`] only needs a small capability set from a resource: where
//! it lives, which media types it speaks, and how to turn its data into a
//! payload and back. That set is the [`Resource`] trait.
//!
//! [`CheckoutResource`] is the single concrete implementation. The typed
//! resources ([`Order`](crate::rest::resources::Order) and friends) wrap it
//! and add the operations they support through [`Creatable`], [`Fetchable`]
//! and [`Updatable`].
//!
//! # Example
//!
//! ```rust
//! use klarna_checkout::rest::{CheckoutResource, Resource};
//! use serde_json::json;
//!
//! let mut resource = CheckoutResource::new("application/json");
//! resource.set("status", json!("checkout_incomplete"));
//!
//! resource.parse(json!({"status": "created"}).as_object().unwrap().clone());
//! assert_eq!(resource.get("status"), Some(&json!("created")));
//! ```

use serde_json::{Map, Value};
use url::Url;

use crate::clients::{Connector, ConnectorError, HttpResponse};

/// The capability set the connector requires from a resource.
pub trait Resource: Send + Sync {
    /// Returns the URI of the resource, if known.
    fn location(&self) -> Option<&Url>;

    /// Sets the URI of the resource.
    fn set_location(&mut self, location: Url);

    /// Returns the media type sent as `Content-Type`.
    fn content_type(&self) -> &str;

    /// Returns the media type sent as `Accept`.
    ///
    /// Defaults to the content type.
    fn accept(&self) -> &str {
        self.content_type()
    }

    /// Returns the data to send when no payload override is given.
    fn marshal(&self) -> Map<String, Value>;

    /// Replaces the resource data with a freshly parsed payload.
    fn parse(&mut self, data: Map<String, Value>);
}

/// A resource that can be created on the server.
#[allow(async_fn_in_trait)]
pub trait Creatable {
    /// Creates the resource from `data`.
    ///
    /// On success the resource location is set from the `Location` header of
    /// the response.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectorError`] raised by the exchange.
    async fn create(
        &mut self,
        connector: &Connector,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError>;
}

/// A resource that can be fetched from its location.
#[allow(async_fn_in_trait)]
pub trait Fetchable {
    /// Fetches the resource, replacing its data with the response body.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectorError`] raised by the exchange.
    async fn fetch(&mut self, connector: &Connector) -> Result<HttpResponse, ConnectorError>;
}

/// A resource that can be updated at its location.
#[allow(async_fn_in_trait)]
pub trait Updatable {
    /// Sends `data` to the resource location and replaces the resource data
    /// with the response body.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectorError`] raised by the exchange.
    async fn update(
        &mut self,
        connector: &Connector,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError>;
}

/// Generic Checkout resource: a location, a media type pair and ordered data.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutResource {
    location: Option<Url>,
    content_type: String,
    accept: String,
    data: Map<String, Value>,
}

impl CheckoutResource {
    /// Creates a resource that uses the same media type for both directions.
    #[must_use]
    pub fn new(content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        Self {
            location: None,
            accept: content_type.clone(),
            content_type,
            data: Map::new(),
        }
    }

    /// Sets a distinct `Accept` media type.
    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }

    /// Sets the initial location.
    #[must_use]
    pub fn with_location(mut self, location: Url) -> Self {
        self.location = Some(location);
        self
    }

    /// Returns a value of the resource data.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Sets a value of the resource data.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// Returns the full resource data.
    #[must_use]
    pub const fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl Resource for CheckoutResource {
    fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    fn set_location(&mut self, location: Url) {
        self.location = Some(location);
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn accept(&self) -> &str {
        &self.accept
    }

    fn marshal(&self) -> Map<String, Value> {
        self.data.clone()
    }

    fn parse(&mut self, data: Map<String, Value>) {
        self.data = data;
    }
}
