//! Checkout order resource.
//!
//! An [`Order`] is the aggregated checkout order. It can be created under the
//! order collection, fetched from its location and updated at its location.
//!
//! # Example
//!
//! ```rust,ignore
//! use klarna_checkout::{Creatable, Fetchable, Order, Updatable};
//! use serde_json::json;
//!
//! let mut order = Order::new();
//! let data = json!({
//!     "purchase_country": "SE",
//!     "purchase_currency": "SEK",
//!     "locale": "sv-se",
//!     "cart": {"items": []}
//! });
//!
//! // POST /checkout/orders; the location is taken from the 201 response
//! order.create(&connector, data.as_object().unwrap().clone()).await?;
//!
//! // GET the order and read its status
//! order.fetch(&connector).await?;
//! println!("Status: {:?}", order.get("status"));
//!
//! // Update the order at its location
//! let update = json!({"status": "created"});
//! order.update(&connector, update.as_object().unwrap().clone()).await?;
//! ```

use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};
use url::Url;

use crate::clients::{Connector, ConnectorError, ConnectorOptions, HttpResponse};
use crate::rest::path::{build_path, resolve, ORDERS_PATH};
use crate::rest::{CheckoutResource, Creatable, Fetchable, Resource, Updatable};

/// An aggregated checkout order.
///
/// Derefs to [`CheckoutResource`] for data and location access.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    inner: CheckoutResource,
}

impl Order {
    /// Media type of the aggregated order.
    pub const CONTENT_TYPE: &'static str =
        "application/vnd.klarna.checkout.aggregated-order-v2+json";

    /// Creates an order without a location.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: CheckoutResource::new(Self::CONTENT_TYPE),
        }
    }

    /// Creates an order pointing at an existing location.
    #[must_use]
    pub fn at(location: Url) -> Self {
        Self {
            inner: CheckoutResource::new(Self::CONTENT_TYPE).with_location(location),
        }
    }

    /// Sets the location, then fetches the order from it.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectorError`] raised by the exchange.
    pub async fn fetch_from(
        &mut self,
        connector: &Connector,
        location: Url,
    ) -> Result<HttpResponse, ConnectorError> {
        self.inner.set_location(location);
        self.fetch(connector).await
    }

    /// Sets the location, then updates the order at it.
    ///
    /// # Errors
    ///
    /// Returns any [`ConnectorError`] raised by the exchange.
    pub async fn update_at(
        &mut self,
        connector: &Connector,
        location: Url,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError> {
        self.inner.set_location(location);
        self.update(connector, data).await
    }

    /// Consumes the order and returns the underlying resource.
    #[must_use]
    pub fn into_inner(self) -> CheckoutResource {
        self.inner
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Creatable for Order {
    async fn create(
        &mut self,
        connector: &Connector,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError> {
        let uri = resolve(connector.base_uri(), &build_path(ORDERS_PATH, &[]))?;
        let options = ConnectorOptions::new().with_uri(uri).with_data(data);
        connector.apply("POST", &mut self.inner, Some(options)).await
    }
}

impl Fetchable for Order {
    async fn fetch(&mut self, connector: &Connector) -> Result<HttpResponse, ConnectorError> {
        connector.apply("GET", &mut self.inner, None).await
    }
}

impl Updatable for Order {
    async fn update(
        &mut self,
        connector: &Connector,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError> {
        let options = ConnectorOptions::new().with_data(data);
        connector.apply("POST", &mut self.inner, Some(options)).await
    }
}

impl Deref for Order {
    type Target = CheckoutResource;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Order {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_media_types() {
        let order = Order::new();
        assert_eq!(
            order.content_type(),
            "application/vnd.klarna.checkout.aggregated-order-v2+json"
        );
        assert_eq!(order.accept(), order.content_type());
        assert!(order.location().is_none());
    }

    #[test]
    fn test_order_at_location() {
        let uri = Url::parse("https://checkout.klarna.com/checkout/orders/ABC").unwrap();
        let order = Order::at(uri.clone());
        assert_eq!(order.location(), Some(&uri));
    }

    #[test]
    fn test_order_deref_mut_sets_data() {
        let mut order = Order::default();
        order.set("merchant_reference", serde_json::json!({"orderid1": "123"}));
        assert!(order.into_inner().get("merchant_reference").is_some());
    }
}
