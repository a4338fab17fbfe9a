//! Recurring order resource.

use std::ops::{Deref, DerefMut};

use serde_json::{Map, Value};
use url::Url;

use crate::clients::{
    Connector, ConnectorError, ConnectorOptions, HttpResponse, InvalidArgumentError,
};
use crate::config::BaseUri;
use crate::rest::path::{build_path, resolve, RECURRING_ORDERS_PATH};
use crate::rest::{CheckoutResource, Creatable};

/// An order placed against a recurring token. Create only.
///
/// The request is sent as a recurring order and answered with a
/// recurring-order-accepted document.
///
/// # Example
///
/// ```rust,ignore
/// use klarna_checkout::{Creatable, RecurringOrder};
/// use serde_json::json;
///
/// let mut recurring = RecurringOrder::new(connector.base_uri(), "ABC-123")?;
/// let data = json!({"purchase_country": "SE", "cart": {"items": []}});
/// recurring.create(&connector, data.as_object().unwrap().clone()).await?;
/// println!("Reservation: {:?}", recurring.get("reservation"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RecurringOrder {
    inner: CheckoutResource,
}

impl RecurringOrder {
    /// Media type of the recurring order request.
    pub const CONTENT_TYPE: &'static str =
        "application/vnd.klarna.checkout.recurring-order-v1+json";

    /// Media type of the accepted recurring order response.
    pub const ACCEPT: &'static str =
        "application/vnd.klarna.checkout.recurring-order-accepted-v1+json";

    /// Creates the recurring order collection of `token` under `base`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::InvalidUri`] if the location cannot be
    /// built.
    pub fn new(base: &BaseUri, token: &str) -> Result<Self, InvalidArgumentError> {
        let location = resolve(base, &build_path(RECURRING_ORDERS_PATH, &[("token", token)]))?;
        Ok(Self::at(location))
    }

    /// Creates the recurring order collection at an explicit location.
    #[must_use]
    pub fn at(location: Url) -> Self {
        Self {
            inner: CheckoutResource::new(Self::CONTENT_TYPE)
                .with_accept(Self::ACCEPT)
                .with_location(location),
        }
    }

    /// Consumes the recurring order and returns the underlying resource.
    #[must_use]
    pub fn into_inner(self) -> CheckoutResource {
        self.inner
    }
}

impl Creatable for RecurringOrder {
    async fn create(
        &mut self,
        connector: &Connector,
        data: Map<String, Value>,
    ) -> Result<HttpResponse, ConnectorError> {
        let options = ConnectorOptions::new().with_data(data);
        connector.apply("POST", &mut self.inner, Some(options)).await
    }
}

impl Deref for RecurringOrder {
    type Target = CheckoutResource;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RecurringOrder {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Resource;

    #[test]
    fn test_location_from_token() {
        let base = BaseUri::new("https://mock.com").unwrap();
        let order = RecurringOrder::new(&base, "ABC-123").unwrap();
        assert_eq!(
            order.location().map(Url::as_str),
            Some("https://mock.com/checkout/recurring/ABC-123/orders")
        );
    }

    #[test]
    fn test_media_types_differ() {
        let order = RecurringOrder::at(Url::parse("https://mock.com/x").unwrap());
        assert_eq!(
            order.content_type(),
            "application/vnd.klarna.checkout.recurring-order-v1+json"
        );
        assert_eq!(
            order.accept(),
            "application/vnd.klarna.checkout.recurring-order-accepted-v1+json"
        );
    }
}
