//! Recurring status resource.

use std::ops::{Deref, DerefMut};

use url::Url;

use crate::clients::{Connector, ConnectorError, HttpResponse, InvalidArgumentError};
use crate::config::BaseUri;
use crate::rest::path::{build_path, resolve, RECURRING_STATUS_PATH};
use crate::rest::{CheckoutResource, Fetchable};

/// Status of a recurring token. Fetch only.
///
/// # Example
///
/// ```rust,ignore
/// use klarna_checkout::{Fetchable, RecurringStatus};
///
/// let mut status = RecurringStatus::new(connector.base_uri(), "ABC-123")?;
/// status.fetch(&connector).await?;
/// println!("Payment method: {:?}", status.get("payment_method"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RecurringStatus {
    inner: CheckoutResource,
}

impl RecurringStatus {
    /// Media type of the recurring status.
    pub const CONTENT_TYPE: &'static str =
        "application/vnd.klarna.checkout.recurring-status-v1+json";

    /// Creates the status resource of `token` under `base`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::InvalidUri`] if the location cannot be
    /// built.
    pub fn new(base: &BaseUri, token: &str) -> Result<Self, InvalidArgumentError> {
        let location = resolve(base, &build_path(RECURRING_STATUS_PATH, &[("token", token)]))?;
        Ok(Self::at(location))
    }

    /// Creates the status resource at an explicit location.
    #[must_use]
    pub fn at(location: Url) -> Self {
        Self {
            inner: CheckoutResource::new(Self::CONTENT_TYPE).with_location(location),
        }
    }

    /// Consumes the status and returns the underlying resource.
    #[must_use]
    pub fn into_inner(self) -> CheckoutResource {
        self.inner
    }
}

impl Fetchable for RecurringStatus {
    async fn fetch(&mut self, connector: &Connector) -> Result<HttpResponse, ConnectorError> {
        connector.apply("GET", &mut self.inner, None).await
    }
}

impl Deref for RecurringStatus {
    type Target = CheckoutResource;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RecurringStatus {
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
        let status = RecurringStatus::new(&base, "ABC-123").unwrap();
        assert_eq!(
            status.location().map(Url::as_str),
            Some("https://mock.com/checkout/recurring/ABC-123")
        );
        assert_eq!(
            status.content_type(),
            "application/vnd.klarna.checkout.recurring-status-v1+json"
        );
        assert_eq!(status.accept(), status.content_type());
    }

    #[test]
    fn test_location_from_uri() {
        let uri = Url::parse("https://mock.com/checkout/recurring/XYZ").unwrap();
        assert_eq!(RecurringStatus::at(uri.clone()).location(), Some(&uri));
    }
}
