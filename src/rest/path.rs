//! Path templates for Checkout resources.
//!
//! Resource paths are templates relative to the connector base URI, with
//! `{name}` placeholders for path parameters.
//!
//! # Example
//!
//! ```rust
//! use klarna_checkout::rest::{build_path, RECURRING_ORDERS_PATH};
//!
//! let path = build_path(RECURRING_ORDERS_PATH, &[("token", "ABC 123")]);
//! assert_eq!(path, "/checkout/recurring/ABC%20123/orders");
//! ```

use url::Url;

use crate::clients::InvalidArgumentError;
use crate::config::BaseUri;

/// Path of the aggregated order collection.
pub const ORDERS_PATH: &str = "/checkout/orders";

/// Path of the recurring status for a recurring token.
pub const RECURRING_STATUS_PATH: &str = "/checkout/recurring/{token}";

/// Path of the recurring order collection for a recurring token.
pub const RECURRING_ORDERS_PATH: &str = "/checkout/recurring/{token}/orders";

/// Builds a path from a template by interpolating parameters.
///
/// Values are percent-encoded so they always stay within a single path
/// segment.
#[must_use]
pub fn build_path(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in params {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

/// Resolves a built path against the base URI.
pub(crate) fn resolve(base: &BaseUri, path: &str) -> Result<Url, InvalidArgumentError> {
    base.join(path).map_err(|e| InvalidArgumentError::InvalidUri {
        uri: format!("{}{path}", base.as_ref()),
        reason: e.to_string(),
    })
}
