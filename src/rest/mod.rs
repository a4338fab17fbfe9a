//! Checkout resources.
//!
//! This module provides the resource layer on top of the
//! [`Connector`](crate::Connector):
//!
//! - **[`Resource`] trait**: The capability set the connector needs from a resource
//! - **[`CheckoutResource`]**: The generic resource (location, media types, data)
//! - **[`Creatable`], [`Fetchable`], [`Updatable`]**: Per-resource operations
//! - **Path building**: Templates relative to the base URI
//! - **[`resources`]**: [`Order`], [`RecurringOrder`] and [`RecurringStatus`]
//!
//! # Example
//!
//! ```rust,ignore
//! use klarna_checkout::rest::{Fetchable, RecurringStatus};
//!
//! let mut status = RecurringStatus::new(connector.base_uri(), "ABC-123")?;
//! status.fetch(&connector).await?;
//! ```

mod path;
mod resource;
pub mod resources;

pub use path::{build_path, ORDERS_PATH, RECURRING_ORDERS_PATH, RECURRING_STATUS_PATH};
pub use resource::{CheckoutResource, Creatable, Fetchable, Resource, Updatable};
pub use resources::{Order, RecurringOrder, RecurringStatus};
