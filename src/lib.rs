//! # Klarna Checkout Rust SDK
//!
//! A Rust client for the Klarna Checkout REST API, providing signed requests,
//! redirect handling and typed resources for checkout integrations.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ConnectorConfig`] and [`ConnectorConfigBuilder`]
//! - Validated newtypes for the shared secret and base URI
//! - Request signing with the body digest (`Authorization: Klarna <digest>`)
//! - A [`Connector`] that follows redirects, detects redirect loops and
//!   classifies responses
//! - Pluggable transports and request/response interceptors
//! - The [`Order`], [`RecurringOrder`] and [`RecurringStatus`] resources
//!
//! ## Quick Start
//!
//! ```rust
//! use klarna_checkout::{BaseUri, ConnectorConfig, SharedSecret};
//!
//! // Create configuration using the builder pattern
//! let config = ConnectorConfig::builder()
//!     .shared_secret(SharedSecret::new("shared-secret").unwrap())
//!     .base_uri(BaseUri::test())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Creating and Fetching an Order
//!
//! ```rust,ignore
//! use klarna_checkout::{Connector, Creatable, Fetchable, Order};
//! use serde_json::json;
//!
//! let connector = Connector::new(config)?;
//!
//! let mut order = Order::new();
//! let data = json!({"purchase_country": "SE", "cart": {"items": []}});
//! order.create(&connector, data.as_object().unwrap().clone()).await?;
//!
//! // The location was set from the 201 Created response
//! order.fetch(&connector).await?;
//! println!("Status: {:?}", order.get("status"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Base URI and secrets live in the configuration
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Async-first**: Exchanges are `async`; the runtime is up to the caller
//! - **Explicit middleware**: Interceptors run in a fixed order with a
//!   per-exchange context

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Digest;
pub use config::{BaseUri, ConnectorConfig, ConnectorConfigBuilder, SharedSecret};
pub use error::ConfigError;

// Re-export connector types
pub use clients::{
    Connector, ConnectorError, ConnectorOptions, ErrorResponse, HttpMethod, HttpRequest,
    HttpResponse, InvalidArgumentError, Transport, TransportError,
};

// Re-export resource types
pub use rest::{
    CheckoutResource, Creatable, Fetchable, Order, RecurringOrder, RecurringStatus, Resource,
    Updatable,
};
