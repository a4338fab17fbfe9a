//! Error types for the Klarna Checkout SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Errors raised while talking to the Checkout API live
//! in [`crate::clients::ConnectorError`].
//!
//! # Example
//!
//! ```rust
//! use klarna_checkout::{ConfigError, SharedSecret};
//!
//! let result = SharedSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySharedSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shared secret cannot be empty.
    #[error("Shared secret cannot be empty. Please provide the shared secret issued by Klarna.")]
    EmptySharedSecret,

    /// Base URI is invalid.
    #[error("Invalid base URI '{uri}'. Please provide an absolute http(s) URL (e.g., 'https://checkout.klarna.com').")]
    InvalidBaseUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A user agent field with the same key is already present.
    #[error("Unable to redefine user agent field '{key}'.")]
    DuplicateUserAgentField {
        /// The key that was defined twice.
        key: String,
    },
}
