//! Request authentication for the Klarna Checkout API.
//!
//! Klarna Checkout authenticates each request with a digest of the request
//! body and the merchant's shared secret, sent as
//! `Authorization: Klarna <digest>`.
//!
//! - [`Digest`]: Computes the digest and the header value

pub mod digest;

pub use digest::{Digest, AUTHORIZATION_SCHEME};
