//! Authorization digest for Klarna Checkout requests.
//!
//! Every request sent to the Checkout API carries an
//! `Authorization: Klarna <digest>` header. The digest is the base64-encoded
//! SHA-256 hash of the request body immediately followed by the shared
//! secret. It is not an HMAC: the secret is simply appended to the message.
//!
//! # Example
//!
//! ```rust
//! use klarna_checkout::{Digest, SharedSecret};
//!
//! let digest = Digest::new(SharedSecret::new("mySecret").unwrap());
//!
//! // Requests without a body are signed with the secret alone
//! let empty = digest.create(b"");
//! assert_eq!(empty.len(), 44); // Base64 of 32 bytes
//!
//! let header = digest.authorization(br#"{"cart":{}}"#);
//! assert!(header.starts_with("Klarna "));
//! ```

use std::io::{self, Read};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest as _, Sha256};

use crate::config::SharedSecret;

/// Authorization scheme used in the `Authorization` header.
pub const AUTHORIZATION_SCHEME: &str = "Klarna";

const READ_CHUNK_SIZE: usize = 1024;

/// Computes authorization digests bound to one shared secret.
///
/// The digest is deterministic: the same message and secret always produce
/// the same output. An absent message is treated as the empty byte sequence.
#[derive(Clone, Debug)]
pub struct Digest {
    secret: SharedSecret,
}

impl Digest {
    /// Creates a digest bound to the given shared secret.
    #[must_use]
    pub const fn new(secret: SharedSecret) -> Self {
        Self { secret }
    }

    /// Creates a digest from a fully buffered message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use klarna_checkout::{Digest, SharedSecret};
    ///
    /// let digest = Digest::new(SharedSecret::new("mySecret").unwrap());
    /// assert_eq!(digest.create("payload"), digest.create(b"payload".to_vec()));
    /// ```
    #[must_use]
    pub fn create(&self, message: impl AsRef<[u8]>) -> String {
        let mut hasher = Sha256::new();
        hasher.update(message.as_ref());
        self.finish(hasher)
    }

    /// Creates a digest from a stream, hashing all bytes in the order read.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if reading from the stream fails.
    pub fn create_from_reader<R: Read>(&self, mut reader: R) -> io::Result<String> {
        let mut hasher = Sha256::new();
        let mut buffer = [0_u8; READ_CHUNK_SIZE];
        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }
        Ok(self.finish(hasher))
    }

    /// Returns the full `Authorization` header value for a request body.
    #[must_use]
    pub fn authorization(&self, body: impl AsRef<[u8]>) -> String {
        format!("{AUTHORIZATION_SCHEME} {}", self.create(body))
    }

    fn finish(&self, mut hasher: Sha256) -> String {
        hasher.update(self.secret.as_ref().as_bytes());
        STANDARD.encode(hasher.finalize())
    }
}
