//! Secret key for credential MACs.
//!
//! This module provides [`SecretKey`], the opaque byte string a
//! [`CredentialManager`](crate::CredentialManager) keys its HMAC contexts
//! with. Generating, storing and rotating keys happens elsewhere; this type
//! only carries the bytes and keeps them out of logs.

use crate::error::{CredentialError, CredentialResult};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recommended key size in bytes (the SHA-256 output size).
pub const RECOMMENDED_KEY_SIZE: usize = 32;

/// Secret key material shared by issuers and verifiers.
///
/// HMAC accepts keys of any length; the only rejected key is the empty one.
/// Key bytes are zeroed when the value is dropped.
///
/// # Example
///
/// ```
/// use node_credentials::SecretKey;
///
/// let key = SecretKey::new(vec![0x42u8; 32]).unwrap();
/// assert_eq!(key.len(), 32);
///
/// assert!(SecretKey::new(Vec::new()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

impl SecretKey {
    /// Creates a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `bytes` is empty.
    pub fn new(bytes: impl Into<Vec<u8>>) -> CredentialResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(CredentialError::InvalidKey("key is empty".into()));
        }
        Ok(Self { bytes })
    }

    /// Creates a key from a hex string, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns a decoding error for malformed hex, or an invalid-input error
    /// if the decoded key is empty.
    pub fn from_hex(text: &str) -> CredentialResult<Self> {
        let digits = text.trim();
        let digits = digits.strip_prefix("0x").unwrap_or(digits);
        Self::new(hex::decode(digits)?)
    }

    /// Returns the key as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; empty keys cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Don't expose key material in debug output
        write!(f, "SecretKey({} bytes)", self.bytes.len())
    }
}
