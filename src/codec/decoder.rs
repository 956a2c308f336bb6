//! Decoder trait for credential representations.

use crate::credential::AuthenticatedCredential;
use crate::error::CredentialResult;

/// Reconstruct an authenticated credential from an external representation.
pub trait Decoder {
    /// Type of the encoded form accepted by [`decode`](Self::decode).
    type Input: ?Sized;

    /// Attempt to decode a credential.
    ///
    /// Returns:
    /// - `Ok(credential)` with every field reconstructed bit-for-bit
    /// - `Err(e)` with a decoding error on malformed input
    ///
    /// A decoded credential is not yet trusted; verify it with
    /// [`CredentialManager::verify`](crate::CredentialManager::verify).
    fn decode(&self, input: &Self::Input) -> CredentialResult<AuthenticatedCredential>;
}
