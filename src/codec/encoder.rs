//! Encoder trait for credential representations.

use crate::credential::AuthenticatedCredential;
use crate::error::CredentialResult;

/// Encode an authenticated credential into an external representation.
pub trait Encoder {
    /// Type of the encoded form.
    type Output;

    /// Encode the credential.
    ///
    /// Encoding never alters the credential; the MAC it carries was computed
    /// over the full inner credential beforehand.
    fn encode(&self, credential: &AuthenticatedCredential) -> CredentialResult<Self::Output>;
}
