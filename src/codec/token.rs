//! Username/password token encoding.
//!
//! The node id travels on its own as the username so that a credential fits
//! a basic-auth style pair without sending the id twice:
//!
//! ```text
//! username = base64url(node_id)
//! password = base64url(protobuf(AuthenticatedCredential with node_id = ""))
//! ```
//!
//! The MAC inside the password was computed over the complete credential,
//! node id included. The id is blanked only in the transport copy and merged
//! back on decode, after which verification sees the original bytes again.

use crate::codec::wire::{WireAuthenticatedCredential, WireCredential};
use crate::codec::{Decoder, Encoder, base64url_decode, base64url_encode};
use crate::credential::AuthenticatedCredential;
use crate::error::CredentialResult;
use core::fmt;
use prost::Message;

/// A credential split into a username and a password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    username: String,
    password: String,
}

impl TokenPair {
    /// Creates a pair from received strings.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username part (the encoded node id).
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password part (operator type, timestamp and MAC).
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Consumes the pair and returns `(username, password)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.username, self.password)
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The password is a bearer secret.
        f.debug_struct("TokenPair")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Codec for the username/password form.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPairCodec;

impl Encoder for TokenPairCodec {
    type Output = TokenPair;

    fn encode(&self, credential: &AuthenticatedCredential) -> CredentialResult<TokenPair> {
        Ok(credential.to_token_pair())
    }
}

impl Decoder for TokenPairCodec {
    type Input = TokenPair;

    fn decode(&self, input: &TokenPair) -> CredentialResult<AuthenticatedCredential> {
        AuthenticatedCredential::from_token_pair(input.username(), input.password())
    }
}

impl AuthenticatedCredential {
    /// Returns the username part: the URL-safe base64 node id.
    #[must_use]
    pub fn token_username(&self) -> String {
        base64url_encode(self.node_id())
    }

    /// Returns the password part: the binary form with the node id blanked,
    /// URL-safe base64 encoded.
    #[must_use]
    pub fn token_password(&self) -> String {
        let wire = WireAuthenticatedCredential {
            credential: Some(WireCredential {
                node_id: Vec::new(),
                ..WireCredential::from(self.credential())
            }),
            mac: self.mac().to_vec(),
        };
        base64url_encode(&wire.encode_to_vec())
    }

    /// Encodes both halves of the token pair.
    ///
    /// # Example
    ///
    /// ```
    /// use node_credentials::{AuthenticatedCredential, Credential, OperatorType};
    ///
    /// let cred = Credential::new(vec![3u8; 20], OperatorType::RocketPool, 1_700_000_000);
    /// let auth = AuthenticatedCredential::from_parts(cred, vec![9u8; 32]);
    ///
    /// let pair = auth.to_token_pair();
    /// let back = AuthenticatedCredential::from_token_pair(pair.username(), pair.password()).unwrap();
    /// assert_eq!(back, auth);
    /// ```
    #[must_use]
    pub fn to_token_pair(&self) -> TokenPair {
        TokenPair::new(self.token_username(), self.token_password())
    }

    /// Reconstructs a credential from a username/password pair.
    ///
    /// Any node id carried inside the password is replaced by the username's.
    ///
    /// # Errors
    ///
    /// Returns a decoding error if either half is not valid URL-safe base64
    /// or the password payload is not a valid binary credential.
    pub fn from_token_pair(username: &str, password: &str) -> CredentialResult<Self> {
        let node_id = base64url_decode(username)?;
        let payload = base64url_decode(password)?;
        let (credential, mac) = Self::from_binary(&payload)?.into_parts();
        Ok(Self::from_parts(credential.with_node_id(node_id), mac))
    }
}
