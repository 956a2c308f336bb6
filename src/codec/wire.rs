//! Canonical protobuf encoding.
//!
//! # Wire Format
//!
//! ```text
//! message Credential {
//!   bytes node_id = 1;
//!   OperatorType operator_type = 2;   // varint, Solo = 0 is omitted
//!   int64 timestamp = 3;
//! }
//!
//! message AuthenticatedCredential {
//!   Credential credential = 1;
//!   bytes mac = 2;
//! }
//! ```
//!
//! Fields are emitted in tag order and proto3 defaults are skipped, so equal
//! credentials always produce equal bytes. Unknown tags are ignored on decode,
//! which leaves room for additional fields.

use crate::codec::{Decoder, Encoder};
use crate::credential::{AuthenticatedCredential, Credential, OperatorType};
use crate::error::{CredentialResult, DecodeError};
use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub(crate) struct WireCredential {
    #[prost(bytes = "vec", tag = "1")]
    pub(crate) node_id: Vec<u8>,
    #[prost(int32, tag = "2")]
    pub(crate) operator_type: i32,
    #[prost(int64, tag = "3")]
    pub(crate) timestamp: i64,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct WireAuthenticatedCredential {
    #[prost(message, optional, tag = "1")]
    pub(crate) credential: Option<WireCredential>,
    #[prost(bytes = "vec", tag = "2")]
    pub(crate) mac: Vec<u8>,
}

impl From<&Credential> for WireCredential {
    fn from(credential: &Credential) -> Self {
        Self {
            node_id: credential.node_id().to_vec(),
            operator_type: credential.operator_type().as_i32(),
            timestamp: credential.timestamp(),
        }
    }
}

impl TryFrom<WireCredential> for Credential {
    type Error = DecodeError;

    fn try_from(wire: WireCredential) -> Result<Self, Self::Error> {
        let operator_type = OperatorType::try_from(wire.operator_type)?;
        Ok(Self::new(wire.node_id, operator_type, wire.timestamp))
    }
}

impl From<&AuthenticatedCredential> for WireAuthenticatedCredential {
    fn from(credential: &AuthenticatedCredential) -> Self {
        Self {
            credential: Some(WireCredential::from(credential.credential())),
            mac: credential.mac().to_vec(),
        }
    }
}

impl TryFrom<WireAuthenticatedCredential> for AuthenticatedCredential {
    type Error = DecodeError;

    fn try_from(wire: WireAuthenticatedCredential) -> Result<Self, Self::Error> {
        // An absent inner message decodes to the empty credential.
        let credential = Credential::try_from(wire.credential.unwrap_or_default())?;
        Ok(Self::from_parts(credential, wire.mac))
    }
}

/// Canonical bytes of the inner credential (the MAC input).
pub(crate) fn encode_credential(credential: &Credential) -> Vec<u8> {
    WireCredential::from(credential).encode_to_vec()
}

pub(crate) fn decode_message(bytes: &[u8]) -> CredentialResult<AuthenticatedCredential> {
    let wire = WireAuthenticatedCredential::decode(bytes)?;
    Ok(AuthenticatedCredential::try_from(wire)?)
}

/// Codec for the compact binary form.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl Encoder for BinaryCodec {
    type Output = Vec<u8>;

    fn encode(&self, credential: &AuthenticatedCredential) -> CredentialResult<Vec<u8>> {
        Ok(credential.to_binary())
    }
}

impl Decoder for BinaryCodec {
    type Input = [u8];

    fn decode(&self, input: &[u8]) -> CredentialResult<AuthenticatedCredential> {
        AuthenticatedCredential::from_binary(input)
    }
}

impl Credential {
    /// Decodes a credential from its canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns a decoding error for a malformed message or unknown operator type.
    pub fn from_canonical_bytes(bytes: &[u8]) -> CredentialResult<Self> {
        let wire = WireCredential::decode(bytes)?;
        Ok(Self::try_from(wire)?)
    }
}

impl AuthenticatedCredential {
    /// Serializes the credential and its MAC as a single binary blob.
    ///
    /// # Example
    ///
    /// ```
    /// use node_credentials::{AuthenticatedCredential, Credential, OperatorType};
    ///
    /// let cred = Credential::new(vec![7u8; 20], OperatorType::Solo, 1_700_000_000);
    /// let auth = AuthenticatedCredential::from_parts(cred, vec![1u8; 32]);
    ///
    /// let bytes = auth.to_binary();
    /// assert_eq!(AuthenticatedCredential::from_binary(&bytes).unwrap(), auth);
    /// ```
    #[must_use]
    pub fn to_binary(&self) -> Vec<u8> {
        WireAuthenticatedCredential::from(self).encode_to_vec()
    }

    /// Deserializes a binary blob produced by [`to_binary`](Self::to_binary).
    ///
    /// # Errors
    ///
    /// Returns a decoding error if the payload is not a valid message or
    /// carries an unknown operator type.
    pub fn from_binary(bytes: &[u8]) -> CredentialResult<Self> {
        decode_message(bytes)
    }
}
