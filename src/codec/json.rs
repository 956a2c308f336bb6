//! JSON document encoding.
//!
//! ```text
//! { "node_id": "0x<hex>", "timestamp": <int64>, "operator_type": <int>, "mac": "<base64url>" }
//! ```
//!
//! Hex is written lowercase. Decoding accepts an optional `0x` prefix and
//! either letter case.

use crate::codec::{Decoder, Encoder, base64url_decode, base64url_encode};
use crate::credential::{AuthenticatedCredential, Credential, OperatorType};
use crate::error::{CredentialError, CredentialResult, DecodeError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Serialize, Deserialize)]
struct JsonAuthenticatedCredential {
    node_id: String,
    timestamp: i64,
    operator_type: i32,
    mac: String,
}

impl From<&AuthenticatedCredential> for JsonAuthenticatedCredential {
    fn from(credential: &AuthenticatedCredential) -> Self {
        Self {
            node_id: credential.credential().node_id_hex(),
            timestamp: credential.timestamp(),
            operator_type: credential.operator_type().as_i32(),
            mac: base64url_encode(credential.mac()),
        }
    }
}

impl TryFrom<JsonAuthenticatedCredential> for AuthenticatedCredential {
    type Error = DecodeError;

    fn try_from(doc: JsonAuthenticatedCredential) -> Result<Self, Self::Error> {
        let mac = base64url_decode(&doc.mac)?;
        let hex_digits = doc.node_id.strip_prefix("0x").unwrap_or(&doc.node_id);
        let node_id = hex::decode(hex_digits)?;
        let operator_type = OperatorType::try_from(doc.operator_type)?;
        Ok(Self::from_parts(
            Credential::new(node_id, operator_type, doc.timestamp),
            mac,
        ))
    }
}

impl Serialize for AuthenticatedCredential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonAuthenticatedCredential::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AuthenticatedCredential {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = JsonAuthenticatedCredential::deserialize(deserializer)?;
        Self::try_from(doc).map_err(serde::de::Error::custom)
    }
}

fn serialization_failure(err: serde_json::Error) -> CredentialError {
    CredentialError::internal(format!("json serialization failed: {err}"))
}

/// Codec for the JSON document form.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Encoder for JsonCodec {
    type Output = String;

    fn encode(&self, credential: &AuthenticatedCredential) -> CredentialResult<String> {
        credential.to_json()
    }
}

impl Decoder for JsonCodec {
    type Input = str;

    fn decode(&self, input: &str) -> CredentialResult<AuthenticatedCredential> {
        AuthenticatedCredential::from_json(input)
    }
}

impl AuthenticatedCredential {
    /// Renders the credential as a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// use node_credentials::{AuthenticatedCredential, Credential, OperatorType};
    ///
    /// let cred = Credential::new(vec![0xab, 0xcd], OperatorType::RocketPool, 5);
    /// let auth = AuthenticatedCredential::from_parts(cred, vec![0xfb, 0xff]);
    ///
    /// assert_eq!(
    ///     auth.to_json().unwrap(),
    ///     r#"{"node_id":"0xabcd","timestamp":5,"operator_type":1,"mac":"-_8="}"#
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an internal error if serialization fails.
    pub fn to_json(&self) -> CredentialResult<String> {
        serde_json::to_string(&JsonAuthenticatedCredential::from(self))
            .map_err(serialization_failure)
    }

    /// Parses a JSON document produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    ///
    /// Returns a decoding error for malformed JSON, hex, base64 or an unknown
    /// operator type.
    pub fn from_json(text: &str) -> CredentialResult<Self> {
        let doc: JsonAuthenticatedCredential = serde_json::from_str(text)?;
        Ok(Self::try_from(doc)?)
    }
}
