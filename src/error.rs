//! Error types for credential issuance, verification and decoding.
//!
//! Every failure surfaces as a [`CredentialError`]. Callers that only need to
//! branch on the broad category use [`CredentialError::kind`], which maps each
//! variant onto one of four [`CredentialErrorKind`]s. An authentication
//! failure is never reported for a systemic fault, and vice versa.

use thiserror::Error;

/// Broad classification of a [`CredentialError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialErrorKind {
    /// The caller supplied input the operation cannot accept.
    InvalidInput,
    /// An external encoding could not be parsed.
    Decoding,
    /// The credential's MAC did not match.
    Authentication,
    /// Unexpected failure inside the engine.
    Internal,
}

impl CredentialErrorKind {
    /// Returns the kind name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Decoding => "decoding",
            Self::Authentication => "authentication",
            Self::Internal => "internal",
        }
    }
}

/// Failure while reconstructing a credential from an external encoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed URL-safe base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Malformed hexadecimal node identifier.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Malformed protobuf payload.
    #[error("invalid binary payload: {0}")]
    Protobuf(#[from] prost::DecodeError),
    /// Malformed JSON document.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// Operator type integer outside the known enumeration.
    #[error("unknown operator type {0}")]
    UnknownOperatorType(i32),
}

/// An error from credential operations.
///
/// # Example
///
/// ```
/// use node_credentials::{CredentialError, CredentialErrorKind};
///
/// let err = CredentialError::MacMismatch;
/// assert_eq!(err.kind(), CredentialErrorKind::Authentication);
/// assert_eq!(err.to_string(), "credential MAC mismatch");
/// ```
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Node identifier was not exactly [`NODE_ID_LEN`](crate::NODE_ID_LEN) bytes at creation.
    #[error("invalid node id length: expected {expected}, got {actual}")]
    InvalidNodeIdLength {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
    /// Secret key material was rejected.
    #[error("invalid secret key: {0}")]
    InvalidKey(String),
    /// An external encoding could not be decoded.
    #[error("decoding failed: {0}")]
    Decoding(#[from] DecodeError),
    /// The supplied MAC does not authenticate the credential.
    #[error("credential MAC mismatch")]
    MacMismatch,
    /// Serialization or MAC context failure unrelated to the input's authenticity.
    #[error("internal credential error: {0}")]
    Internal(String),
}

impl CredentialError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> CredentialErrorKind {
        match self {
            Self::InvalidNodeIdLength { .. } | Self::InvalidKey(_) => {
                CredentialErrorKind::InvalidInput
            }
            Self::Decoding(_) => CredentialErrorKind::Decoding,
            Self::MacMismatch => CredentialErrorKind::Authentication,
            Self::Internal(_) => CredentialErrorKind::Internal,
        }
    }

    /// Returns `true` if this is a MAC mismatch.
    #[must_use]
    pub const fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::MacMismatch)
    }

    /// Returns `true` if the input could not be decoded.
    #[must_use]
    pub const fn is_decoding_failure(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    pub(crate) fn internal(ctx: impl Into<String>) -> Self {
        Self::Internal(ctx.into())
    }
}

macro_rules! impl_from_decode {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for CredentialError {
                fn from(e: $source) -> Self {
                    Self::Decoding(DecodeError::from(e))
                }
            }
        )*
    };
}

impl_from_decode!(
    base64::DecodeError,
    hex::FromHexError,
    prost::DecodeError,
    serde_json::Error,
);

/// Result type for credential operations.
pub type CredentialResult<T> = Result<T, CredentialError>;
