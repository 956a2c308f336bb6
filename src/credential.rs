//! Credential data model.
//!
//! A [`Credential`] is the inner payload that gets authenticated: a node
//! identifier, an operator classification and an issuance timestamp. An
//! [`AuthenticatedCredential`] owns exactly one `Credential` plus the MAC
//! computed over the credential's canonical bytes. Both are immutable once
//! built; the only way to obtain a fresh MAC is through
//! [`CredentialManager::create`](crate::CredentialManager::create).

use crate::error::DecodeError;
use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Length in bytes of a node identifier issued by this crate.
pub const NODE_ID_LEN: usize = 20;

/// Role classification of a node operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum OperatorType {
    /// Independent operator running its own node.
    #[default]
    Solo = 0,
    /// Operator participating through the Rocket Pool protocol.
    RocketPool = 1,
}

impl OperatorType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns the operator type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::RocketPool => "rocketpool",
        }
    }
}

impl TryFrom<i32> for OperatorType {
    type Error = DecodeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Solo),
            1 => Ok(Self::RocketPool),
            other => Err(DecodeError::UnknownOperatorType(other)),
        }
    }
}

impl From<OperatorType> for i32 {
    fn from(value: OperatorType) -> Self {
        value.as_i32()
    }
}

impl fmt::Display for OperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a wall-clock instant to Unix seconds.
///
/// Instants before the epoch floor toward negative infinity, so
/// `UNIX_EPOCH - 1.5s` maps to `-2`. Values outside `i64` saturate.
#[must_use]
pub fn unix_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                whole.saturating_neg().saturating_sub(1)
            } else {
                whole.saturating_neg()
            }
        }
    }
}

/// The authenticated identity payload of a node.
///
/// Construction does not validate the node identifier length: receivers
/// rebuild credentials of whatever shape arrived and rely on the MAC for
/// integrity. Only issuance enforces [`NODE_ID_LEN`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential {
    node_id: Vec<u8>,
    operator_type: OperatorType,
    timestamp: i64,
}

impl Credential {
    /// Creates a credential from its parts.
    #[must_use]
    pub fn new(node_id: impl Into<Vec<u8>>, operator_type: OperatorType, timestamp: i64) -> Self {
        Self {
            node_id: node_id.into(),
            operator_type,
            timestamp,
        }
    }

    /// Returns the raw node identifier.
    #[must_use]
    pub fn node_id(&self) -> &[u8] {
        &self.node_id
    }

    /// Returns the operator classification.
    #[must_use]
    pub const fn operator_type(&self) -> OperatorType {
        self.operator_type
    }

    /// Returns the issuance time in Unix seconds.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the issuance time as a wall-clock instant, or `None` if the
    /// platform clock cannot represent it.
    #[must_use]
    pub fn issued_at(&self) -> Option<SystemTime> {
        let magnitude = Duration::from_secs(self.timestamp.unsigned_abs());
        if self.timestamp >= 0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        }
    }

    /// Returns the node identifier as `0x`-prefixed lowercase hex.
    #[must_use]
    pub fn node_id_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.node_id))
    }

    /// Canonical bytes fed to the MAC.
    #[must_use]
    pub fn canonical_bytes(&self) -> Vec<u8> {
        crate::codec::wire::encode_credential(self)
    }

    pub(crate) fn with_node_id(mut self, node_id: Vec<u8>) -> Self {
        self.node_id = node_id;
        self
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("node_id", &self.node_id_hex())
            .field("operator_type", &self.operator_type)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Credential({}, {}, t={})",
            self.node_id_hex(),
            self.operator_type,
            self.timestamp
        )
    }
}

/// A credential bundled with its MAC.
///
/// Holding an `AuthenticatedCredential` proves nothing by itself: values
/// decoded from the wire must go through
/// [`CredentialManager::verify`](crate::CredentialManager::verify) before the
/// credential is trusted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthenticatedCredential {
    credential: Credential,
    mac: Vec<u8>,
}

impl AuthenticatedCredential {
    /// Bundles a credential with a MAC received from elsewhere.
    #[must_use]
    pub fn from_parts(credential: Credential, mac: impl Into<Vec<u8>>) -> Self {
        Self {
            credential,
            mac: mac.into(),
        }
    }

    /// Returns the inner credential.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the raw MAC bytes.
    #[must_use]
    pub fn mac(&self) -> &[u8] {
        &self.mac
    }

    /// Consumes the value and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (Credential, Vec<u8>) {
        (self.credential, self.mac)
    }

    // Delegate accessors to the inner credential

    /// Returns the raw node identifier.
    #[must_use]
    pub fn node_id(&self) -> &[u8] {
        self.credential.node_id()
    }

    /// Returns the operator classification.
    #[must_use]
    pub const fn operator_type(&self) -> OperatorType {
        self.credential.operator_type()
    }

    /// Returns the issuance time in Unix seconds.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.credential.timestamp()
    }
}

impl fmt::Debug for AuthenticatedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedCredential")
            .field("credential", &self.credential)
            .field("mac", &MacPrefix(&self.mac))
            .finish()
    }
}

impl fmt::Display for AuthenticatedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthCred({}, {:?})", self.credential, MacPrefix(&self.mac))
    }
}

struct MacPrefix<'a>(&'a [u8]);

impl fmt::Debug for MacPrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [a, b, ..] => write!(f, "Mac({a:02x}{b:02x}...)"),
            _ => write!(f, "Mac({} bytes)", self.0.len()),
        }
    }
}
