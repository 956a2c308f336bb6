//! Credential issuance and verification.
//!
//! [`CredentialManager`] holds the secret key (inside its [`MacPool`]) and is
//! the only place MACs are produced. It is `Send + Sync`: share one instance
//! across threads by reference or `Arc` without extra locking.
//!
//! # Protocol
//!
//! ```text
//! create(t, node_id, op):
//!   require len(node_id) == 20
//!   cred = Credential { node_id, op, unix_seconds(t) }
//!   mac  = HMAC-SHA256(key, canonical_bytes(cred))
//!
//! verify(auth):
//!   ok iff HMAC-SHA256(key, canonical_bytes(auth.credential)) == auth.mac
//!   (constant-time comparison)
//! ```
//!
//! Only the inner credential is authenticated; the outer `mac` field never
//! feeds the MAC.

use crate::config::ManagerConfig;
use crate::credential::{
    AuthenticatedCredential, Credential, NODE_ID_LEN, OperatorType, unix_seconds,
};
use crate::error::{CredentialError, CredentialResult};
use crate::security::key::SecretKey;
use crate::security::pool::MacPool;
use crate::tracing_compat::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

/// Counters for credential operations.
#[derive(Debug, Default)]
pub struct ManagerStats {
    /// Credentials issued.
    pub created: AtomicU64,
    /// Verifications that accepted the MAC.
    pub verified_ok: AtomicU64,
    /// Verifications that rejected the MAC.
    pub verified_fail: AtomicU64,
}

/// Issues and verifies authenticated credentials under one secret key.
///
/// # Example
///
/// ```
/// use node_credentials::{CredentialManager, OperatorType, SecretKey};
/// use std::time::SystemTime;
///
/// let manager = CredentialManager::new(SecretKey::new(vec![7u8; 32]).unwrap());
///
/// let node_id = [0x11u8; 20];
/// let auth = manager
///     .create(SystemTime::now(), &node_id, OperatorType::Solo)
///     .unwrap();
/// assert!(manager.verify(&auth).is_ok());
///
/// // Short node ids are refused at issuance.
/// assert!(manager.create(SystemTime::now(), &node_id[..19], OperatorType::Solo).is_err());
/// ```
#[derive(Debug)]
pub struct CredentialManager {
    pool: MacPool,
    stats: ManagerStats,
}

impl CredentialManager {
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new(key: SecretKey) -> Self {
        Self::with_config(key, &ManagerConfig::default())
    }

    /// Creates a manager with explicit tuning.
    #[must_use]
    pub fn with_config(key: SecretKey, config: &ManagerConfig) -> Self {
        Self {
            pool: MacPool::new(key, config.pool_capacity),
            stats: ManagerStats::default(),
        }
    }

    /// Issues a credential stamped with `issued_at` (truncated to Unix seconds).
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidNodeIdLength`] if `node_id` is not
    /// exactly [`NODE_ID_LEN`] bytes, or an internal error if the MAC cannot
    /// be computed.
    pub fn create(
        &self,
        issued_at: SystemTime,
        node_id: &[u8],
        operator_type: OperatorType,
    ) -> CredentialResult<AuthenticatedCredential> {
        self.create_at(unix_seconds(issued_at), node_id, operator_type)
    }

    /// Issues a credential stamped with a raw Unix-seconds timestamp.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create).
    pub fn create_at(
        &self,
        timestamp: i64,
        node_id: &[u8],
        operator_type: OperatorType,
    ) -> CredentialResult<AuthenticatedCredential> {
        if node_id.len() != NODE_ID_LEN {
            return Err(CredentialError::InvalidNodeIdLength {
                expected: NODE_ID_LEN,
                actual: node_id.len(),
            });
        }

        let credential = Credential::new(node_id, operator_type, timestamp);
        let mac = self.compute_mac(&credential)?;
        self.stats.created.fetch_add(1, Ordering::Relaxed);
        debug!(
            node_id = %credential.node_id_hex(),
            operator_type = %operator_type,
            timestamp,
            "credential created"
        );
        Ok(AuthenticatedCredential::from_parts(credential, mac))
    }

    /// Checks that the credential's MAC was produced under this manager's key.
    ///
    /// The credential is not modified. The failure carries no detail about
    /// which or how many bytes differed.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::MacMismatch`] if the MAC does not match, or
    /// an internal error if the MAC could not be recomputed.
    pub fn verify(&self, credential: &AuthenticatedCredential) -> CredentialResult<()> {
        let message = credential.credential().canonical_bytes();
        let matches = self.pool.acquire()?.verify(&message, credential.mac())?;

        if matches {
            self.stats.verified_ok.fetch_add(1, Ordering::Relaxed);
            debug!(
                node_id = %credential.credential().node_id_hex(),
                "credential verified"
            );
            Ok(())
        } else {
            self.stats.verified_fail.fetch_add(1, Ordering::Relaxed);
            warn!(
                node_id = %credential.credential().node_id_hex(),
                "credential MAC mismatch"
            );
            Err(CredentialError::MacMismatch)
        }
    }

    /// Computes the MAC of a credential's canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns an internal error if no MAC context can be obtained.
    pub fn compute_mac(&self, credential: &Credential) -> CredentialResult<Vec<u8>> {
        self.pool.acquire()?.compute(&credential.canonical_bytes())
    }

    /// Returns the operation counters.
    #[must_use]
    pub const fn stats(&self) -> &ManagerStats {
        &self.stats
    }

    /// Returns the MAC context pool.
    #[must_use]
    pub const fn pool(&self) -> &MacPool {
        &self.pool
    }
}
