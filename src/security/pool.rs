//! Reusable keyed HMAC-SHA256 contexts.
//!
//! Keying an HMAC context hashes the padded key into inner and outer states.
//! [`MacPool`] keeps already-keyed contexts around so concurrent issuance and
//! verification skip that work. The pool is a reuse optimization only:
//!
//! - [`MacPool::acquire`] never blocks. An empty pool builds a fresh context.
//! - A pooled context never absorbs message bytes. Each computation runs on a
//!   clone, which is dropped afterwards, so no request state survives into the
//!   next checkout.
//! - Releasing into a full pool discards the context.
//!
//! ```text
//! acquire ──► PooledMac ──► compute / verify (on a clone) ──► drop ──► release
//!    │                                                                   │
//!    └── pool empty: key a fresh context            pool full: discard ──┘
//! ```

use crate::error::{CredentialError, CredentialResult};
use crate::security::key::SecretKey;
use crate::tracing_compat::trace;
use crossbeam_queue::ArrayQueue;
use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Size of an HMAC-SHA256 tag in bytes.
pub const MAC_SIZE: usize = 32;

/// Default number of idle contexts kept by a pool.
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// A bounded, lock-free pool of keyed HMAC-SHA256 contexts.
pub struct MacPool {
    key: SecretKey,
    idle: ArrayQueue<HmacSha256>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MacPool {
    /// Creates an empty pool holding at most `capacity` idle contexts.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(key: SecretKey, capacity: usize) -> Self {
        Self {
            key,
            idle: ArrayQueue::new(capacity.max(1)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Checks out a keyed context.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a fresh context cannot be keyed.
    pub fn acquire(&self) -> CredentialResult<PooledMac<'_>> {
        let mac = if let Some(mac) = self.idle.pop() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            mac
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(capacity = self.idle.capacity(), "mac pool empty, keying fresh context");
            self.keyed()?
        };
        Ok(PooledMac {
            pool: self,
            mac: Some(mac),
        })
    }

    /// Returns the maximum number of idle contexts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.idle.capacity()
    }

    /// Returns the number of contexts currently parked in the pool.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Number of checkouts served from the pool.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of checkouts that had to key a fresh context.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn keyed(&self) -> CredentialResult<HmacSha256> {
        <HmacSha256 as KeyInit>::new_from_slice(self.key.as_bytes())
            .map_err(|e| CredentialError::internal(format!("keying MAC context failed: {e}")))
    }

    fn release(&self, mac: HmacSha256) {
        // Full pool: let the context drop.
        let _ = self.idle.push(mac);
    }
}

impl core::fmt::Debug for MacPool {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MacPool")
            .field("key", &self.key)
            .field("capacity", &self.capacity())
            .field("idle", &self.idle())
            .finish_non_exhaustive()
    }
}

/// A context checked out of a [`MacPool`]; returned to the pool on drop.
pub struct PooledMac<'a> {
    pool: &'a MacPool,
    mac: Option<HmacSha256>,
}

impl PooledMac<'_> {
    /// Computes the MAC of `message`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the context was already released.
    pub fn compute(&self, message: &[u8]) -> CredentialResult<Vec<u8>> {
        let mut mac = self.working_copy()?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    /// Checks `tag` against the MAC of `message`.
    ///
    /// The comparison is `Mac::verify_slice`, which runs in constant time
    /// over the tag bytes and does not short-circuit on the first mismatch.
    /// A tag of the wrong length is rejected.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the context was already released.
    pub fn verify(&self, message: &[u8], tag: &[u8]) -> CredentialResult<bool> {
        let mut mac = self.working_copy()?;
        mac.update(message);
        Ok(mac.verify_slice(tag).is_ok())
    }

    fn working_copy(&self) -> CredentialResult<HmacSha256> {
        self.mac
            .as_ref()
            .cloned()
            .ok_or_else(|| CredentialError::internal("MAC context already released"))
    }
}

impl Drop for PooledMac<'_> {
    fn drop(&mut self) {
        if let Some(mac) = self.mac.take() {
            self.pool.release(mac);
        }
    }
}
