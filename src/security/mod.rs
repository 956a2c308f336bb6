//! Credential authentication.
//!
//! HMAC-SHA256 over the canonical credential bytes, keyed by a single
//! deployment secret.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │               CredentialManager               │
//! │  • create(t, node_id, op) → Authenticated     │
//! │  • verify(auth) → Result<(), CredentialError> │
//! │                      │                        │
//! │                      ▼                        │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │                 MacPool                 │  │
//! │  │  • SecretKey (zeroed on drop)           │  │
//! │  │  • idle keyed HMAC-SHA256 contexts      │  │
//! │  └─────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! # Failure modes
//!
//! Verification fails closed. A mismatched MAC is
//! [`CredentialError::MacMismatch`](crate::CredentialError::MacMismatch);
//! a failure to compute the MAC at all is an internal error and is never
//! reported as a mismatch.

pub mod key;
pub mod manager;
pub mod pool;

pub use key::{RECOMMENDED_KEY_SIZE, SecretKey};
pub use manager::{CredentialManager, ManagerStats};
pub use pool::{DEFAULT_POOL_CAPACITY, MAC_SIZE, MacPool, PooledMac};
