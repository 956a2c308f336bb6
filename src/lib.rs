//! Node credentials: compact, HMAC-authenticated identity tokens for
//! operator network nodes.
//!
//! # Overview
//!
//! A [`Credential`] binds a 20-byte node address to an [`OperatorType`] and a
//! Unix-seconds timestamp. A [`CredentialManager`] holding a deployment-wide
//! [`SecretKey`] turns it into an [`AuthenticatedCredential`] by attaching an
//! HMAC-SHA256 tag over the credential's canonical protobuf bytes, and later
//! verifies such tags in constant time.
//!
//! Authenticated credentials travel in three encodings:
//!
//! - **Binary**: the canonical protobuf message ([`codec::wire`]).
//! - **Token pair**: base64url username (node id) plus password (credential
//!   without node id, and MAC), for HTTP Basic Auth style transports
//!   ([`codec::token`]).
//! - **JSON**: `{"node_id","timestamp","operator_type","mac"}`
//!   ([`codec::json`]).
//!
//! # Module Structure
//!
//! - [`credential`]: credential model and operator types
//! - [`codec`]: the three encodings and the [`Encoder`] / [`Decoder`] traits
//! - [`security`]: secret key, MAC context pool, credential manager
//! - [`error`](mod@error): error types
//! - [`config`]: manager tuning and optional TOML loading
//! - [`tracing_compat`]: optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use node_credentials::{AuthenticatedCredential, CredentialManager, OperatorType, SecretKey};
//! use std::time::SystemTime;
//!
//! let manager = CredentialManager::new(SecretKey::from_hex("0x2021222324252627").unwrap());
//! let auth = manager
//!     .create(SystemTime::now(), &[0x42; 20], OperatorType::RocketPool)
//!     .unwrap();
//!
//! let (username, password) = auth.to_token_pair().into_parts();
//! let received = AuthenticatedCredential::from_token_pair(&username, &password).unwrap();
//! assert!(manager.verify(&received).is_ok());
//! ```
//!
//! Expiry is not enforced here: callers compare
//! [`Credential::timestamp`] against their own policy.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod codec;
pub mod config;
pub mod credential;
pub mod error;
pub mod security;
pub mod tracing_compat;

#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

#[cfg(any(test, feature = "test-internals"))]
#[doc(hidden)]
pub use tracing as __tracing;

pub use codec::{BinaryCodec, Decoder, Encoder, JsonCodec, TokenPair, TokenPairCodec};
pub use config::{ConfigError, ManagerConfig};
pub use credential::{
    AuthenticatedCredential, Credential, NODE_ID_LEN, OperatorType, unix_seconds,
};
pub use error::{CredentialError, CredentialErrorKind, CredentialResult, DecodeError};
pub use security::{CredentialManager, MAC_SIZE, MacPool, ManagerStats, SecretKey};
