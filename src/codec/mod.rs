//! External representations of authenticated credentials.
//!
//! Three independent, reversible encodings are provided:
//!
//! - [`wire`]: canonical protobuf bytes. The inner credential's encoding is
//!   the MAC input; the outer message is a compact binary token.
//! - [`token`]: a username/password pair for basic-auth style transport.
//!   The username carries the node id, the password everything else.
//! - [`json`]: a human-inspectable document.
//!
//! Each encoding has a unit codec implementing [`Encoder`] and [`Decoder`],
//! plus inherent shortcuts on [`AuthenticatedCredential`].
//!
//! [`AuthenticatedCredential`]: crate::AuthenticatedCredential

pub mod decoder;
pub mod encoder;
pub mod json;
pub mod token;
pub mod wire;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use json::JsonCodec;
pub use token::{TokenPair, TokenPairCodec};
pub use wire::BinaryCodec;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;

/// URL-safe base64 with `=` padding.
pub(crate) fn base64url_encode(bytes: &[u8]) -> String {
    URL_SAFE.encode(bytes)
}

pub(crate) fn base64url_decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE.decode(text)
}
