//! Peer text codecs
//!
//! Thin pure functions around the RustCrypto digests and the `base64` crate,
//! plus two table-driven ciphers:
//! - [`hash`]: one digest function per supported algorithm, and PBKDF2-HMAC
//! - [`base64`]: standard padded base64 over UTF-8 text
//! - [`morse`]: International Morse encode/decode
//! - [`rot13`]: Caesar rotation by 13 over ASCII letters
//!
//! Digests are returned as uppercase hex.

pub mod base64;
pub mod hash;
pub mod morse;
pub mod rot13;

use thiserror::Error;

pub use hash::{algorithms, hash, pbkdf2_hmac, HashAlgorithm, HASH_ALGORITHMS};
pub use rot13::rot13;

/// Codec errors
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("hash algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    #[error("invalid {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("invalid base64: {0}")]
    Base64(#[from] ::base64::DecodeError),

    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("no Morse code for character {0:?}")]
    UnknownMorseChar(char),

    #[error("unknown Morse code {0:?}")]
    UnknownMorseCode(String),
}

/// Uppercase hex rendering used by every digest function
pub(crate) fn to_hex_upper(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{:02X}", byte);
    }
    out
}
