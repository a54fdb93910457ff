//! Standard padded base64 over UTF-8 text

use crate::codec::CodecError;
use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;

pub fn encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode to bytes, then require those bytes to be UTF-8
pub fn decode(text: &str) -> Result<String, CodecError> {
    let bytes = STANDARD.decode(text.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
