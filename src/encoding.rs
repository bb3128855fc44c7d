//! Standard padded base64 (RFC 4648 §4), the only text encoding the crate speaks.

use base64::{engine::general_purpose, Engine as _};

use crate::error::Error;

pub fn encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 text. Fails with `InvalidEncoding` on anything that is not
/// canonical padded base64.
pub fn decode(text: &str) -> Result<Vec<u8>, Error> {
    Ok(general_purpose::STANDARD.decode(text)?)
}
