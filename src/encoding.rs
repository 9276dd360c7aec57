//! # Base64 Keystore Decoding
//!
//! Keystores are often shipped as text: the binary PKCS12 structure encoded in
//! base64, optionally wrapped between `-----BEGIN PKCS12-----` and
//! `-----END PKCS12-----` lines and broken into several indented lines.

use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::{alphabet, Engine};

use crate::common::{SslToolsError, SslToolsResult, PKCS12_BEGIN_MARKER, PKCS12_END_MARKER};

/// Standard alphabet with padding; non-zero trailing bits are tolerated.
const KEYSTORE_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Decodes a base64-encoded PKCS12 keystore into its binary form.
///
/// The marker lines are removed wherever they occur in the text, and any
/// whitespace left in the body is ignored.
///
/// # Errors
///
/// * `SslToolsError::Decoding` - If the remaining text is empty or not valid base64
pub fn decode_pkcs12_b64(text: &str) -> SslToolsResult<Vec<u8>> {
    let body: String = text
        .replace(PKCS12_BEGIN_MARKER, "")
        .replace(PKCS12_END_MARKER, "")
        .split_whitespace()
        .collect();
    if body.is_empty() {
        log::error!("No base64 content found in keystore text");
        return Err(SslToolsError::Decoding("empty input".into()));
    }
    let bytes = KEYSTORE_ENGINE.decode(body.as_bytes()).map_err(|e| {
        log::error!("Base64 conversion error: {e}");
        SslToolsError::from(e)
    })?;
    log::debug!("Decoded {} keystore bytes", bytes.len());
    Ok(bytes)
}
