//! # Common Types and Constants
//!
//! This module provides the types shared by every part of the toolkit:
//! - The crate-wide error type and result alias
//! - Constants describing the text formats the toolkit reads and writes

use std::fmt;

/// Marker line that usually opens a base64-encoded PKCS12 blob.
pub const PKCS12_BEGIN_MARKER: &str = "-----BEGIN PKCS12-----";
/// Marker line that usually closes a base64-encoded PKCS12 blob.
pub const PKCS12_END_MARKER: &str = "-----END PKCS12-----";
/// Format used for the calendar dates reported in certificate details.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

pub type SslToolsResult<R> = Result<R, SslToolsError>;

/// Which step of opening a keystore went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeystoreFailure {
    /// The bytes are not a PKCS12 structure.
    Malformed,
    /// The passphrase is wrong or the encrypted content is corrupt.
    Decryption,
    MissingPrivateKey,
    MissingCertificate,
    /// The key or a certificate could not be serialized to PEM.
    Encoding,
}

impl fmt::Display for KeystoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            KeystoreFailure::Malformed => "malformed keystore",
            KeystoreFailure::Decryption => "cannot decrypt keystore",
            KeystoreFailure::MissingPrivateKey => "no private key in keystore",
            KeystoreFailure::MissingCertificate => "no certificate in keystore",
            KeystoreFailure::Encoding => "cannot encode keystore content",
        };
        f.write_str(text)
    }
}

/// Represents errors that can occur while handling certificate material
///
/// Every operation of the toolkit reports its failure through one of these
/// variants, so callers can always tell "no data" apart from "an error occurred".
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SslToolsError {
    #[error("Invalid base64 keystore: {0}")]
    Decoding(String),
    #[error("Keystore error ({0}): {1}")]
    Keystore(KeystoreFailure, String),
    #[error("Invalid certificate: {0}")]
    CertificateParse(String),
}

impl SslToolsError {
    /// Returns the keystore failure kind, if this is a keystore error.
    pub fn keystore_failure(&self) -> Option<KeystoreFailure> {
        match self {
            SslToolsError::Keystore(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for SslToolsError {
    fn from(e: base64::DecodeError) -> Self {
        SslToolsError::Decoding(format!("{:?}", e))
    }
}
