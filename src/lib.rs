//! # ssl-tools
//!
//! Helpers for common manipulations of TLS certificate material:
//!
//! - [`decode_pkcs12_b64`] turns a base64 (optionally `-----BEGIN PKCS12-----`
//!   wrapped) keystore into its binary form
//! - [`pkcs12_to_pem`] opens a PKCS12 keystore with its passphrase and exports
//!   the private key and certificate as PEM text
//! - [`get_certificate_details`] reports the validity window, serial number,
//!   signature algorithm, expiry and subject/issuer names of a PEM certificate
//!
//! Every operation is a stateless function over its arguments and reports
//! failures through [`SslToolsError`].
//!
//! ```no_run
//! let text = std::fs::read_to_string("identity.p12.b64").unwrap();
//! let keystore = ssl_tools::decode_pkcs12_b64(&text).unwrap();
//! let pair = ssl_tools::pkcs12_to_pem(&keystore, "passphrase").unwrap();
//! let details = ssl_tools::get_certificate_details(&pair.certificate).unwrap();
//! println!("{} expires on {}", details.serial_number, details.not_after);
//! ```

pub mod certificate;
pub mod common;
pub mod distinguished_name;
pub mod encoding;
pub mod keystore;

pub use certificate::{
    get_certificate_details, get_certificate_details_at, Certificate, CertificateDetails,
};
pub use common::{KeystoreFailure, SslToolsError, SslToolsResult};
pub use distinguished_name::{DistinguishedName, NameAttribute};
pub use encoding::decode_pkcs12_b64;
pub use keystore::{pkcs12_to_pem, KeyCertificatePair, Keystore};
