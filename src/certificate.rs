//! # Certificate Inspection
//!
//! This module reads PEM-encoded X.509 certificates and reports the details
//! people usually check by hand: validity window, serial number, signature
//! algorithm, whether the certificate has expired, and the subject and issuer
//! names.
//!
//! ## Usage
//!
//! ```no_run
//! use ssl_tools::certificate::Certificate;
//!
//! let pem = std::fs::read_to_string("server.crt").unwrap();
//! let details = Certificate::from_pem(&pem).unwrap().details().unwrap();
//! println!("valid until {}, expired: {}", details.not_after, details.is_expired);
//! ```

use chrono::{DateTime, Utc};
use num_bigint::{BigInt, Sign};
use openssl::asn1::{Asn1Time, Asn1TimeRef};
use openssl::nid::Nid;
use openssl::x509::{X509NameRef, X509};

use crate::common::{SslToolsError, SslToolsResult, DATE_FORMAT};
use crate::distinguished_name::{DistinguishedName, NameAttribute};

/// What an inspection found out about a certificate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateDetails {
    /// Start of the validity window, formatted as `MM-DD-YYYY`.
    pub not_before: String,
    /// End of the validity window, formatted as `MM-DD-YYYY`.
    pub not_after: String,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    /// The serial number as encoded, which may be negative.
    pub serial_number: BigInt,
    /// Whether the inspection instant fell outside the validity window.
    pub is_expired: bool,
    /// Name of the signature algorithm, e.g. `sha256WithRSAEncryption`.
    pub signature_algorithm: String,
    pub subject: Option<DistinguishedName>,
    pub issuer: Option<DistinguishedName>,
}

/// A parsed X.509 certificate.
pub struct Certificate {
    x509: X509,
}

impl Certificate {
    /// Parses a PEM-encoded certificate.
    ///
    /// # Errors
    ///
    /// * `SslToolsError::CertificateParse` - If the text is not a PEM certificate
    pub fn from_pem(pem: &str) -> SslToolsResult<Self> {
        Self::try_from(pem.as_bytes())
    }

    /// Collects the details of the certificate, judging expiry against the
    /// system clock at the time of the call.
    pub fn details(&self) -> SslToolsResult<CertificateDetails> {
        self.details_at(Utc::now())
    }

    /// Collects the details of the certificate, judging expiry against `now`.
    pub fn details_at(&self, now: DateTime<Utc>) -> SslToolsResult<CertificateDetails> {
        let valid_from = self.valid_from()?;
        let valid_until = self.valid_until()?;
        Ok(CertificateDetails {
            not_before: valid_from.format(DATE_FORMAT).to_string(),
            not_after: valid_until.format(DATE_FORMAT).to_string(),
            valid_from,
            valid_until,
            serial_number: self.serial_number()?,
            is_expired: now < valid_from || now > valid_until,
            signature_algorithm: self.signature_algorithm()?,
            subject: self.subject()?,
            issuer: self.issuer()?,
        })
    }

    pub fn valid_from(&self) -> SslToolsResult<DateTime<Utc>> {
        asn1_time_to_datetime(self.x509.not_before())
    }

    pub fn valid_until(&self) -> SslToolsResult<DateTime<Utc>> {
        asn1_time_to_datetime(self.x509.not_after())
    }

    pub fn serial_number(&self) -> SslToolsResult<BigInt> {
        let serial = self.x509.serial_number().to_bn().map_err(parse_error)?;
        let sign = if serial.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Ok(BigInt::from_bytes_be(sign, &serial.to_vec()))
    }

    /// Algorithms without a registered name are reported by their dotted OID.
    pub fn signature_algorithm(&self) -> SslToolsResult<String> {
        let object = self.x509.signature_algorithm().object();
        let nid = object.nid();
        if nid == Nid::UNDEF {
            return Ok(object.to_string());
        }
        nid.long_name()
            .map(str::to_string)
            .map_err(parse_error)
    }

    pub fn subject(&self) -> SslToolsResult<Option<DistinguishedName>> {
        parse_name(self.x509.subject_name())
    }

    pub fn issuer(&self) -> SslToolsResult<Option<DistinguishedName>> {
        parse_name(self.x509.issuer_name())
    }
}

impl<'a> TryFrom<&'a [u8]> for Certificate {
    type Error = SslToolsError;

    fn try_from(pem: &'a [u8]) -> Result<Self, Self::Error> {
        let x509 = X509::from_pem(pem).map_err(|e| {
            log::error!("Certificate error. Is this a valid PEM file?");
            parse_error(e)
        })?;
        Ok(Self { x509 })
    }
}

fn parse_error(e: openssl::error::ErrorStack) -> SslToolsError {
    SslToolsError::CertificateParse(e.to_string())
}

fn asn1_time_to_datetime(time: &Asn1TimeRef) -> SslToolsResult<DateTime<Utc>> {
    let since_epoch = Asn1Time::from_unix(0)
        .and_then(|epoch| epoch.diff(time))
        .map_err(parse_error)?;
    let seconds = i64::from(since_epoch.days) * 86_400 + i64::from(since_epoch.secs);
    DateTime::<Utc>::from_timestamp(seconds, 0)
        .ok_or_else(|| SslToolsError::CertificateParse(format!("invalid time {time}")))
}

/// Only the values of recognized attributes are decoded.
fn parse_name(name: &X509NameRef) -> SslToolsResult<Option<DistinguishedName>> {
    let mut pairs = Vec::new();
    for entry in name.entries() {
        let code = entry.object().nid().short_name().unwrap_or("");
        if NameAttribute::from_code(code).is_none() {
            continue;
        }
        let value = entry.data().to_string().map_err(|e| {
            log::error!("Cannot decode name attribute {code}");
            parse_error(e)
        })?;
        pairs.push((code, value));
    }
    Ok(DistinguishedName::parse(pairs))
}

/// Parses a PEM certificate and reports its details, judging expiry against
/// the system clock.
pub fn get_certificate_details(pem: &str) -> SslToolsResult<CertificateDetails> {
    Certificate::from_pem(pem)?.details()
}

/// Same as [`get_certificate_details`], judging expiry against `now`.
pub fn get_certificate_details_at(
    pem: &str,
    now: DateTime<Utc>,
) -> SslToolsResult<CertificateDetails> {
    Certificate::from_pem(pem)?.details_at(now)
}
