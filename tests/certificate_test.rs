use chrono::{DateTime, TimeZone, Utc};
use num_bigint::BigInt;

use ssl_tools::common::SslToolsResult;
use ssl_tools::{
    get_certificate_details, get_certificate_details_at, Certificate, NameAttribute, SslToolsError,
};

const CERTIFICATE_PEM: &str = include_str!("fixtures/certificate.pem");
const DOMAIN_COMPONENTS_PEM: &str = include_str!("fixtures/domain_components.pem");
const MULTI_ATTRIBUTE_PEM: &str = include_str!("fixtures/multi_attribute.pem");
const EMBEDDED_NUL_PEM: &str = include_str!("fixtures/embedded_nul.pem");

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .expect("valid test instant")
}

#[test]
fn test_get_certificate_details() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details_at(CERTIFICATE_PEM.trim(), instant(2024, 1, 1, 0, 0, 0))?;
    assert_eq!("05-19-2028", details.not_after);
    assert_eq!("05-22-2018", details.not_before);
    assert_eq!(BigInt::from(-485227429), details.serial_number);
    assert!(!details.is_expired);
    assert_eq!("sha256WithRSAEncryption", details.signature_algorithm);
    assert_eq!(instant(2018, 5, 22, 14, 13, 5), details.valid_from);
    assert_eq!(instant(2028, 5, 19, 14, 13, 5), details.valid_until);
    Ok(())
}

#[test]
fn test_get_certificate_details_subject() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(CERTIFICATE_PEM)?;
    let subject = details.subject.expect("subject attributes");
    assert_eq!(Some("San Antonio"), subject.get("L"));
    assert_eq!(Some("Texas"), subject.get("ST"));
    assert_eq!(Some("US"), subject.get("C"));
    assert_eq!(Some("MyCompany"), subject.get("O"));
    assert_eq!(Some("mitm.domain.int"), subject.get("CN"));
    assert_eq!(Some("mitm.domain.int"), subject.get("unstructuredName"));
    assert_eq!(None, subject.get("OU"));
    assert_eq!(6, subject.len());
    Ok(())
}

#[test]
fn test_self_signed_issuer() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(CERTIFICATE_PEM)?;
    assert!(details.issuer.is_some());
    assert_eq!(details.subject, details.issuer);
    Ok(())
}

#[test]
fn test_live_expiry_matches_validity_window() -> SslToolsResult<()> {
    setup();
    let before = Utc::now();
    let details = get_certificate_details(CERTIFICATE_PEM)?;
    let after = Utc::now();
    if after < details.valid_until && before > details.valid_from {
        assert!(!details.is_expired);
    }
    if before > details.valid_until {
        assert!(details.is_expired);
    }
    Ok(())
}

#[test]
fn test_expiry_against_fixed_instants() -> SslToolsResult<()> {
    setup();
    let certificate = Certificate::from_pem(CERTIFICATE_PEM)?;
    let expired_at = |now| certificate.details_at(now).map(|details| details.is_expired);

    assert!(expired_at(instant(2018, 5, 22, 14, 13, 4))?);
    assert!(!expired_at(instant(2018, 5, 22, 14, 13, 5))?);
    assert!(!expired_at(instant(2023, 6, 30, 12, 0, 0))?);
    assert!(!expired_at(instant(2028, 5, 19, 14, 13, 5))?);
    assert!(expired_at(instant(2028, 5, 19, 14, 13, 6))?);
    assert!(expired_at(instant(2031, 1, 1, 0, 0, 0))?);
    Ok(())
}

#[test]
fn test_unrecognized_names_are_absent() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(DOMAIN_COMPONENTS_PEM)?;
    assert_eq!(None, details.subject);
    assert_eq!(None, details.issuer);
    assert_eq!(BigInt::from(4096), details.serial_number);
    assert_eq!("ecdsa-with-SHA256", details.signature_algorithm);
    Ok(())
}

#[test]
fn test_repeated_attribute_keeps_last_value() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(MULTI_ATTRIBUTE_PEM)?;
    let subject = details.subject.expect("subject attributes");
    assert_eq!(Some("second"), subject.attribute(NameAttribute::OrganizationalUnit));
    assert_eq!(Some("ops@acme.test"), subject.get("emailAddress"));
    assert_eq!(Some("acme.test"), subject.common_name());
    assert_eq!(Some("DE"), subject.get("C"));
    assert_eq!(Some("Acme"), subject.get("O"));
    assert_eq!(5, subject.len());
    Ok(())
}

#[test]
fn test_attribute_with_embedded_nul_is_kept_whole() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(EMBEDDED_NUL_PEM)?;
    let subject = details.subject.expect("subject attributes");
    assert_eq!(Some("good.test\0evil.test"), subject.common_name());
    assert_eq!(Some("Acme"), subject.get("O"));
    assert_eq!(BigInt::from(77), details.serial_number);
    Ok(())
}

#[test]
fn test_large_serial_number() -> SslToolsResult<()> {
    setup();
    let details = get_certificate_details(MULTI_ATTRIBUTE_PEM)?;
    let expected: BigInt = "604462909807314587353087".parse().expect("valid integer");
    assert_eq!(expected, details.serial_number);
    Ok(())
}

#[test]
fn test_invalid_certificate() {
    setup();
    let truncated = &CERTIFICATE_PEM[..CERTIFICATE_PEM.len() / 2];
    for text in ["", "not a certificate", truncated, include_str!("fixtures/key.pem")] {
        assert!(
            matches!(
                get_certificate_details(text),
                Err(SslToolsError::CertificateParse(_))
            ),
            "{text:?} should not parse"
        );
    }
}
