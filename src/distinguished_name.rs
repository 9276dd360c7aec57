//! # Distinguished Names
//!
//! Subject and issuer names of a certificate are reduced to the handful of
//! attributes people usually look at. Attributes are identified by the short
//! codes the cryptography backend reports (`CN`, `C`, `ST`, `L`, `O`, `OU`,
//! `emailAddress`, `unstructuredName`); anything else is dropped.

use std::collections::BTreeMap;
use std::fmt;

/// A name attribute the toolkit keeps
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameAttribute {
    CommonName,
    Country,
    StateOrProvince,
    Locality,
    Organization,
    OrganizationalUnit,
    EmailAddress,
    UnstructuredName,
}

impl NameAttribute {
    pub const ALL: [NameAttribute; 8] = [
        NameAttribute::CommonName,
        NameAttribute::Country,
        NameAttribute::StateOrProvince,
        NameAttribute::Locality,
        NameAttribute::Organization,
        NameAttribute::OrganizationalUnit,
        NameAttribute::EmailAddress,
        NameAttribute::UnstructuredName,
    ];

    /// The short code of the attribute, as found in certificates.
    pub fn code(&self) -> &'static str {
        match self {
            NameAttribute::CommonName => "CN",
            NameAttribute::Country => "C",
            NameAttribute::StateOrProvince => "ST",
            NameAttribute::Locality => "L",
            NameAttribute::Organization => "O",
            NameAttribute::OrganizationalUnit => "OU",
            NameAttribute::EmailAddress => "emailAddress",
            NameAttribute::UnstructuredName => "unstructuredName",
        }
    }

    /// Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.code() == code)
    }
}

impl fmt::Display for NameAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The recognized attributes of a subject or issuer name.
///
/// A `DistinguishedName` always holds at least one attribute: parsing a name
/// without any recognized attribute yields `None` instead of an empty value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistinguishedName {
    attributes: BTreeMap<NameAttribute, String>,
}

impl DistinguishedName {
    /// Builds a name from `(attribute type, value)` pairs in encoding order.
    ///
    /// Unrecognized attribute types are skipped. When an attribute occurs more
    /// than once, the last value wins.
    pub fn parse<I, T, V>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (T, V)>,
        T: AsRef<str>,
        V: Into<String>,
    {
        let mut attributes = BTreeMap::new();
        for (typ, value) in pairs {
            match NameAttribute::from_code(typ.as_ref()) {
                Some(attribute) => {
                    attributes.insert(attribute, value.into());
                }
                None => log::debug!("Skipping name attribute {}", typ.as_ref()),
            }
        }
        if attributes.is_empty() {
            None
        } else {
            Some(Self { attributes })
        }
    }

    /// Looks an attribute up by its short code, e.g. `"CN"`.
    pub fn get(&self, code: &str) -> Option<&str> {
        NameAttribute::from_code(code).and_then(|attribute| self.attribute(attribute))
    }

    pub fn attribute(&self, attribute: NameAttribute) -> Option<&str> {
        self.attributes.get(&attribute).map(String::as_str)
    }

    pub fn common_name(&self) -> Option<&str> {
        self.attribute(NameAttribute::CommonName)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false for a parsed name.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over `(short code, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(attribute, value)| (attribute.code(), value.as_str()))
    }

    /// Copies the attributes into a map keyed by short code.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(code, value)| (code.to_string(), value.to_string()))
            .collect()
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(code, value)| format!("{code}={value}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
