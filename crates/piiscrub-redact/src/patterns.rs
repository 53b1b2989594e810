//! Standalone PII patterns and the recognized field vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use piiscrub_core::text_of;

// Compiled once, reused. Anchored so a match must span the whole value.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static AADHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
// First letter excludes Q, X and Z, matching the passport series in use.
static PASSPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-PR-WYa-pr-wy][0-9]{7}$").unwrap());
static UPI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,}@[A-Za-z]{2,}$").unwrap());

/// The nine field names the redactor recognizes. Any other key is opaque
/// passthrough data, never inspected or masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Phone,
    Aadhar,
    Passport,
    UpiId,
    Name,
    Email,
    Address,
    IpAddress,
    DeviceId,
}

impl FieldKind {
    /// Map a record key to a field kind.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "phone" => Some(Self::Phone),
            "aadhar" => Some(Self::Aadhar),
            "passport" => Some(Self::Passport),
            "upi_id" => Some(Self::UpiId),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            "ip_address" => Some(Self::IpAddress),
            "device_id" => Some(Self::DeviceId),
            _ => None,
        }
    }

    /// The record key this kind corresponds to.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhar => "aadhar",
            Self::Passport => "passport",
            Self::UpiId => "upi_id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::IpAddress => "ip_address",
            Self::DeviceId => "device_id",
        }
    }

    /// Full-match pattern for fields whose value alone is PII.
    fn standalone_pattern(&self) -> Option<&'static Regex> {
        match self {
            Self::Phone => Some(&PHONE_RE),
            Self::Aadhar => Some(&AADHAR_RE),
            Self::Passport => Some(&PASSPORT_RE),
            Self::UpiId => Some(&UPI_RE),
            _ => None,
        }
    }

    /// True iff this field's value, on its own, flags the record as PII.
    pub fn is_standalone_pii(&self, value: &Value) -> bool {
        let Some(pattern) = self.standalone_pattern() else {
            return false;
        };
        match text_of(value) {
            Some(text) => pattern.is_match(&text),
            None => false,
        }
    }
}

/// True iff `key` names a standalone-PII field and `value` fully matches its
/// pattern. Unknown keys and textless values return false. No side effects.
pub fn is_standalone_pii(key: &str, value: &Value) -> bool {
    FieldKind::from_key(key).is_some_and(|kind| kind.is_standalone_pii(value))
}
