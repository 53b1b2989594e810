//! Field-specific masking strategies.
//!
//! Each strategy is a pure function of the value. Shape failures surface as
//! `MaskError` and are recovered locally to the sentinel, so a malformed
//! value can never leak through partially masked. All lengths and offsets
//! are counted in characters, not bytes.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use piiscrub_core::text_of;

use crate::patterns::FieldKind;

/// Placeholder for values that cannot be safely partially revealed.
pub const SENTINEL: &str = "[REDACTED_PII]";

const MASK_CHAR: char = 'X';

/// A value that does not fit the shape its masking strategy expects.
#[derive(Error, Debug)]
pub enum MaskError {
    #[error("value does not fit the {0} shape")]
    Shape(&'static str),
}

impl FieldKind {
    /// Mask `value` with this field's strategy. Shape mismatches degrade to
    /// the sentinel; `name` and `address` have pass-through edge cases of
    /// their own (see the individual strategies).
    pub fn mask(&self, value: &Value) -> Value {
        match self {
            Self::Phone => recover(*self, mask_phone(value)),
            Self::Aadhar => recover(*self, mask_aadhar(value)),
            Self::Passport => recover(*self, mask_passport(value)),
            Self::UpiId => recover(*self, mask_upi(value)),
            Self::Name => mask_name(value),
            Self::Email => recover(*self, mask_email(value)),
            Self::Address => mask_address(value),
            Self::IpAddress | Self::DeviceId => Value::String(SENTINEL.to_string()),
        }
    }
}

/// Mask `value` according to `key`'s strategy. Unknown keys pass through.
pub fn redact_value(key: &str, value: &Value) -> Value {
    match FieldKind::from_key(key) {
        Some(kind) => kind.mask(value),
        None => value.clone(),
    }
}

fn recover(kind: FieldKind, result: Result<String, MaskError>) -> Value {
    match result {
        Ok(masked) => Value::String(masked),
        Err(err) => {
            debug!(field = kind.key(), %err, "masking degraded to sentinel");
            Value::String(SENTINEL.to_string())
        }
    }
}

/// Keep `front` and `back` characters of a value that must be exactly `len`
/// characters long, masking the middle.
fn mask_window(text: &str, len: usize, front: usize, back: usize) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != len {
        return None;
    }
    let mut out: String = chars[..front].iter().collect();
    out.extend(std::iter::repeat(MASK_CHAR).take(len - front - back));
    out.extend(&chars[len - back..]);
    Some(out)
}

/// Keep the first character, mask the rest. Single characters pass through.
fn mask_leading(part: &str) -> String {
    let n = part.chars().count();
    if n <= 1 {
        return part.to_string();
    }
    // n > 1 implies the part is non-empty.
    let first = part.chars().next().unwrap();
    let mut out = String::with_capacity(part.len());
    out.push(first);
    out.extend(std::iter::repeat(MASK_CHAR).take(n - 1));
    out
}

/// Phone: 10 characters, keep 2 + 2, mask the middle 6.
pub fn mask_phone(value: &Value) -> Result<String, MaskError> {
    let text = text_of(value).ok_or(MaskError::Shape("phone"))?;
    mask_window(&text, 10, 2, 2).ok_or(MaskError::Shape("phone"))
}

/// Aadhar: 12 characters, keep 4 + 4, mask the middle 4.
pub fn mask_aadhar(value: &Value) -> Result<String, MaskError> {
    let text = text_of(value).ok_or(MaskError::Shape("aadhar"))?;
    mask_window(&text, 12, 4, 4).ok_or(MaskError::Shape("aadhar"))
}

/// Passport: a letter followed by 7 digits; keep the letter only.
pub fn mask_passport(value: &Value) -> Result<String, MaskError> {
    let text = text_of(value).ok_or(MaskError::Shape("passport"))?;
    let chars: Vec<char> = text.chars().collect();
    if chars.len() == 8 && chars[1..].iter().all(|c| c.is_ascii_digit()) {
        Ok(format!("{}XXXXXXX", chars[0]))
    } else {
        Err(MaskError::Shape("passport"))
    }
}

/// Name: keep the first letter of each whitespace-separated part. Non-string
/// and empty values pass through unchanged.
pub fn mask_name(value: &Value) -> Value {
    let Value::String(name) = value else {
        return value.clone();
    };
    if name.is_empty() {
        return value.clone();
    }
    let parts: Vec<String> = name.split_whitespace().map(mask_leading).collect();
    Value::String(parts.join(" "))
}

/// user@domain with exactly one `@` and a non-empty user: keep the user's
/// first character and the whole domain.
fn mask_handle(text: &str, shape: &'static str) -> Result<String, MaskError> {
    let (user, domain) = text.split_once('@').ok_or(MaskError::Shape(shape))?;
    if domain.contains('@') {
        return Err(MaskError::Shape(shape));
    }
    let mut user_chars = user.chars();
    let first = user_chars.next().ok_or(MaskError::Shape(shape))?;
    let mut out = String::with_capacity(text.len());
    out.push(first);
    out.extend(std::iter::repeat(MASK_CHAR).take(user_chars.count()));
    out.push('@');
    out.push_str(domain);
    Ok(out)
}

pub fn mask_email(value: &Value) -> Result<String, MaskError> {
    let text = text_of(value).ok_or(MaskError::Shape("email"))?;
    mask_handle(&text, "email")
}

pub fn mask_upi(value: &Value) -> Result<String, MaskError> {
    let text = text_of(value).ok_or(MaskError::Shape("upi"))?;
    mask_handle(&text, "upi")
}

/// Address: with commas, mask each comma-separated token by its TRIMMED
/// length while keeping the original token's first character, so leading
/// whitespace collapses into the mask. Without commas, mask the whole value
/// untrimmed. Empty values pass through; textless values redact fully.
pub fn mask_address(value: &Value) -> Value {
    let Some(text) = text_of(value) else {
        debug!("address value has no text form, redacting fully");
        return Value::String(SENTINEL.to_string());
    };
    if text.is_empty() {
        return Value::String(text);
    }
    let masked = if text.contains(',') {
        text.split(',')
            .map(mask_address_token)
            .collect::<Vec<String>>()
            .join(",")
    } else {
        mask_leading(&text)
    };
    Value::String(masked)
}

fn mask_address_token(token: &str) -> String {
    let trimmed_len = token.trim().chars().count();
    if trimmed_len <= 1 {
        return token.to_string();
    }
    // trimmed_len > 1 implies the token is non-empty.
    let first = token.chars().next().unwrap();
    let mut out = String::with_capacity(trimmed_len);
    out.push(first);
    out.extend(std::iter::repeat(MASK_CHAR).take(trimmed_len - 1));
    out
}
