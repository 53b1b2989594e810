//! PII detection and redaction core.
//!
//! Covers regex-based standalone detection over a fixed field vocabulary
//! (phone, aadhar, passport, UPI handle), quasi-identifier co-occurrence
//! detection (name/email/address/device signals), and field-specific masking
//! with fail-safe degradation to a fixed sentinel.

pub mod detect;
pub mod mask;
pub mod patterns;
pub mod process;

pub use detect::has_combinatorial_pii;
pub use mask::{redact_value, MaskError, SENTINEL};
pub use patterns::{is_standalone_pii, FieldKind};
pub use process::process_record;
