//! Per-record orchestration: detect, then redact in place on a copy.

use piiscrub_core::Record;

use crate::detect::has_combinatorial_pii;
use crate::patterns::FieldKind;

/// Quasi-identifier fields that all get masked once the combinatorial rule
/// fires, whether or not standalone detection already touched them.
const QUASI_IDENTIFIERS: [FieldKind; 5] = [
    FieldKind::Name,
    FieldKind::Email,
    FieldKind::Address,
    FieldKind::IpAddress,
    FieldKind::DeviceId,
];

/// Redact one record. Returns the redacted copy and whether PII was found.
/// The input record is never mutated; the copy keeps its key set and order.
pub fn process_record(record: &Record) -> (Record, bool) {
    let mut redacted = record.clone();
    let mut is_pii = false;

    // Standalone detection and masking, field by field.
    for (key, value) in record {
        let Some(kind) = FieldKind::from_key(key) else {
            continue;
        };
        if kind.is_standalone_pii(value) {
            is_pii = true;
            redacted.insert(key.clone(), kind.mask(value));
        }
    }

    // Co-occurrence of quasi-identifiers masks the whole group. Masks are
    // idempotent, so re-masking a field already handled above is harmless.
    if has_combinatorial_pii(record) {
        is_pii = true;
        for kind in QUASI_IDENTIFIERS {
            if let Some(value) = record.get(kind.key()) {
                redacted.insert(kind.key().to_string(), kind.mask(value));
            }
        }
    }

    (redacted, is_pii)
}
