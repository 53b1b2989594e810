//! Combinatorial (quasi-identifier) PII detection.
//!
//! A name or email alone is often non-identifying, but two or more
//! quasi-identifying categories in one record materially increase
//! re-identification risk. Presence of a key is what counts here, not
//! whether its value is well-formed.

use piiscrub_core::Record;

/// True when two or more quasi-identifier categories are present in the
/// record. `ip_address` and `device_id` together form a single category.
pub fn has_combinatorial_pii(record: &Record) -> bool {
    let categories = [
        record.contains_key("name"),
        record.contains_key("email"),
        record.contains_key("address"),
        record.contains_key("ip_address") || record.contains_key("device_id"),
    ];
    categories.into_iter().filter(|present| *present).count() >= 2
}
