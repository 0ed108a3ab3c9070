//! Deterministic content hash of a funding table.
//!
//! Exports carry this digest so a saved report can be traced back to the
//! exact data it was computed from.

use crate::domain::InvestmentRecord;

/// Compute a BLAKE3 hex digest over every record, in table order.
///
/// Fields are length-prefixed so `("ab", "c")` and `("a", "bc")` hash
/// differently. Missing dates and amounts hash to a distinct tag.
pub fn dataset_fingerprint(records: &[InvestmentRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(records.len() as u64).to_le_bytes());

    for r in records {
        match r.date {
            Some(d) => {
                hasher.update(&[1]);
                hasher.update(d.to_string().as_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
        for field in [&r.startup, &r.investors, &r.vertical, &r.city, &r.round] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        match r.amount {
            Some(a) => {
                hasher.update(&[1]);
                hasher.update(&a.to_le_bytes());
            }
            None => {
                hasher.update(&[0]);
            }
        }
    }

    hasher.finalize().to_hex().to_string()
}
