//! Position helpers for dense, zero-based ordered collections.
//!
//! Episode scripts, episode cuts, and storyboard cut images all maintain a
//! dense ordinal column (`order_index` / `cut_index`) that must equal the
//! item's array position after every insert, delete, or reorder. The SQL
//! side of that protocol lives in the repositories; the pure input checks
//! live here.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Resolve the effective insert position for a new item.
///
/// `len` is the current number of siblings. A missing position appends;
/// anything outside `[0, len]` is clamped into that range.
pub fn resolve_insert_index(requested: Option<i32>, len: i64) -> i32 {
    let len = len.min(i32::MAX as i64) as i32;
    match requested {
        None => len,
        Some(pos) => pos.clamp(0, len),
    }
}

/// Validate that `proposed` is exactly a permutation of `existing`.
///
/// A reorder request must list every current member of the collection
/// exactly once. Duplicates, unknown ids, and missing ids are all rejected
/// so the dense index invariant cannot be broken by a partial permutation.
pub fn validate_permutation(existing: &[DbId], proposed: &[DbId]) -> Result<(), CoreError> {
    if proposed.len() != existing.len() {
        return Err(CoreError::Validation(format!(
            "Reorder must list all {} items exactly once, got {}",
            existing.len(),
            proposed.len()
        )));
    }

    let mut seen = HashSet::with_capacity(proposed.len());
    for id in proposed {
        if !seen.insert(*id) {
            return Err(CoreError::Validation(format!(
                "Duplicate id {id} in reorder request"
            )));
        }
    }

    let known: HashSet<DbId> = existing.iter().copied().collect();
    for id in proposed {
        if !known.contains(id) {
            return Err(CoreError::Validation(format!(
                "Unknown id {id} in reorder request"
            )));
        }
    }

    Ok(())
}
