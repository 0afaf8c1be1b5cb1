//! Domain invariants for Transaction Priority
//!
//! Checked in debug builds after every index build and by the test suites.

use super::entities::TxEntrySummary;
use std::cmp::Ordering;
use std::collections::HashSet;

/// INVARIANT-1: Strict Order
/// Every adjacent pair of the traversal is strictly ascending under `compare`.
pub fn invariant_total_order<F>(ordered: &[TxEntrySummary], compare: F) -> bool
where
    F: Fn(&TxEntrySummary, &TxEntrySummary) -> Ordering,
{
    ordered
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) == Ordering::Less)
}

/// INVARIANT-2: Complete Coverage
/// Every snapshot entry is represented in the traversal by an entry it fully
/// ties with under `compare`, and the traversal holds only snapshot entries,
/// each at most once.
///
/// `ordered` must already satisfy INVARIANT-1. A hash repeated in the
/// snapshot with different package totals stays in the traversal twice.
pub fn invariant_complete_coverage<F>(
    snapshot: &[TxEntrySummary],
    ordered: &[TxEntrySummary],
    compare: F,
) -> bool
where
    F: Fn(&TxEntrySummary, &TxEntrySummary) -> Ordering,
{
    let expected: HashSet<&TxEntrySummary> = snapshot.iter().collect();

    let mut seen: HashSet<&TxEntrySummary> = HashSet::with_capacity(ordered.len());
    for entry in ordered {
        if !expected.contains(entry) || !seen.insert(entry) {
            return false; // Foreign or duplicate entry in traversal
        }
    }

    snapshot.iter().all(|entry| {
        ordered
            .binary_search_by(|candidate| compare(candidate, entry))
            .is_ok()
    })
}
