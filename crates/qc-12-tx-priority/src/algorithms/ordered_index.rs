//! Ordered index over a pool snapshot
//!
//! Entries are kept in a sorted vector. Positions are found by binary search
//! with the comparator as the only key function, so a fully tied entry lands
//! on the existing slot and replaces it.

use super::comparators::{EntryComparator, PriorityComparator};
use crate::domain::entities::TxEntrySummary;
use std::cmp::Ordering;
use std::iter::Rev;
use std::slice;

/// Snapshot entries sorted ascending by `C`.
///
/// Immutable once built apart from [`OrderedIndex::replace_or_insert`].
/// Traversal borrows the index and can be restarted any number of times.
#[derive(Clone, Debug)]
pub struct OrderedIndex<C: EntryComparator = PriorityComparator> {
    comparator: C,
    entries: Vec<TxEntrySummary>,
}

impl<C: EntryComparator> OrderedIndex<C> {
    /// Creates an empty index.
    pub fn new(comparator: C) -> Self {
        Self {
            comparator,
            entries: Vec::new(),
        }
    }

    /// Builds an index from `snapshot`.
    ///
    /// Equivalent to calling `replace_or_insert` for every entry in order:
    /// of two fully tied entries the later one is kept.
    pub fn build<I>(snapshot: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = TxEntrySummary>,
    {
        let mut sorted: Vec<TxEntrySummary> = snapshot.into_iter().collect();
        // stable, so tied entries keep snapshot order
        sorted.sort_by(|a, b| comparator.compare(a, b));

        let mut entries: Vec<TxEntrySummary> = Vec::with_capacity(sorted.len());
        for entry in sorted {
            match entries.last_mut() {
                Some(last) if comparator.compare(last, &entry) == Ordering::Equal => *last = entry,
                _ => entries.push(entry),
            }
        }

        Self {
            comparator,
            entries,
        }
    }

    /// Inserts `entry`, or replaces the entry it fully ties with.
    ///
    /// Returns the replaced entry, if any.
    pub fn replace_or_insert(&mut self, entry: TxEntrySummary) -> Option<TxEntrySummary> {
        let comparator = &self.comparator;
        match self
            .entries
            .binary_search_by(|candidate| comparator.compare(candidate, &entry))
        {
            Ok(pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            Err(pos) => {
                self.entries.insert(pos, entry);
                None
            }
        }
    }

    /// Ascending traversal (lowest priority first).
    pub fn iter(&self) -> slice::Iter<'_, TxEntrySummary> {
        self.entries.iter()
    }

    /// Descending traversal (highest priority first), for greedy selection.
    pub fn iter_by_priority(&self) -> Rev<slice::Iter<'_, TxEntrySummary>> {
        self.entries.iter().rev()
    }

    /// Entry that sorts last.
    pub fn highest(&self) -> Option<&TxEntrySummary> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Consumes the index, returning entries in ascending order.
    pub fn into_vec(self) -> Vec<TxEntrySummary> {
        self.entries
    }
}

impl<'a, C: EntryComparator> IntoIterator for &'a OrderedIndex<C> {
    type Item = &'a TxEntrySummary;
    type IntoIter = slice::Iter<'a, TxEntrySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds an ordered index from `snapshot` under `comparator`.
pub fn build_ordered_index<C, I>(snapshot: I, comparator: C) -> OrderedIndex<C>
where
    C: EntryComparator,
    I: IntoIterator<Item = TxEntrySummary>,
{
    OrderedIndex::build(snapshot, comparator)
}
