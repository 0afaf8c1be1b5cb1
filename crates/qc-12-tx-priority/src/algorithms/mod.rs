//! Algorithms module for Transaction Priority
//!
//! Contains:
//! - Ancestor fee and ancestor fee-rate comparators
//! - Ordered index construction

pub mod comparators;
pub mod ordered_index;

pub use comparators::{
    AncestorFeeComparator, AncestorFeeRateComparator, EntryComparator, PriorityComparator,
};
pub use ordered_index::{build_ordered_index, OrderedIndex};
