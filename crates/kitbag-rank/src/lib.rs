//! Ranked-list maintenance and small sequence utilities.
//!
//! The centerpiece is [`RankedList`]: a sequence of scored, identity-bearing
//! items kept in ascending score order with at most one entry per identity.
//! Callers batch insertions through [`RankedList::insert_or_replace`] and then
//! truncate to a fixed top-N with [`RankedList::truncate`], so no re-sort is
//! ever needed.
//!
//! # Example
//!
//! ```
//! use kitbag_rank::{RankedList, ScoredEntry};
//!
//! let mut list = RankedList::new();
//! list.insert_or_replace(ScoredEntry::new("a", 1));
//! list.insert_or_replace(ScoredEntry::new("b", 3));
//! // Better score for an existing identity replaces the old entry.
//! list.insert_or_replace(ScoredEntry::new("a", 5));
//!
//! assert_eq!(list.as_slice(), [ScoredEntry::new("b", 3), ScoredEntry::new("a", 5)]);
//! ```

pub use self::diff::multiset_difference;
pub use self::list::{Ranked, RankedList, ScoredEntry};

mod diff;
mod list;
