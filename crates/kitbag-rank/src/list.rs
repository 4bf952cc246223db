use std::cmp::Ordering;
use std::slice;

/// Item relations used by [`RankedList`].
///
/// Identity and score are deliberately kept as two separate relations:
/// `identity_eq` decides whether two items refer to the same logical entity
/// (typically a key comparison, score excluded), while `score_cmp` decides
/// which of two items is better and where an item sorts. Conflating the two
/// behind one operator set is how subtle dedup bugs happen.
pub trait Ranked {
    /// Whether `self` and `other` are the same logical entity, independent of
    /// score.
    fn identity_eq(&self, other: &Self) -> bool;

    /// Score comparison; `Ordering::Greater` means `self` is the better item.
    fn score_cmp(&self, other: &Self) -> Ordering;
}

/// A sequence of items kept ascending by score with at most one entry per
/// identity.
///
/// The list itself is unbounded; callers apply a top-N bound with
/// [`truncate`](RankedList::truncate) once a batch of insertions is done.
/// Sorted order makes that an O(1) slice instead of a re-sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedList<T> {
    items: Vec<T>,
}

impl<T> Default for RankedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RankedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Wraps an existing sequence. The caller guarantees `items` is already
    /// ascending by score and free of identity duplicates.
    pub fn from_sorted(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Top-N truncation: keeps the first `n` elements, discards the rest.
    pub fn truncate(&mut self, n: usize) {
        self.items.truncate(n);
    }
}

impl<T: Ranked> RankedList<T> {
    /// Inserts `item`, replacing a same-identity entry only if `item` scores
    /// strictly better.
    ///
    /// If an entry with the same identity exists and scores at least as high,
    /// the list is left untouched. Otherwise the old entry (if any) is removed
    /// and `item` lands at its sorted position, after any equal-scoring
    /// elements already present. Always succeeds.
    pub fn insert_or_replace(&mut self, item: T) {
        // Identity lookup stays a linear scan: identity equality need not
        // agree with score order, so a binary search cannot find the match.
        if let Some(i) = self.items.iter().position(|x| x.identity_eq(&item)) {
            if item.score_cmp(&self.items[i]) != Ordering::Greater {
                return;
            }
            self.items.remove(i);
        }
        let at = self
            .items
            .partition_point(|x| x.score_cmp(&item) != Ordering::Greater);
        self.items.insert(at, item);
    }
}

impl<'a, T> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for RankedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A `(key, score)` pair with identity on the key and ordering on the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredEntry<K, S> {
    pub key: K,
    pub score: S,
}

impl<K, S> ScoredEntry<K, S> {
    pub fn new(key: K, score: S) -> Self {
        Self { key, score }
    }
}

impl<K: PartialEq, S: PartialOrd> Ranked for ScoredEntry<K, S> {
    fn identity_eq(&self, other: &Self) -> bool {
        self.key == other.key
    }

    fn score_cmp(&self, other: &Self) -> Ordering {
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &'static str, score: i32) -> ScoredEntry<&'static str, i32> {
        ScoredEntry::new(key, score)
    }

    fn assert_sorted_unique(list: &RankedList<ScoredEntry<&'static str, i32>>) {
        let items = list.as_slice();
        for pair in items.windows(2) {
            assert!(pair[0].score <= pair[1].score, "list not ascending: {items:?}");
        }
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert!(!a.identity_eq(b), "duplicate identity in {items:?}");
            }
        }
    }

    #[test]
    fn insert_into_empty() {
        let mut list = RankedList::new();
        list.insert_or_replace(entry("a", 1));
        assert_eq!(list.as_slice(), [entry("a", 1)]);
    }

    #[test]
    fn better_score_replaces_existing_identity() {
        let mut list = RankedList::from_sorted(vec![entry("a", 1), entry("b", 3)]);
        list.insert_or_replace(entry("a", 5));
        assert_eq!(list.as_slice(), [entry("b", 3), entry("a", 5)]);
        assert_sorted_unique(&list);
    }

    #[test]
    fn worse_score_leaves_list_unchanged() {
        let mut list = RankedList::from_sorted(vec![entry("b", 3), entry("a", 5)]);
        list.insert_or_replace(entry("a", 2));
        assert_eq!(list.as_slice(), [entry("b", 3), entry("a", 5)]);
    }

    #[test]
    fn equal_score_keeps_existing_entry() {
        let mut list = RankedList::from_sorted(vec![entry("a", 4)]);
        list.insert_or_replace(entry("a", 4));
        assert_eq!(list.as_slice(), [entry("a", 4)]);
    }

    #[test]
    fn new_identity_inserts_at_sorted_position() {
        let mut list = RankedList::from_sorted(vec![entry("a", 1)]);
        list.insert_or_replace(entry("c", 0));
        assert_eq!(list.as_slice(), [entry("c", 0), entry("a", 1)]);
    }

    #[test]
    fn ties_land_after_existing_equal_scores() {
        let mut list = RankedList::from_sorted(vec![entry("a", 2), entry("b", 2)]);
        list.insert_or_replace(entry("c", 2));
        assert_eq!(
            list.as_slice(),
            [entry("a", 2), entry("b", 2), entry("c", 2)]
        );
    }

    #[test]
    fn reinserting_is_idempotent() {
        let mut once = RankedList::new();
        once.insert_or_replace(entry("a", 7));
        let mut twice = once.clone();
        twice.insert_or_replace(entry("a", 7));
        assert_eq!(once, twice);
    }

    #[test]
    fn invariants_hold_across_insertion_sequences() {
        let inserts = [
            entry("a", 3),
            entry("b", 1),
            entry("c", 9),
            entry("a", 6),
            entry("b", 0),
            entry("d", 6),
            entry("c", 2),
            entry("a", 6),
        ];
        let mut list = RankedList::new();
        for item in inserts {
            list.insert_or_replace(item);
            assert_sorted_unique(&list);
        }
        assert_eq!(
            list.as_slice(),
            [entry("b", 1), entry("a", 6), entry("d", 6), entry("c", 9)]
        );
    }

    #[test]
    fn truncate_keeps_list_head() {
        let mut list = RankedList::from_sorted(vec![entry("a", 1), entry("b", 2), entry("c", 3)]);
        list.truncate(2);
        assert_eq!(list.as_slice(), [entry("a", 1), entry("b", 2)]);
        list.truncate(10);
        assert_eq!(list.len(), 2);
    }
}
