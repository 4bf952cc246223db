/// Multiset subtraction: every element of `first` that cannot be matched
/// against a not-yet-consumed element of `second`, in the order of `first`.
///
/// Each match consumes exactly one occurrence from `second`, so
/// `multiset_difference(vec![1, 2, 2, 3], &[2])` keeps one of the `2`s.
pub fn multiset_difference<T: PartialEq>(first: Vec<T>, second: &[T]) -> Vec<T> {
    let mut pool: Vec<&T> = second.iter().collect();
    let mut remaining = Vec::new();
    for el in first {
        match pool.iter().position(|candidate| **candidate == el) {
            Some(i) => {
                pool.swap_remove(i);
            }
            None => remaining.push(el),
        }
    }
    remaining
}
