// Stable insertion sort with an explicit comparator.
//
// Used for both the characters of a canonical key and the words of a query
// result. Inputs are small (word lengths, anagram class sizes), so the
// quadratic worst case does not matter.

use std::cmp::Ordering;

/// Sort `items` in place using `compare`.
///
/// The sort is stable: an element only moves left past elements that
/// compare strictly `Greater` than it, so equal elements keep their input
/// order.
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut k = i;
        while k > 0 && compare(&items[k - 1], &items[k]) == Ordering::Greater {
            items.swap(k - 1, k);
            k -= 1;
        }
    }
}

/// Sort `items` in place by their natural order.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    insertion_sort_by(items, T::cmp);
}
