//! Bounded extremum search: find a minimum or maximum, but stop early once an
//! element already satisfies a caller-supplied bound.
//!
//! A plain `min_element` scan always walks the whole sequence to prove its
//! answer is the minimum. Often the caller does not need *the* minimum — any
//! element at or below some threshold will do. These variants check the bound
//! against the current best after every update, so a "good enough" element ends
//! the scan immediately; in the best case (the first element already
//! satisfies the bound) a single comparison suffices.
//!
//! # Functions
//!
//! | Function | Finds | Ordering |
//! |----------|-------|----------|
//! | [`min_element_bounded`] | first element ≤ bound, else the true minimum | `PartialOrd` |
//! | [`min_element_bounded_by`] | same, under an injected strict order | caller's `less` |
//! | [`max_element_bounded`] | first element ≥ bound, else the true maximum | `PartialOrd` |
//! | [`max_element_bounded_by`] | same, under an injected strict order | caller's `less` |
//!
//! # Contract
//!
//! Each function returns the index of an element `e` such that either `e`
//! satisfies the bound (for min: the bound is not strictly less than `e`), or
//! `e` is a true extremum reached after scanning the whole slice. `None` is
//! returned only for an empty slice. At most `2 * len` comparator
//! applications are performed: per element, one against the current best plus
//! (only after an update) one against the bound.
//!
//! Ties never displace the current best — a strict comparison is required to
//! replace it — so the earliest extremal element wins, matching the stdlib's
//! `min`/`max_by` earliest/latest conventions for min.
//!
//! The comparator must be a strict weak ordering. Violating that yields an
//! unspecified (but in-range) index, never a panic.

/// Index of the first element `<= bound`, or of the true minimum if no element
/// satisfies the bound. `None` for an empty slice.
///
/// ```
/// use bounded_search::min_element_bounded;
///
/// let values = [2, 3, 5, 1, 8, 0];
/// // 1 is good enough: the scan stops there without looking at 8 or 0.
/// assert_eq!(min_element_bounded(&values, &1), Some(3));
/// // No element is <= -42, so the full scan finds the true minimum.
/// assert_eq!(min_element_bounded(&values, &-42), Some(5));
/// ```
pub fn min_element_bounded<T: PartialOrd>(values: &[T], bound: &T) -> Option<usize> {
    min_element_bounded_by(values, bound, |a, b| a < b)
}

/// [`min_element_bounded`] under an injected strict-order relation.
///
/// "Minimum" means minimal under `less`; passing a reversed relation turns
/// this into a bounded maximum search.
pub fn min_element_bounded_by<T, F>(values: &[T], bound: &T, mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut iter = values.iter().enumerate();
    let (mut best_idx, mut best) = iter.next()?;
    if !less(bound, best) {
        return Some(best_idx);
    }

    for (idx, value) in iter {
        if less(value, best) {
            best_idx = idx;
            best = value;
            // Re-check the bound only when the best improved.
            if !less(bound, best) {
                return Some(best_idx);
            }
        }
    }

    Some(best_idx)
}

/// Index of the first element `>= bound`, or of the true maximum if no element
/// satisfies the bound. `None` for an empty slice.
///
/// ```
/// use bounded_search::max_element_bounded;
///
/// let values = [2, 3, 5, 1, 8, 0];
/// assert_eq!(max_element_bounded(&values, &5), Some(2));
/// assert_eq!(max_element_bounded(&values, &42), Some(4));
/// ```
pub fn max_element_bounded<T: PartialOrd>(values: &[T], bound: &T) -> Option<usize> {
    max_element_bounded_by(values, bound, |a, b| a < b)
}

/// [`max_element_bounded`] under an injected strict-order relation.
///
/// "Maximum" means maximal under `less`; passing a reversed relation turns
/// this into a bounded minimum search.
pub fn max_element_bounded_by<T, F>(values: &[T], bound: &T, mut less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut iter = values.iter().enumerate();
    let (mut best_idx, mut best) = iter.next()?;
    if !less(best, bound) {
        return Some(best_idx);
    }

    for (idx, value) in iter {
        if less(best, value) {
            best_idx = idx;
            best = value;
            if !less(best, bound) {
                return Some(best_idx);
            }
        }
    }

    Some(best_idx)
}
