//! Early-exit iteration: apply a predicate to each element until it says stop.
//!
//! [`for_each_while`] is `for_each` with a brake pedal. The callable returns a
//! `bool`; the first `false` ends the traversal, but only *after* that call has
//! run — the failing element is still visited, so a predicate that mutates its
//! argument has already done so by the time the loop halts.
//!
//! The callable is returned by value. A stateful closure (or a hand-written
//! `FnMut` struct) comes back carrying whatever it accumulated, which is how
//! callers learn "how many did I visit" or "what did I find" without threading
//! extra out-parameters.

/// Applies `f` to each item in order, stopping after the first `false`.
///
/// Visits at most `min(k + 1, n)` items, where `k` is the index of the first
/// item for which `f` returns `false` and `n` is the sequence length; exactly
/// `n` if `f` never returns `false`. An empty sequence never invokes `f`.
///
/// Pass `iter_mut()` (or `&mut [T]`, which iterates as `&mut T`) to mutate
/// elements in place:
///
/// ```
/// use bounded_search::for_each_while;
///
/// let mut values = [1, 2, 3, 4, 5];
/// let mut visited = 0usize;
/// for_each_while(&mut values, |v: &mut i32| {
///     *v = -*v;
///     visited += 1;
///     visited < 2
/// });
/// assert_eq!(values, [-1, -2, 3, 4, 5]);
/// assert_eq!(visited, 2);
/// ```
pub fn for_each_while<I, F>(items: I, mut f: F) -> F
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    for item in items {
        if !f(item) {
            break;
        }
    }
    f
}
