//! Early-exit supplements to the standard algorithms collection.
//!
//! Two small capabilities the stdlib leaves out: iteration that stops when a
//! predicate says so, and extremum search that stops once a "good enough"
//! element turns up. All three entry points are pure, stateless free functions
//! over borrowed sequences; nothing here allocates, blocks, or owns anything.
//!
//! # Algorithms
//!
//! - **Early-exit iteration** ([`for_each_while`]) — apply a callable to each
//!   element in order until it returns `false`, then hand the callable (and
//!   its accumulated state) back.
//! - **Bounded extremum search** ([`min_element_bounded`],
//!   [`max_element_bounded`] and their `_by` comparator variants) — find a
//!   minimum/maximum but return as soon as an element satisfies a
//!   caller-supplied bound, O(1) in the best case instead of a guaranteed
//!   full scan.

mod extremum;
mod for_each;

pub use extremum::*;
pub use for_each::*;
