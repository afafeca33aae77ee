//! Core traits for stratvec.
//!
//! This module defines:
//! - [`Comparator`]: total order over two elements, used by every sort strategy and
//!   by the vector's own search helpers.
//! - [`SortStrategy`]: the pluggable sorting algorithm a [`Vector`](crate::Vector)
//!   delegates to.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, so most callers never
/// implement this trait by hand.
///
/// The order must be consistent (transitive, antisymmetric). Nothing checks this;
/// an inconsistent comparator yields an unspecified, but still complete, permutation.
///
/// # Examples
///
/// ```
/// use stratvec::core::Comparator;
/// use std::cmp::Ordering;
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T`'s own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// A sorting algorithm that can be plugged into a [`Vector`](crate::Vector).
///
/// Implementations hold no state between calls. After `sort` returns, `data`
/// has the same length and holds a permutation of its input that is
/// non-decreasing under `cmp`.
///
/// The trait is object safe so a vector can swap strategies at runtime. A vector
/// stores its strategy as a [`BoxedStrategy`](crate::BoxedStrategy), so the
/// implementing type must also be `Send`.
///
/// # Examples
///
/// ```
/// use stratvec::core::{Comparator, SortStrategy};
///
/// struct Reverse;
///
/// impl<T: Clone> SortStrategy<T> for Reverse {
///     fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
///         data.sort_by(|a, b| cmp.compare(b, a));
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait SortStrategy<T> {
    /// Sorts `data` in place according to `cmp`.
    fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>);

    /// Short human-readable name, used in diagnostics.
    fn name(&self) -> &'static str;
}
