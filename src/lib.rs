//! # Stratvec
//!
//! `stratvec` provides [`Vector`], a growable array whose sorting algorithm is a
//! replaceable [`SortStrategy`], together with two stable merge sorts that plug
//! into it.
//!
//! ## Key Features
//!
//! - **Exact capacity**: the backing buffer grows by a fixed [`GROWTH_INCREMENT`]
//!   and its size is observable through [`Vector::capacity`]. Sorting truncates
//!   it to exactly the number of elements.
//! - **Pluggable sorting**: assign any [`SortStrategy`] at runtime. The default is
//!   [`NativeSort`]; [`TopDownMergeSort`] and [`BottomUpMergeSort`] ship with the crate.
//! - **Comparators as closures**: any `Fn(&T, &T) -> Ordering` is a [`Comparator`].
//!   [`NaturalOrder`] uses `T: Ord`.
//! - **Checked access**: indexed operations return [`VectorError::IndexOutOfRange`]
//!   instead of clamping, and check bounds before mutating anything.
//!
//! ## Usage
//!
//! ```rust
//! use stratvec::prelude::*;
//!
//! let mut v: Vector<i32> = [10, 20, 30, 40].into_iter().collect();
//! v.insert(2, 99).unwrap();
//! assert_eq!(v.to_text().unwrap(), "10, 20, 99, 30, 40");
//!
//! v.set_strategy(Some(Box::new(TopDownMergeSort)));
//! v.sort_by(&|a: &i32, b: &i32| b.cmp(a));
//! assert_eq!(v.as_slice(), &[99, 40, 30, 20, 10]);
//! ```
//!
//! ### Custom Strategies
//!
//! Implement [`SortStrategy`] to plug in your own algorithm:
//!
//! ```rust
//! use stratvec::prelude::*;
//!
//! struct Insertion;
//!
//! impl<T> SortStrategy<T> for Insertion {
//!     fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
//!         for i in 1..data.len() {
//!             let mut j = i;
//!             while j > 0 && cmp.compare(&data[j], &data[j - 1]).is_lt() {
//!                 data.swap(j, j - 1);
//!                 j -= 1;
//!             }
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "insertion"
//!     }
//! }
//!
//! let mut v: Vector<u8> = [3, 1, 2].into_iter().collect();
//! v.set_strategy(Some(Box::new(Insertion)));
//! v.sort();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Growth**: fixed-increment growth copies the whole buffer every
//!   [`GROWTH_INCREMENT`] pushes, so `n` pushes cost O(n²) element moves overall.
//! - **Merge sorts**: O(n log n) comparisons. The top-down sort allocates fresh
//!   halves at every level; the bottom-up sort allocates one scratch buffer.
//!
//! The library emits `debug`/`trace` records through the [`log`] facade.

pub mod algo;
pub mod core;
pub mod error;
pub mod vector;

pub use crate::algo::{BottomUpMergeSort, NativeSort, TopDownMergeSort};
pub use crate::core::{Comparator, NaturalOrder, SortStrategy};
pub use crate::error::VectorError;
pub use crate::vector::{BoxedStrategy, DEFAULT_CAPACITY, GROWTH_INCREMENT, Vector};

pub mod prelude {
    pub use crate::algo::{BottomUpMergeSort, NativeSort, TopDownMergeSort};
    pub use crate::core::{Comparator, NaturalOrder, SortStrategy};
    pub use crate::error::VectorError;
    pub use crate::vector::{BoxedStrategy, Vector};
}
