#![deny(unsafe_code)]

//! `DynamicArray`: a growable array with ordered search and sorted-insertion
//! helpers.
//!
//! `DynamicArray<T>` owns a single contiguous buffer of `capacity` slots, of
//! which the first `len` are live. It grows by a configurable factor when it
//! runs out of room, and offers binary-search based helpers for keeping its
//! contents sorted.
//!
//! # Storage Model
//!
//! - The buffer is unallocated exactly when `capacity() == 0`.
//! - Slots past `len()` always hold `T::default()`. Removing an element
//!   (`pop_back`, `erase`, `clear`, shrinking `resize`) drops it immediately.
//! - Growth reallocates: a new buffer is allocated first, the live elements
//!   are moved into it, then the old buffer is released. Any operation taking
//!   `&mut self` may do this, and the borrow checker keeps references into the
//!   old buffer from outliving it.
//!
//! ## Time Complexity
//! - `push_back()`, `insert_before()` at the end: amortized O(1)
//! - `insert_before()`, `erase()`: O(len - index)
//! - `pop_back()`, `take()`, `purge()`: O(1)
//! - `binary_search()`, `get_idx()`, `get_insert_idx()`: O(log n)
//! - `find()`, `has_value()`: O(n)
//!
//! # Growth Policy
//!
//! When a single insertion finds the array full, the new capacity is
//! `ceil(growth_factor * max(capacity, seed_capacity))`; with the default
//! policy (factor 1.5, seed 8) the first push allocates 12 slots. Appending a
//! whole array grows once, to `ceil(growth_factor * required)`. `reserve`,
//! `resize` and `shrink_to_fit` allocate exact sizes.
//!
//! ```
//! # use dynarray::{DynamicArray, GrowthPolicy};
//! let mut array = DynamicArray::new();
//! array.push_back(1).unwrap();
//! assert_eq!(array.capacity(), 12);
//!
//! let policy = GrowthPolicy::new(2.0, 4).unwrap();
//! let mut doubling = DynamicArray::with_policy(policy);
//! doubling.push_back(1).unwrap();
//! assert_eq!(doubling.capacity(), 8);
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`Result`]. On error the array is left exactly
//! as it was. Rejected calls are also reported as `tracing` events, so a
//! host that installs a subscriber gets a diagnostic carrying the operation
//! name, the error, and `file`/`line` fields pointing at the code that made
//! the failing call. Rejected arguments are logged at `WARN`, allocation
//! failures at `ERROR`.
//!
//! ```
//! # use dynarray::{DynamicArray, DynArrayError};
//! let mut array = DynamicArray::from([10, 20, 30]);
//! assert_eq!(
//!     array.erase(5),
//!     Err(DynArrayError::IndexOutOfBounds { index: 5, length: 3 })
//! );
//! assert_eq!(array, [10, 20, 30]);
//! ```
//!
//! # Sorted Arrays
//!
//! `get_idx`, `get_idxs`, `get_insert_idx`, `get_insert_idxs` and the
//! `binary_search` family assume the array is sorted in ascending order and
//! do not check it.
//!
//! ```
//! # use dynarray::DynamicArray;
//! let mut array = DynamicArray::from([1, 3, 5, 7, 10]);
//! assert!(array.binary_search(&7));
//! assert!(!array.binary_search_all(&[1, 4]));
//!
//! let idx = array.get_insert_idx(&6);
//! array.insert_before(idx, 6).unwrap();
//! assert_eq!(array, [1, 3, 5, 6, 7, 10]);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use dynarray::DynamicArray;
//! let array: DynamicArray<i32> = (1..=4).collect();
//!
//! let doubled: Vec<_> = array.iter().map(|x| x * 2).collect();
//! assert_eq!(doubled, [2, 4, 6, 8]);
//!
//! for value in &array {
//!     println!("{value}");
//! }
//! ```

mod core;
mod error;
mod growth;
mod iter;
mod search;

// Re-export public types and traits
pub use crate::core::DynamicArray;
pub use error::{DynArrayError, Result};
pub use growth::GrowthPolicy;
pub use iter::{IntoIter, Iter, IterMut};
