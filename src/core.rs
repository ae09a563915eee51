use core::fmt;
use core::ops::{Index, IndexMut, Range};

use crate::error::{DynArrayError, Result};
use crate::growth::GrowthPolicy;
use crate::iter::{IntoIter, Iter, IterMut};

/// A growable, exclusively owned, contiguous array.
///
/// The buffer always holds `capacity` initialized slots. Slots past `len`
/// hold `T::default()`: elements are destroyed as soon as they are logically
/// removed, never lazily on the next write.
pub struct DynamicArray<T> {
    slots: Box<[T]>,
    len: usize,
    policy: GrowthPolicy,
}

/// Reserves room for exactly `capacity` elements without aborting on failure.
#[track_caller]
fn try_vec<T>(capacity: usize, operation: &'static str) -> Result<Vec<T>> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        return Err(DynArrayError::AllocationFailure {
            requested: capacity,
        }
        .reported(operation));
    }
    Ok(slots)
}

#[track_caller]
fn allocate_slots<T: Default>(capacity: usize, operation: &'static str) -> Result<Box<[T]>> {
    let mut slots = try_vec(capacity, operation)?;
    slots.resize_with(capacity, T::default);
    Ok(slots.into_boxed_slice())
}

impl<T> DynamicArray<T> {
    /// Creates an empty, unallocated array with the default growth policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Creates an empty, unallocated array that grows according to `policy`.
    #[must_use]
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            slots: Box::default(),
            len: 0,
            policy,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array owns a heap buffer, which is the case
    /// exactly when `capacity() > 0`.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        !self.slots.is_empty()
    }

    #[must_use]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Replaces the growth policy. The current buffer is left as it is; the
    /// new policy applies from the next growth on.
    pub fn set_policy(&mut self, policy: GrowthPolicy) {
        self.policy = policy;
    }

    #[must_use]
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.len
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Tries to get the element at the specified index.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    #[track_caller]
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.check_index(index, "try_get")?;
        Ok(&self.slots[index])
    }

    /// Gets the element at the specified index without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Slots past `len()` are initialized,
    /// but reading them is still a logic error the caller is responsible for.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: the caller guarantees `index < len <= slots.len()`.
        unsafe { self.slots.get_unchecked(index) }
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns an iterator over the elements in the array.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each element.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Moves the whole buffer out of `self` in O(1).
    ///
    /// `self` is left empty and unallocated but keeps its growth policy.
    #[must_use]
    pub fn take(&mut self) -> Self {
        let policy = self.policy;
        core::mem::replace(self, Self::with_policy(policy))
    }

    /// Frees the buffer and returns to the zero-capacity initial state.
    pub fn purge(&mut self) {
        self.slots = Box::default();
        self.len = 0;
    }

    #[track_caller]
    pub(crate) fn check_index(&self, index: usize, operation: &'static str) -> Result<()> {
        if index >= self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            }
            .reported(operation));
        }
        Ok(())
    }

    #[track_caller]
    fn check_shift(&self, index: usize, count: usize, operation: &'static str) -> Result<()> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            }
            .reported(operation));
        }
        if count == 0 {
            return Err(DynArrayError::InvalidShift { count }.reported(operation));
        }
        Ok(())
    }

    /// Builds an array from an exactly sized iterator, allocating
    /// `iter.len()` slots upfront.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn try_from_iter<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let mut slots = try_vec(values.len(), "try_from_iter")?;
        slots.extend(values);
        Ok(Self::from(slots))
    }
}

impl<T: Default> DynamicArray<T> {
    /// Creates an empty array with `capacity` preallocated slots.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_policy(capacity, GrowthPolicy::default())
    }

    /// Creates an empty array with `capacity` preallocated slots that grows
    /// according to `policy` once they run out.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn with_capacity_and_policy(capacity: usize, policy: GrowthPolicy) -> Result<Self> {
        Ok(Self {
            slots: allocate_slots(capacity, "with_capacity")?,
            len: 0,
            policy,
        })
    }

    fn reset_slots(&mut self, range: Range<usize>) {
        self.slots[range].fill_with(T::default);
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots.
    ///
    /// The new buffer is allocated before anything is touched, so a failure
    /// leaves the array unchanged. Elements that do not fit are dropped and
    /// `len` is clamped to the new capacity.
    #[track_caller]
    fn realloc_buffer(&mut self, new_capacity: usize, operation: &'static str) -> Result<()> {
        let mut fresh = allocate_slots::<T>(new_capacity, operation)?;
        let kept = self.len.min(new_capacity);
        for (dst, src) in fresh.iter_mut().zip(&mut self.slots[..kept]) {
            core::mem::swap(dst, src);
        }
        tracing::trace!(
            operation,
            old_capacity = self.capacity(),
            new_capacity,
            "reallocated dynamic array buffer"
        );
        self.slots = fresh;
        self.len = kept;
        Ok(())
    }

    #[track_caller]
    fn grow_for_one(&mut self, operation: &'static str) -> Result<()> {
        if self.len == self.capacity() {
            let grown = self.policy.grown_capacity(self.capacity());
            self.realloc_buffer(grown, operation)?;
        }
        Ok(())
    }

    #[track_caller]
    fn grow_for_append(&mut self, required: usize, operation: &'static str) -> Result<()> {
        if self.capacity() < required {
            let grown = self.policy.append_capacity(required);
            self.realloc_buffer(grown, operation)?;
        }
        Ok(())
    }

    #[track_caller]
    fn appended_len(&self, additional: usize, operation: &'static str) -> Result<usize> {
        match self.len.checked_add(additional) {
            Some(required) => Ok(required),
            None => Err(DynArrayError::AllocationFailure {
                requested: usize::MAX,
            }
            .reported(operation)),
        }
    }

    /// Appends an element, growing the buffer when it is full.
    ///
    /// Growing reallocates; no reference into the old buffer survives it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if growth is needed and
    /// the new buffer cannot be allocated.
    #[track_caller]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.grow_for_one("push_back")?;
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty. The capacity is never reduced.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(core::mem::take(&mut self.slots[self.len]))
    }

    /// Drops all elements. Capacity and buffer are kept.
    pub fn clear(&mut self) {
        self.reset_slots(0..self.len);
        self.len = 0;
    }

    /// Removes the element at `index`, shifting everything after it one
    /// position to the left, and returns it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> Result<T> {
        self.check_index(index, "erase")?;
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(core::mem::take(&mut self.slots[self.len]))
    }

    /// Inserts `value` so that it ends up at `index`; elements from `index`
    /// onwards move one position to the right.
    ///
    /// `index == len()` appends. Growing reallocates, as in [`push_back`].
    ///
    /// [`push_back`]: DynamicArray::push_back
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > len()`, or
    /// `DynArrayError::AllocationFailure` if growth fails.
    #[track_caller]
    pub fn insert_before(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.len,
            }
            .reported("insert_before"));
        }
        self.grow_for_one("insert_before")?;
        self.len += 1;
        // the default slot at the old end rotates down to `index`
        self.slots[index..self.len].rotate_right(1);
        self.slots[index] = value;
        Ok(())
    }

    /// Moves all elements of `other` to the end of `self`, then purges
    /// `other`.
    ///
    /// Grows at most once, to `growth_factor * (len + other.len)` slots.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if growth fails; both
    /// arrays are then unchanged.
    #[track_caller]
    pub fn append_vector_move(&mut self, other: &mut Self) -> Result<()> {
        let required = self.appended_len(other.len, "append_vector_move")?;
        self.grow_for_append(required, "append_vector_move")?;
        let moved = other.len;
        for (dst, src) in self.slots[self.len..required]
            .iter_mut()
            .zip(&mut other.slots[..moved])
        {
            core::mem::swap(dst, src);
        }
        self.len = required;
        other.purge();
        Ok(())
    }

    /// Grows the buffer to exactly `new_capacity` slots if it is smaller.
    /// Never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if self.capacity() < new_capacity {
            self.realloc_buffer(new_capacity, "reserve")?;
        }
        Ok(())
    }

    /// Sets the length to `new_len`. New elements are `T::default()`;
    /// shrinking drops the removed elements but keeps the capacity.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if growth fails.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if self.capacity() < new_len {
            self.realloc_buffer(new_len, "resize")?;
        }
        if new_len < self.len {
            self.reset_slots(new_len..self.len);
        }
        self.len = new_len;
        Ok(())
    }

    /// Reallocates to exactly `len()` slots. An empty array becomes
    /// unallocated.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the smaller buffer
    /// cannot be allocated.
    #[track_caller]
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.len < self.capacity() {
            self.realloc_buffer(self.len, "shrink_to_fit")?;
        }
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Creates an array of exactly `count` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn filled(count: usize, value: &T) -> Result<Self> {
        let mut slots = try_vec(count, "filled")?;
        slots.resize(count, value.clone());
        Ok(Self::from(slots))
    }

    /// Creates an array holding clones of `values`, with capacity equal to
    /// `values.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let mut slots = try_vec(values.len(), "from_slice")?;
        slots.extend_from_slice(values);
        Ok(Self::from(slots))
    }

    /// Shifts the range `[index, len)` right by `count` positions inside the
    /// live range. Elements pushed past `len` are lost; the length does not
    /// change.
    ///
    /// Works like `memmove`: positions in `[index, index + count)` keep
    /// their previous contents. If `count >= len - index` nothing moves.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > len()`, or
    /// `DynArrayError::InvalidShift` if `count == 0`.
    #[track_caller]
    pub fn shift_right(&mut self, index: usize, count: usize) -> Result<()> {
        self.check_shift(index, count, "shift_right")?;
        if count >= self.len - index {
            return Ok(());
        }
        for i in (index + count..self.len).rev() {
            let (head, tail) = self.slots.split_at_mut(i);
            tail[0].clone_from(&head[i - count]);
        }
        Ok(())
    }

    /// Shifts the range `[index + count, len)` left by `count` positions, so
    /// that it starts at `index`. The last `count` live positions keep their
    /// previous contents; the length does not change.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > len()`, or
    /// `DynArrayError::InvalidShift` if `count == 0`.
    #[track_caller]
    pub fn shift_left(&mut self, index: usize, count: usize) -> Result<()> {
        self.check_shift(index, count, "shift_left")?;
        if count >= self.len - index {
            return Ok(());
        }
        for i in index..self.len - count {
            let (head, tail) = self.slots.split_at_mut(i + count);
            head[i].clone_from(&tail[0]);
        }
        Ok(())
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Clones the array, allocating the same capacity as the source.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if the buffer cannot be
    /// allocated.
    #[track_caller]
    pub fn try_clone(&self) -> Result<Self> {
        let mut slots = try_vec(self.capacity(), "try_clone")?;
        slots.extend_from_slice(self.as_slice());
        slots.resize_with(self.capacity(), T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: self.len,
            policy: self.policy,
        })
    }

    /// Replaces the contents with clones of `values`.
    ///
    /// The buffer is reused when it is large enough; otherwise the old one
    /// is discarded and a buffer of exactly `values.len()` slots replaces it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if a new buffer is needed
    /// and cannot be allocated.
    #[track_caller]
    pub fn assign_slice(&mut self, values: &[T]) -> Result<()> {
        if self.capacity() < values.len() {
            let mut slots = try_vec(values.len(), "assign_slice")?;
            slots.extend_from_slice(values);
            self.slots = slots.into_boxed_slice();
        } else {
            self.slots[..values.len()].clone_from_slice(values);
            if values.len() < self.len {
                self.reset_slots(values.len()..self.len);
            }
        }
        self.len = values.len();
        Ok(())
    }

    /// Like [`resize`](DynamicArray::resize), but new elements are clones
    /// of `value`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if growth fails.
    #[track_caller]
    pub fn resize_with_value(&mut self, new_len: usize, value: &T) -> Result<()> {
        let old_len = self.len;
        self.resize(new_len)?;
        if old_len < new_len {
            self.slots[old_len..new_len].fill(value.clone());
        }
        Ok(())
    }

    /// Appends clones of all elements of `other`.
    ///
    /// Grows at most once, to `growth_factor * (len + other.len)` slots.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if growth fails.
    #[track_caller]
    pub fn append_vector(&mut self, other: &Self) -> Result<()> {
        let required = self.appended_len(other.len, "append_vector")?;
        self.grow_for_append(required, "append_vector")?;
        self.slots[self.len..required].clone_from_slice(other.as_slice());
        self.len = required;
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity());
        slots.extend_from_slice(self.as_slice());
        slots.resize_with(self.capacity(), T::default);
        Self {
            slots: slots.into_boxed_slice(),
            len: self.len,
            policy: self.policy,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len {
            self.slots = source.as_slice().into();
        } else {
            self.slots[..source.len].clone_from_slice(source.as_slice());
            if source.len < self.len {
                self.reset_slots(source.len..self.len);
            }
        }
        self.len = source.len;
        self.policy = source.policy;
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            slots: values.into_boxed_slice(),
            len,
            policy: GrowthPolicy::default(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from(values.into_iter().collect::<Vec<T>>())
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut values = Vec::from(self.slots);
        values.truncate(self.len);
        IntoIter::new(values)
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

// Element-wise; every pair must match. Capacity and policy are ignored.
impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}
