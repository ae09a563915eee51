//! Linear and ordered search, plus helpers for keeping an array sorted.
//!
//! Everything documented as requiring a *sorted* array assumes ascending
//! order and does not check it. On unsorted input the results are
//! unspecified, but never unsafe.

use core::borrow::Borrow;

use crate::core::DynamicArray;
use crate::error::{DynArrayError, Result};

impl<T> DynamicArray<T> {
    /// Index of the first element equal to `value`, scanning from the front.
    ///
    /// No ordering is assumed. Returns `None` if there is no such element.
    pub fn find<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.as_slice()
            .iter()
            .position(|item| item.borrow() == value)
    }

    /// Linear membership test; no ordering is assumed.
    pub fn has_value<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(value).is_some()
    }

    // first index whose element is not less than `value`
    fn lower_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.as_slice()
            .partition_point(|item| item.borrow() < value)
    }

    // first index whose element is greater than `value`
    fn upper_bound<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.as_slice()
            .partition_point(|item| item.borrow() <= value)
    }

    /// Index of the last element `<= value` in a sorted array.
    ///
    /// This does not check that `value` is present: for an absent value it
    /// returns the position of its predecessor. Returns `None` when every
    /// element is greater than `value`.
    pub fn get_idx<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.upper_bound(value).checked_sub(1)
    }

    /// Index at which `value` can be inserted into a sorted array with
    /// [`insert_before`](DynamicArray::insert_before) to keep it sorted.
    ///
    /// Equal elements stay in front of the inserted one.
    pub fn get_insert_idx<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.upper_bound(value)
    }

    /// Membership test for a sorted array.
    pub fn binary_search<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.lower_bound(value);
        self.get(idx).is_some_and(|item| item.borrow() == value)
    }
}

impl<T: Ord> DynamicArray<T> {
    /// Returns `true` only if every one of `values` is present in this
    /// sorted array. An empty query is trivially satisfied.
    pub fn binary_search_all(&self, values: &[T]) -> bool {
        values.iter().all(|value| self.binary_search(value))
    }

    /// Writes one membership flag per query into `flags`. Flags past
    /// `values.len()` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutputTooSmall` if `flags` is shorter than
    /// `values`.
    #[track_caller]
    pub fn binary_search_flags(&self, values: &[T], flags: &mut [bool]) -> Result<()> {
        if flags.len() < values.len() {
            return Err(DynArrayError::OutputTooSmall {
                required: values.len(),
                provided: flags.len(),
            }
            .reported("binary_search_flags"));
        }
        for (flag, value) in flags.iter_mut().zip(values) {
            *flag = self.binary_search(value);
        }
        Ok(())
    }

    /// Lower-bound index of each of `values` in this sorted array.
    ///
    /// `out` is resized to exactly `values.len()`; its entries follow the
    /// order of `values`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if `out` must grow and
    /// cannot.
    #[track_caller]
    pub fn get_idxs(&self, values: &[T], out: &mut DynamicArray<usize>) -> Result<()> {
        out.resize(values.len())?;
        for (slot, value) in out.iter_mut().zip(values) {
            *slot = self.lower_bound(value);
        }
        Ok(())
    }

    /// Batch form of [`get_insert_idx`](DynamicArray::get_insert_idx).
    ///
    /// Every index is computed against the array as it is now. When the
    /// values are then inserted one by one in order, each insertion shifts
    /// the later positions, so the caller must insert the `i`-th value at
    /// `out[i] + i`:
    ///
    /// ```
    /// # use dynarray::DynamicArray;
    /// let mut array = DynamicArray::from([1, 3, 5]);
    /// let values = [0, 2, 4];
    /// let mut idxs = DynamicArray::new();
    /// array.get_insert_idxs(&values, &mut idxs).unwrap();
    ///
    /// for (i, value) in values.iter().enumerate() {
    ///     array.insert_before(idxs[i] + i, *value).unwrap();
    /// }
    /// assert_eq!(array, [0, 1, 2, 3, 4, 5]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailure` if `out` must grow and
    /// cannot.
    #[track_caller]
    pub fn get_insert_idxs(&self, values: &[T], out: &mut DynamicArray<usize>) -> Result<()> {
        out.resize(values.len())?;
        for (slot, value) in out.iter_mut().zip(values) {
            *slot = self.upper_bound(value);
        }
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    #[track_caller]
    fn check_idxs(&self, idxs: &[usize], operation: &'static str) -> Result<()> {
        match idxs.iter().find(|&&idx| idx >= self.len()) {
            Some(&idx) => self.check_index(idx, operation),
            None => Ok(()),
        }
    }

    // `idxs` must already be validated and `out` at least as long as `idxs`
    fn gather_into(&self, idxs: &[usize], out: &mut [T]) {
        let items = self.as_slice();
        for (slot, &idx) in out.iter_mut().zip(idxs) {
            slot.clone_from(&items[idx]);
        }
    }

    /// Clones the elements at `idxs` into the front of `out`, in order.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::OutputTooSmall` if `out` is shorter than
    /// `idxs`, or `DynArrayError::IndexOutOfBounds` if any index is not
    /// below `len()`. `out` is untouched on error.
    #[track_caller]
    pub fn get_data_by_idxs_into(&self, idxs: &[usize], out: &mut [T]) -> Result<()> {
        if out.len() < idxs.len() {
            return Err(DynArrayError::OutputTooSmall {
                required: idxs.len(),
                provided: out.len(),
            }
            .reported("get_data_by_idxs_into"));
        }
        self.check_idxs(idxs, "get_data_by_idxs_into")?;
        self.gather_into(idxs, out);
        Ok(())
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Gathers the elements at `idxs` into `out`, which is resized to
    /// exactly `idxs.len()`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if any index is not below
    /// `len()`, or `DynArrayError::AllocationFailure` if `out` must grow and
    /// cannot. `out` is untouched on error.
    #[track_caller]
    pub fn get_data_by_idxs(&self, idxs: &[usize], out: &mut DynamicArray<T>) -> Result<()> {
        self.check_idxs(idxs, "get_data_by_idxs")?;
        out.resize(idxs.len())?;
        self.gather_into(idxs, out.as_mut_slice());
        Ok(())
    }
}
