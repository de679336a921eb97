// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Validated bin packing instance.
//!
//! This module turns a raw list of item sizes and a bin capacity into a
//! validated [`Instance`], partitioning out items that exceed the capacity
//! so that the packing engines only ever see items that fit into a bin.
//!
//! Validation is eager and fail-fast. A non-positive capacity is rejected
//! before a single size is examined, a negative size is reported with its
//! position in the caller's original input, and the total size of all
//! fitting items is accumulated with checked arithmetic so the engines can
//! rely on exact sums downstream.
//!
//! Items whose size exceeds the capacity are not an error. They are set
//! aside during preparation and reported back to the caller, while the
//! remaining items keep their relative input order.

use crate::{error::InstanceError, index::ItemIndex};
use stevedore_core::num::{constants::Zero, ops::CheckedAddVal, solver::SolverNumeric};

/// An immutable, validated instance of the one-dimensional bin packing
/// problem.
///
/// Item indices handed out by this type address the *fitting* items only.
/// Positions in the caller's original input are available through
/// [`Instance::original_position`] and [`Instance::oversized_positions`].
#[derive(Debug, Clone)]
pub struct Instance<T> {
    /// All input sizes in original order, fitting and oversized alike.
    sizes: Vec<T>,
    /// Positions (into `sizes`) of the items that fit into a bin,
    /// preserving input order.
    fitting: Vec<usize>,
    /// Positions (into `sizes`) of the items larger than the capacity,
    /// preserving input order.
    oversized: Vec<usize>,
    /// The uniform bin capacity. Strictly positive.
    capacity: T,
    /// The exact sum of all fitting item sizes.
    total_fitting_size: T,
}

impl<T> Instance<T>
where
    T: SolverNumeric,
{
    /// Checks that a capacity is admissible without building an instance.
    ///
    /// # Errors
    ///
    /// Returns [`InstanceError::NonPositiveCapacity`] if `capacity <= 0`.
    #[inline]
    pub fn validate_capacity(capacity: T) -> Result<(), InstanceError> {
        if capacity <= T::ZERO {
            return Err(InstanceError::NonPositiveCapacity);
        }
        Ok(())
    }

    /// Builds a validated instance from raw item sizes and a bin capacity.
    ///
    /// The capacity is checked first, then every size is validated in input
    /// order. Items larger than the capacity are partitioned out and can be
    /// retrieved via [`Instance::oversized_positions`].
    ///
    /// # Errors
    ///
    /// - [`InstanceError::NonPositiveCapacity`] if `capacity <= 0`.
    /// - [`InstanceError::NegativeSize`] for the first negative size,
    ///   carrying its position in the input.
    /// - [`InstanceError::SizeOverflow`] if the sum of all fitting sizes
    ///   overflows `T`.
    pub fn new(sizes: Vec<T>, capacity: T) -> Result<Self, InstanceError> {
        Self::validate_capacity(capacity)?;

        let mut fitting = Vec::with_capacity(sizes.len());
        let mut oversized = Vec::new();
        let mut total_fitting_size = T::ZERO;

        for (position, &size) in sizes.iter().enumerate() {
            if size < T::ZERO {
                return Err(InstanceError::NegativeSize { position });
            }
            if size > capacity {
                oversized.push(position);
            } else {
                total_fitting_size = total_fitting_size
                    .checked_add_val(size)
                    .ok_or(InstanceError::SizeOverflow)?;
                fitting.push(position);
            }
        }

        Ok(Self {
            sizes,
            fitting,
            oversized,
            capacity,
            total_fitting_size,
        })
    }

    /// Returns the number of fitting items, i.e. the number of valid
    /// [`ItemIndex`] values for this instance.
    #[inline(always)]
    pub fn num_items(&self) -> usize {
        self.fitting.len()
    }

    /// Returns the number of items in the caller's original input,
    /// oversized items included.
    #[inline(always)]
    pub fn num_input_items(&self) -> usize {
        self.sizes.len()
    }

    /// Returns the number of oversized items.
    #[inline(always)]
    pub fn num_oversized(&self) -> usize {
        self.oversized.len()
    }

    /// Returns the uniform bin capacity.
    #[inline(always)]
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Returns the exact sum of all fitting item sizes.
    #[inline(always)]
    pub fn total_size(&self) -> T {
        self.total_fitting_size
    }

    /// Returns the size of a fitting item.
    #[inline(always)]
    pub fn size(&self, item: ItemIndex) -> T {
        debug_assert!(
            item.get() < self.fitting.len(),
            "called `Instance::size` with item index out of bounds: the len is {} but the index is {}",
            self.fitting.len(),
            item.get()
        );
        self.sizes[self.fitting[item.get()]]
    }

    /// Returns the position of a fitting item in the caller's original input.
    #[inline(always)]
    pub fn original_position(&self, item: ItemIndex) -> usize {
        debug_assert!(
            item.get() < self.fitting.len(),
            "called `Instance::original_position` with item index out of bounds: the len is {} but the index is {}",
            self.fitting.len(),
            item.get()
        );
        self.fitting[item.get()]
    }

    /// Returns the positions of all oversized items in the caller's
    /// original input, in input order.
    #[inline(always)]
    pub fn oversized_positions(&self) -> &[usize] {
        &self.oversized
    }

    /// Returns an iterator over all fitting item indices in input order.
    #[inline]
    pub fn items(&self) -> impl Iterator<Item = ItemIndex> + '_ {
        (0..self.fitting.len()).map(ItemIndex::new)
    }

    /// Returns all fitting item indices ordered by size, largest first.
    ///
    /// The sort is stable, so equally sized items keep their input order.
    /// Every packing engine that needs a decreasing order derives it from
    /// this method, which keeps solutions deterministic.
    pub fn items_by_size_descending(&self) -> Vec<ItemIndex> {
        let mut items: Vec<ItemIndex> = self.items().collect();
        items.sort_by(|a, b| self.size(*b).cmp(&self.size(*a)));
        items
    }

    /// Returns the fitting item sizes sorted ascending.
    pub fn sorted_sizes_ascending(&self) -> Vec<T> {
        let mut sizes: Vec<T> = self.fitting.iter().map(|&p| self.sizes[p]).collect();
        sizes.sort_unstable();
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_partitions_oversized_items() {
        let instance = Instance::new(vec![4i64, 12, 1, 15, 2], 10).unwrap();
        assert_eq!(instance.num_input_items(), 5);
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.num_oversized(), 2);
        assert_eq!(instance.oversized_positions(), &[1, 3]);
        assert_eq!(instance.total_size(), 7);
    }

    #[test]
    fn test_fitting_items_preserve_input_order() {
        let instance = Instance::new(vec![4i64, 12, 1, 15, 2], 10).unwrap();
        let sizes: Vec<i64> = instance.items().map(|i| instance.size(i)).collect();
        assert_eq!(sizes, vec![4, 1, 2]);
        assert_eq!(instance.original_position(ItemIndex::new(0)), 0);
        assert_eq!(instance.original_position(ItemIndex::new(1)), 2);
        assert_eq!(instance.original_position(ItemIndex::new(2)), 4);
    }

    #[test]
    fn test_size_equal_to_capacity_fits() {
        let instance = Instance::new(vec![10i64, 10], 10).unwrap();
        assert_eq!(instance.num_items(), 2);
        assert_eq!(instance.num_oversized(), 0);
    }

    #[test]
    fn test_zero_sized_items_are_valid() {
        let instance = Instance::new(vec![0i64, 5, 0], 10).unwrap();
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.total_size(), 5);
    }

    #[test]
    fn test_non_positive_capacity_is_rejected() {
        assert_eq!(
            Instance::new(vec![1i64], 0).unwrap_err(),
            InstanceError::NonPositiveCapacity
        );
        assert_eq!(
            Instance::new(vec![1i64], -5).unwrap_err(),
            InstanceError::NonPositiveCapacity
        );
    }

    #[test]
    fn test_negative_size_reports_input_position() {
        let err = Instance::new(vec![3i64, 4, -1, 2], 10).unwrap_err();
        assert_eq!(err, InstanceError::NegativeSize { position: 2 });
    }

    #[test]
    fn test_total_size_overflow_is_detected() {
        let err = Instance::new(vec![i64::MAX, i64::MAX], i64::MAX).unwrap_err();
        assert_eq!(err, InstanceError::SizeOverflow);
    }

    #[test]
    fn test_empty_input() {
        let instance = Instance::new(Vec::<i64>::new(), 10).unwrap();
        assert_eq!(instance.num_items(), 0);
        assert_eq!(instance.num_oversized(), 0);
        assert_eq!(instance.total_size(), 0);
    }

    #[test]
    fn test_items_by_size_descending_is_stable() {
        let instance = Instance::new(vec![4i64, 8, 1, 4, 2, 1], 10).unwrap();
        let order = instance.items_by_size_descending();
        let sizes: Vec<i64> = order.iter().map(|&i| instance.size(i)).collect();
        assert_eq!(sizes, vec![8, 4, 4, 2, 1, 1]);
        // Ties keep input order: the 4 at position 0 before the 4 at position 3.
        assert_eq!(order[1].get(), 0);
        assert_eq!(order[2].get(), 3);
        assert_eq!(order[4].get(), 2);
        assert_eq!(order[5].get(), 5);
    }

    #[test]
    fn test_sorted_sizes_ascending() {
        let instance = Instance::new(vec![4i64, 8, 1, 4, 2, 1], 10).unwrap();
        assert_eq!(instance.sorted_sizes_ascending(), vec![1, 1, 2, 4, 4, 8]);
    }
}
