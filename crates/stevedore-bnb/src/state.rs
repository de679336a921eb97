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

//! Incumbent state and waste accounting
//!
//! Tracks the best packing found so far and derives the two quantities the
//! search prunes with. Beating an incumbent of `k` bins means using at most
//! `k - 1` bins, which fixes the total room available. The difference
//! between that room and the total item size is the waste budget:
//!
//! ```text
//! max_waste = (k - 1) * capacity - total_size
//! ```
//!
//! A node that has already wasted more than the budget cannot improve on
//! the incumbent. From the same budget follows the minimum sum a bin
//! completion must reach: whatever the budget still allows to be wasted is
//! the most a new bin may leave empty.
//!
//! The budget can be negative when even `k - 1` bins cannot hold the total
//! size; every completion then fails the minimum sum and the search
//! terminates by exhaustion, certifying the incumbent.

use num_traits::FromPrimitive;
use stevedore_core::num::{
    ops::{SaturatingMulVal, SaturatingSubVal},
    solver::SolverNumeric,
};
use stevedore_model::index::ItemIndex;

/// The mutable solution state of a running search.
#[derive(Debug, Clone)]
pub struct SolutionState<T> {
    /// The root lower bound on the bin count. Reaching it proves optimality.
    lower_bound: usize,
    /// The exact total size of all items being packed.
    total_size: T,
    /// The uniform bin capacity.
    capacity: T,
    /// The best packing found so far, as per-bin item lists.
    best: Vec<Vec<ItemIndex>>,
}

impl<T> SolutionState<T>
where
    T: SolverNumeric,
{
    /// Creates the state from the root bound and an initial incumbent.
    pub fn new(lower_bound: usize, total_size: T, capacity: T, best: Vec<Vec<ItemIndex>>) -> Self {
        debug_assert!(
            !best.is_empty(),
            "called `SolutionState::new` without an initial incumbent"
        );
        Self {
            lower_bound,
            total_size,
            capacity,
            best,
        }
    }

    /// Returns the root lower bound on the bin count.
    #[inline(always)]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Returns the bin count of the current incumbent.
    #[inline(always)]
    pub fn best_bin_count(&self) -> usize {
        self.best.len()
    }

    /// Returns the waste budget for improving on the incumbent.
    ///
    /// Negative when even one bin less than the incumbent cannot hold the
    /// total size; no completion passes the minimum sum in that case.
    pub fn max_waste(&self) -> T {
        let target_bins = T::from_usize(self.best.len() - 1).unwrap_or_else(T::max_value);
        target_bins
            .saturating_mul_val(self.capacity)
            .saturating_sub_val(self.total_size)
    }

    /// Returns the minimum sum a bin completion must reach at a node that
    /// has already accumulated `waste`.
    ///
    /// The remaining budget is `max_waste - waste`; a completion leaving
    /// more room than that unfilled would blow the budget on the spot.
    pub fn min_completion_sum(&self, waste: T) -> T {
        self.capacity
            .saturating_sub_val(self.max_waste().saturating_sub_val(waste))
    }

    /// Installs a new incumbent if it uses strictly fewer bins.
    ///
    /// Returns whether the incumbent changed.
    pub fn try_improve(&mut self, bins: Vec<Vec<ItemIndex>>) -> bool {
        if bins.len() < self.best.len() {
            self.best = bins;
            true
        } else {
            false
        }
    }

    /// Consumes the state and returns the best packing found.
    pub fn into_best(self) -> Vec<Vec<ItemIndex>> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn three_bins() -> Vec<Vec<ItemIndex>> {
        vec![vec![ii(0)], vec![ii(1)], vec![ii(2)]]
    }

    #[test]
    fn test_max_waste() {
        // Incumbent of 3 bins, capacity 12, total 24: two bins leave no slack.
        let state = SolutionState::new(2, 24i64, 12, three_bins());
        assert_eq!(state.max_waste(), 0);
    }

    #[test]
    fn test_max_waste_can_be_negative() {
        // Two bins of 10 cannot hold 25; the budget goes negative.
        let state = SolutionState::new(3, 25i64, 10, three_bins());
        assert_eq!(state.max_waste(), -5);
    }

    #[test]
    fn test_min_completion_sum_tightens_with_waste() {
        let state = SolutionState::new(2, 20i64, 12, three_bins());
        // max_waste = 2*12 - 20 = 4.
        assert_eq!(state.max_waste(), 4);
        assert_eq!(state.min_completion_sum(0), 8);
        assert_eq!(state.min_completion_sum(3), 11);
        assert_eq!(state.min_completion_sum(4), 12);
    }

    #[test]
    fn test_try_improve_requires_strictly_fewer_bins() {
        let mut state = SolutionState::new(2, 24i64, 12, three_bins());
        assert!(!state.try_improve(three_bins()));
        assert!(state.try_improve(vec![vec![ii(0), ii(1)], vec![ii(2)]]));
        assert_eq!(state.best_bin_count(), 2);
        assert!(!state.try_improve(three_bins()));
    }

    #[test]
    fn test_into_best() {
        let state = SolutionState::new(2, 24i64, 12, three_bins());
        assert_eq!(state.into_best().len(), 3);
    }
}
