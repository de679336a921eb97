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

//! Best-fit-decreasing heuristic
//!
//! Items are processed largest first, and each item goes into the open bin
//! with the least leftover room that still takes it. The open bins are kept
//! sorted by fill level, fullest first, so both lookups are binary searches:
//!
//! - The tightest bin for an item is the leftmost bin whose residual
//!   capacity is at least the item size. Residuals ascend left to right
//!   exactly because fills descend.
//! - After an insertion the grown bin is slid left to its new position with
//!   a single `rotate_right` over the affected range.
//!
//! When no bin takes the item, a fresh bin is opened at the end of the list.
//! Items arrive in descending size order, so the new bin's fill can never
//! exceed any existing fill and the ordering survives without a search.
//!
//! This is the strongest of the greedy strategies and seeds the upper bound
//! of the exact solver.

use crate::{sized_bin::SizedBin, strategy::FittingStrategy};
use stevedore_core::{algorithm::partition_index, num::solver::SolverNumeric};
use stevedore_model::{instance::Instance, packing::Packing};

/// The best-fit-decreasing strategy. Stateless and reusable across instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFitDecreasing;

impl BestFitDecreasing {
    pub fn new() -> Self {
        Self
    }
}

impl<T> FittingStrategy<T> for BestFitDecreasing
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "BestFitDecreasing"
    }

    fn pack(&self, instance: &Instance<T>) -> Packing {
        let capacity = instance.capacity();
        // Invariant: bins are sorted by fill level, descending.
        let mut bins: Vec<SizedBin<T>> = Vec::new();

        for item in instance.items_by_size_descending() {
            let size = instance.size(item);

            // Leftmost bin with enough room is the fullest one that fits.
            let pos = partition_index(0, bins.len(), |i| bins[i].residual(capacity) >= size);

            if pos == bins.len() {
                debug_assert!(
                    bins.last().is_none_or(|b| b.fill() >= size),
                    "new bin breaks fill ordering"
                );
                bins.push(SizedBin::open_with(item, size));
                continue;
            }

            bins[pos].push(item, size);
            let new_fill = bins[pos].fill();

            // Slide the grown bin left to restore the descending order.
            let dest = partition_index(0, pos, |i| bins[i].fill() < new_fill);
            if dest < pos {
                bins[dest..=pos].rotate_right(1);
            }
        }

        Packing::from_bins(
            bins.into_iter().map(SizedBin::into_items).collect(),
            instance.num_items(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stevedore_model::index::ItemIndex;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn fills(instance: &Instance<i64>, packing: &Packing) -> Vec<i64> {
        packing
            .bins()
            .iter()
            .map(|bin| bin.iter().map(|&i| instance.size(i)).sum())
            .collect()
    }

    #[test]
    fn test_reference_instance() {
        let instance = Instance::new(vec![4i64, 8, 1, 4, 2, 1], 10).unwrap();
        let packing = BestFitDecreasing::new().pack(&instance);
        // Descending order 8,4,4,2,1,1 gives [8,2], [4,4,1,1].
        assert_eq!(packing.num_bins(), 2);
        let bins = packing.bins();
        assert!(bins.contains(&vec![ii(1), ii(4)]));
        assert!(bins.contains(&vec![ii(0), ii(2), ii(3), ii(5)]));
    }

    #[test]
    fn test_prefers_tightest_bin() {
        // After 7 and 5 open two bins, the 3 goes into the bin holding 7
        // (residual 3) rather than the bin holding 5 (residual 5).
        let instance = Instance::new(vec![7i64, 5, 3], 10).unwrap();
        let packing = BestFitDecreasing::new().pack(&instance);
        assert_eq!(packing.num_bins(), 2);
        assert_eq!(packing.bin_for_item(ii(2)), packing.bin_for_item(ii(0)));
    }

    #[test]
    fn test_three_large_items() {
        let instance = Instance::new(vec![6i64, 6, 6], 10).unwrap();
        let packing = BestFitDecreasing::new().pack(&instance);
        assert_eq!(packing.num_bins(), 3);
    }

    #[test]
    fn test_every_bin_within_capacity() {
        let instance = Instance::new(vec![9i64, 8, 7, 6, 5, 4, 3, 2, 1, 9, 5, 5], 12).unwrap();
        let packing = BestFitDecreasing::new().pack(&instance);
        for fill in fills(&instance, &packing) {
            assert!(fill <= 12);
        }
        let total: usize = packing.bins().iter().map(Vec::len).sum();
        assert_eq!(total, instance.num_items());
    }

    #[test]
    fn test_zero_sized_items_share_a_bin() {
        let instance = Instance::new(vec![0i64, 0, 0], 10).unwrap();
        let packing = BestFitDecreasing::new().pack(&instance);
        assert_eq!(packing.num_bins(), 1);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(Vec::<i64>::new(), 10).unwrap();
        assert_eq!(BestFitDecreasing::new().pack(&instance).num_bins(), 0);
    }
}
