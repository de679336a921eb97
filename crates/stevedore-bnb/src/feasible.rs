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

//! Feasible bin completions
//!
//! A feasible set is a subset of the unplaced items that fits into one bin
//! and contains the largest unplaced item. Fixing the largest item as the
//! seed removes bin-permutation symmetry: some bin must hold it, and bins
//! are interchangeable, so it may as well be the next one.
//!
//! Generation is a depth-first include/exclude walk over the remaining tail
//! items. A subtree is cut as soon as its best reachable sum, the current
//! sum plus everything not yet examined, falls below the caller's minimum
//! completion sum. Completions below that threshold would leave more slack
//! in the bin than the incumbent allows, so they cannot participate in an
//! improving solution.
//!
//! Membership is recorded in a `FixedBitSet` over tail positions, keeping
//! each emitted set small and cheap to clone.

use fixedbitset::FixedBitSet;
use stevedore_core::num::{constants::Zero, ops::SaturatingAddVal, solver::SolverNumeric};
use stevedore_model::{index::ItemIndex, instance::Instance};

/// One feasible completion of the next bin.
///
/// Positions refer to the tail slice the set was generated from; the tail
/// itself is not stored. Position 0, the seed, is always a member.
#[derive(Debug, Clone)]
pub struct FeasibleSet<T> {
    included: FixedBitSet,
    sum: T,
}

impl<T> FeasibleSet<T>
where
    T: SolverNumeric,
{
    /// Returns the total size of the items in this set.
    #[inline(always)]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Returns the number of items in this set.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.included.count_ones(..)
    }

    /// Checks whether this set contains every tail item.
    #[inline]
    pub fn consumes_entire_tail(&self) -> bool {
        self.included.count_ones(..) == self.included.len()
    }

    /// Returns the items of this set, in tail order.
    pub fn included_items(&self, tail: &[ItemIndex]) -> Vec<ItemIndex> {
        debug_assert_eq!(tail.len(), self.included.len());
        self.included.ones().map(|pos| tail[pos]).collect()
    }

    /// Returns the tail items not in this set, preserving tail order.
    ///
    /// The tail is sorted by size descending, so the returned slice is a
    /// valid tail for the child node without re-sorting.
    pub fn excluded_items(&self, tail: &[ItemIndex]) -> Vec<ItemIndex> {
        debug_assert_eq!(tail.len(), self.included.len());
        tail.iter()
            .enumerate()
            .filter(|(pos, _)| !self.included.contains(*pos))
            .map(|(_, &item)| item)
            .collect()
    }
}

/// Enumerates every feasible completion of the next bin.
///
/// `tail` holds the unplaced items sorted by size descending; its first
/// element seeds every set. Sets whose total falls below `min_sum` are
/// discarded, and whole subtrees are cut early when even including all
/// unexamined items cannot reach it. Returns the surviving sets together
/// with the number of subtrees cut.
///
/// Include branches are explored before exclude branches, so fuller
/// completions surface first.
pub fn generate_feasible_sets<T>(
    instance: &Instance<T>,
    tail: &[ItemIndex],
    min_sum: T,
) -> (Vec<FeasibleSet<T>>, u64)
where
    T: SolverNumeric,
{
    if tail.is_empty() {
        return (Vec::new(), 0);
    }

    let capacity = instance.capacity();
    let sizes: Vec<T> = tail.iter().map(|&item| instance.size(item)).collect();

    // unexamined[h] is the total size of sizes[h..].
    let mut unexamined = vec![T::ZERO; sizes.len() + 1];
    for h in (0..sizes.len()).rev() {
        unexamined[h] = unexamined[h + 1].saturating_add_val(sizes[h]);
    }

    let mut sets = Vec::new();
    let mut pruned = 0u64;
    let mut current = FixedBitSet::with_capacity(sizes.len());
    current.insert(0);

    expand(
        &sizes,
        &unexamined,
        capacity,
        min_sum,
        1,
        sizes[0],
        &mut current,
        &mut sets,
        &mut pruned,
    );

    (sets, pruned)
}

#[allow(clippy::too_many_arguments)]
fn expand<T>(
    sizes: &[T],
    unexamined: &[T],
    capacity: T,
    min_sum: T,
    head: usize,
    sum: T,
    current: &mut FixedBitSet,
    sets: &mut Vec<FeasibleSet<T>>,
    pruned: &mut u64,
) where
    T: SolverNumeric,
{
    // Even taking every remaining item cannot reach the minimum sum.
    if sum.saturating_add_val(unexamined[head]) < min_sum {
        *pruned += 1;
        return;
    }

    if head == sizes.len() {
        sets.push(FeasibleSet {
            included: current.clone(),
            sum,
        });
        return;
    }

    let size = sizes[head];
    if sum.saturating_add_val(size) <= capacity {
        current.insert(head);
        expand(
            sizes,
            unexamined,
            capacity,
            min_sum,
            head + 1,
            sum + size,
            current,
            sets,
            pruned,
        );
        current.remove(head);
    }

    expand(
        sizes, unexamined, capacity, min_sum, head + 1, sum, current, sets, pruned,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn sums(sets: &[FeasibleSet<i64>]) -> Vec<i64> {
        sets.iter().map(|s| s.sum()).collect()
    }

    #[test]
    fn test_seed_is_always_included() {
        let instance = Instance::new(vec![8i64, 4, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, _) = generate_feasible_sets(&instance, &tail, 0);
        for set in &sets {
            assert!(set.included_items(&tail).contains(&ii(0)));
        }
    }

    #[test]
    fn test_enumerates_all_subsets_within_capacity() {
        // Seed 8; companions 4 and 2. Only {8,2} and {8} fit into 10.
        let instance = Instance::new(vec![8i64, 4, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, _) = generate_feasible_sets(&instance, &tail, 0);
        assert_eq!(sums(&sets), vec![10, 8]);
    }

    #[test]
    fn test_include_first_ordering() {
        // All subsets of {3,2} fit next to the 5; include-first order is
        // {5,3,2}, {5,3}, {5,2}, {5}.
        let instance = Instance::new(vec![5i64, 3, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, _) = generate_feasible_sets(&instance, &tail, 0);
        assert_eq!(sums(&sets), vec![10, 8, 7, 5]);
    }

    #[test]
    fn test_min_sum_discards_weak_completions() {
        let instance = Instance::new(vec![5i64, 3, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, pruned) = generate_feasible_sets(&instance, &tail, 8);
        assert_eq!(sums(&sets), vec![10, 8]);
        assert!(pruned > 0);
    }

    #[test]
    fn test_unreachable_min_sum_yields_no_sets() {
        // A lone 6 cannot reach a minimum completion sum of 8.
        let instance = Instance::new(vec![6i64, 6, 6], 10).unwrap();
        let tail = vec![ii(0)];
        let (sets, pruned) = generate_feasible_sets(&instance, &tail, 8);
        assert!(sets.is_empty());
        assert_eq!(pruned, 1);
    }

    #[test]
    fn test_excluded_items_preserve_tail_order() {
        let instance = Instance::new(vec![8i64, 4, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, _) = generate_feasible_sets(&instance, &tail, 0);
        // First set is {8,2}; excluded must be [4] in tail order.
        assert_eq!(sets[0].excluded_items(&tail), vec![ii(1)]);
        assert_eq!(sets[0].included_items(&tail), vec![ii(0), ii(2)]);
    }

    #[test]
    fn test_consumes_entire_tail() {
        let instance = Instance::new(vec![5i64, 3, 2], 10).unwrap();
        let tail = vec![ii(0), ii(1), ii(2)];
        let (sets, _) = generate_feasible_sets(&instance, &tail, 0);
        assert!(sets[0].consumes_entire_tail());
        assert!(!sets[1].consumes_entire_tail());
    }

    #[test]
    fn test_empty_tail() {
        let instance = Instance::new(vec![5i64], 10).unwrap();
        let (sets, pruned) = generate_feasible_sets(&instance, &[], 0);
        assert!(sets.is_empty());
        assert_eq!(pruned, 0);
    }
}
