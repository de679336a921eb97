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

//! Bin-completion branch-and-bound solver.
//!
//! This module implements a stateful search engine that packs bins one at a
//! time. The `BinCompletionSolver` owns a reusable node arena, seeds its
//! incumbent with best-fit-decreasing, and only searches when the heuristic
//! leaves a gap to the Martello-Toth lower bound. A search session object
//! encapsulates per-run state, statistics, and timing, enabling reproducible
//! and debuggable runs.
//!
//! The descent is depth-first over bin completions. Every node closes one
//! bin, chosen among the feasible completions seeded by the largest
//! unplaced item; completions too small to stay within the incumbent's
//! waste budget are never generated, and children that cannot end below the
//! incumbent's bin count are cut before they are pushed. A packing that
//! reaches the lower bound stops the search outright; exhausting the tree
//! instead certifies the incumbent. Either way the result is optimal.

use crate::{
    bounds,
    feasible::generate_feasible_sets,
    monitor::{PruneReason, SearchMonitor},
    node::{NodeArena, NodeIndex},
    result::{BnbSolverOutcome, TerminationReason},
    state::SolutionState,
    stats::BnbSolverStatistics,
};
use stevedore_core::num::{
    ops::{SaturatingAddVal, SaturatingSubVal},
    solver::SolverNumeric,
};
use stevedore_fit::{BestFitDecreasing, FittingStrategy};
use stevedore_model::{index::ItemIndex, instance::Instance, packing::Packing};

/// An exact solver for one-dimensional bin packing using bin-completion
/// branch-and-bound.
///
/// The solver keeps its node arena across solves; a fresh run reuses the
/// previous run's allocation.
#[derive(Debug, Clone)]
pub struct BinCompletionSolver<T> {
    arena: NodeArena<T>,
}

impl<T> Default for BinCompletionSolver<T>
where
    T: SolverNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinCompletionSolver<T>
where
    T: SolverNumeric,
{
    /// Creates a new solver instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
        }
    }

    /// Creates a new solver instance with storage preallocated for an
    /// instance of the given size.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(num_items.saturating_mul(2)),
        }
    }

    /// Solves the instance to proven optimality.
    ///
    /// Best-fit-decreasing provides the initial incumbent. When it already
    /// meets the root lower bound the heuristic packing is returned without
    /// any search; otherwise the completion tree is explored depth-first
    /// until the bound is reached or the tree is exhausted.
    pub fn solve<S>(&mut self, instance: &Instance<T>, mut monitor: S) -> BnbSolverOutcome
    where
        S: SearchMonitor<T>,
    {
        let start_time = std::time::Instant::now();
        let mut stats = BnbSolverStatistics::default();

        let lower_bound = bounds::lower_bound_2(instance);
        stats.set_root_lower_bound(lower_bound as u64);
        monitor.on_enter_search(instance, &stats);

        let heuristic = BestFitDecreasing::new().pack(instance);
        if heuristic.num_bins() <= lower_bound {
            stats.set_total_time(start_time.elapsed());
            monitor.on_exit_search(&stats);
            return BnbSolverOutcome::new(
                heuristic,
                TerminationReason::HeuristicMatchedBound,
                stats,
            );
        }

        self.arena.clear();
        let root = self.arena.root(instance.items_by_size_descending());
        let state = SolutionState::new(
            lower_bound,
            instance.total_size(),
            instance.capacity(),
            heuristic.bins(),
        );

        let mut session = BnbSolverSearchSession {
            arena: &mut self.arena,
            instance,
            monitor: &mut monitor,
            state,
            stats,
        };

        let bound_hit = session.next_completion_level(root);
        let BnbSolverSearchSession { state, stats, .. } = session;
        let mut stats = stats;

        let (bins, reason) = match bound_hit {
            Some(bins) => (bins, TerminationReason::LowerBoundReached),
            None => (state.into_best(), TerminationReason::SearchExhausted),
        };
        let packing = Packing::from_bins(bins, instance.num_items());

        stats.set_total_time(start_time.elapsed());
        monitor.on_exit_search(&stats);
        self.arena.clear();

        BnbSolverOutcome::new(packing, reason, stats)
    }
}

/// Per-run search state. Borrows the solver's arena so the storage outlives
/// the run.
struct BnbSolverSearchSession<'a, T, S> {
    arena: &'a mut NodeArena<T>,
    instance: &'a Instance<T>,
    monitor: &'a mut S,
    state: SolutionState<T>,
    stats: BnbSolverStatistics,
}

impl<'a, T, S> BnbSolverSearchSession<'a, T, S>
where
    T: SolverNumeric,
    S: SearchMonitor<T>,
{
    /// Expands one node: enumerates the completions of the next bin and
    /// descends into each child in turn.
    ///
    /// Returns the finished bin lists as soon as a packing matches the
    /// root lower bound, or `None` when the subtree is exhausted.
    fn next_completion_level(&mut self, node: NodeIndex) -> Option<Vec<Vec<ItemIndex>>> {
        // Child nodes may reallocate the arena, so the tail is copied out.
        let (tail, waste, depth) = {
            let current = self.arena.get(node);
            (
                current.tail().to_vec(),
                current.accumulated_waste(),
                current.depth(),
            )
        };
        debug_assert!(
            !tail.is_empty(),
            "called `BnbSolverSearchSession::next_completion_level` with an empty tail"
        );

        self.stats.on_node_explored();
        self.stats.on_depth_update(depth as u64);
        self.monitor.on_node_expanded(depth, tail.len(), &self.stats);

        let min_sum = self.state.min_completion_sum(waste);
        let (sets, pruned) = generate_feasible_sets(self.instance, &tail, min_sum);
        self.stats.on_feasible_sets_generated(sets.len() as u64);
        self.monitor
            .on_feasible_sets_generated(sets.len(), &self.stats);
        if pruned > 0 {
            self.stats.on_subtrees_pruned(pruned);
            self.monitor.on_prune(PruneReason::WasteBound, &self.stats);
        }

        let capacity = self.instance.capacity();
        for set in &sets {
            let bin = set.included_items(&tail);

            if set.consumes_entire_tail() {
                let total_bins = depth + 1;
                debug_assert!(
                    total_bins >= self.state.lower_bound(),
                    "packing with {} bins beats the lower bound of {}",
                    total_bins,
                    self.state.lower_bound()
                );
                if total_bins == self.state.lower_bound() {
                    self.stats.on_solution_found();
                    self.monitor.on_solution_found(total_bins, &self.stats);
                    return Some(self.arena.reconstruct(node, bin));
                }
                if self.state.try_improve(self.arena.reconstruct(node, bin)) {
                    self.stats.on_solution_found();
                    self.monitor.on_solution_found(total_bins, &self.stats);
                }
                continue;
            }

            // A child closes bin `depth + 1` and still has items left, so
            // any packing through it uses at least `depth + 2` bins.
            let child_depth = depth + 1;
            if child_depth + 1 >= self.state.best_bin_count() {
                self.stats.on_subtrees_pruned(1);
                self.monitor.on_prune(PruneReason::DepthBound, &self.stats);
                continue;
            }

            let child_waste = waste.saturating_add_val(capacity.saturating_sub_val(set.sum()));
            let child_tail = set.excluded_items(&tail);
            let child = self.arena.push_child(node, bin, child_tail, child_waste);
            if let Some(bins) = self.next_completion_level(child) {
                return Some(bins);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;

    fn solve(sizes: Vec<i64>, capacity: i64) -> BnbSolverOutcome {
        let instance = Instance::new(sizes, capacity).unwrap();
        let mut solver = BinCompletionSolver::new();
        solver.solve(&instance, NoOperationMonitor::new())
    }

    fn bin_fills(sizes: &[i64], capacity: i64, outcome: &BnbSolverOutcome) -> Vec<i64> {
        let instance = Instance::new(sizes.to_vec(), capacity).unwrap();
        outcome
            .packing()
            .bins()
            .iter()
            .map(|bin| bin.iter().map(|&i| instance.size(i)).sum())
            .collect()
    }

    #[test]
    fn test_heuristic_matches_bound() {
        let outcome = solve(vec![4, 8, 1, 4, 2, 1], 10);
        assert_eq!(outcome.packing().num_bins(), 2);
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::HeuristicMatchedBound
        );
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }

    #[test]
    fn test_unsplittable_items() {
        let outcome = solve(vec![6, 6, 6], 10);
        assert_eq!(outcome.packing().num_bins(), 3);
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::HeuristicMatchedBound
        );
    }

    #[test]
    fn test_search_closes_heuristic_gap() {
        // Best-fit-decreasing needs 3 bins, the optimum is 2: [5,4,3] twice.
        let sizes = vec![5i64, 5, 4, 4, 3, 3];
        let outcome = solve(sizes.clone(), 12);
        assert_eq!(outcome.packing().num_bins(), 2);
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::LowerBoundReached
        );
        assert!(outcome.statistics().nodes_explored > 0);
        assert_eq!(outcome.statistics().root_lower_bound, 2);
        for fill in bin_fills(&sizes, 12, &outcome) {
            assert!(fill <= 12);
        }
    }

    #[test]
    fn test_solution_covers_every_item_once() {
        let sizes = vec![5i64, 5, 4, 4, 3, 3];
        let outcome = solve(sizes, 12);
        let packing = outcome.packing();
        assert_eq!(packing.num_items(), 6);
        let covered: usize = packing.bins().iter().map(Vec::len).sum();
        assert_eq!(covered, 6);
    }

    #[test]
    fn test_empty_instance() {
        let outcome = solve(vec![], 10);
        assert_eq!(outcome.packing().num_bins(), 0);
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::HeuristicMatchedBound
        );
    }

    #[test]
    fn test_solver_is_reusable() {
        let mut solver = BinCompletionSolver::new();
        let a = Instance::new(vec![5i64, 5, 4, 4, 3, 3], 12).unwrap();
        let b = Instance::new(vec![6i64, 6, 6], 10).unwrap();
        assert_eq!(solver.solve(&a, NoOperationMonitor::new()).packing().num_bins(), 2);
        assert_eq!(solver.solve(&b, NoOperationMonitor::new()).packing().num_bins(), 3);
        assert_eq!(solver.solve(&a, NoOperationMonitor::new()).packing().num_bins(), 2);
    }

    #[test]
    fn test_exhausted_search_certifies_incumbent() {
        // With the lower bound forced to 1 the search can never reach it,
        // every completion falls below the minimum sum, and the incumbent
        // comes back certified by exhaustion.
        let instance = Instance::new(vec![6i64, 6, 6], 10).unwrap();
        let heuristic = BestFitDecreasing::new().pack(&instance);
        assert_eq!(heuristic.num_bins(), 3);

        let mut arena = NodeArena::new();
        let root = arena.root(instance.items_by_size_descending());
        let mut monitor = NoOperationMonitor::new();
        let mut session = BnbSolverSearchSession {
            arena: &mut arena,
            instance: &instance,
            monitor: &mut monitor,
            state: SolutionState::new(
                1,
                instance.total_size(),
                instance.capacity(),
                heuristic.bins(),
            ),
            stats: BnbSolverStatistics::default(),
        };

        assert!(session.next_completion_level(root).is_none());
        assert!(session.stats.subtrees_pruned > 0);
        assert_eq!(session.state.best_bin_count(), 3);
    }

    #[test]
    fn test_optimum_never_beats_lower_bound() {
        let cases: Vec<(Vec<i64>, i64)> = vec![
            (vec![4, 8, 1, 4, 2, 1], 10),
            (vec![6, 6, 6], 10),
            (vec![5, 5, 4, 4, 3, 3], 12),
            (vec![9, 1, 9, 1, 9, 1], 10),
            (vec![7, 6, 5, 4, 3, 2, 1], 10),
        ];
        for (sizes, capacity) in cases {
            let instance = Instance::new(sizes, capacity).unwrap();
            let lb = bounds::lower_bound_2(&instance);
            let mut solver = BinCompletionSolver::new();
            let outcome = solver.solve(&instance, NoOperationMonitor::new());
            assert!(outcome.packing().num_bins() >= lb);
        }
    }
}
