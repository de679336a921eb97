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

use stevedore_core::num::ops::saturating_arithmetic::SaturatingAddVal;
use std::time::Duration;

/// Statistics collected during the execution of the bin-completion solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BnbSolverStatistics {
    /// Total completion nodes expanded.
    pub nodes_explored: u64,
    /// Total feasible bin completions generated.
    pub feasible_sets_generated: u64,
    /// Subtrees cut by the waste budget or the depth bound.
    pub subtrees_pruned: u64,
    /// Improving solutions installed during the search.
    pub solutions_found: u64,
    /// The deepest level reached in the tree, in closed bins.
    pub max_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
    /// The lower bound on the bin count at the root node.
    pub root_lower_bound: u64,
}

impl BnbSolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add_val(1);
    }

    #[inline]
    pub fn on_feasible_sets_generated(&mut self, count: u64) {
        self.feasible_sets_generated = self.feasible_sets_generated.saturating_add_val(count);
    }

    #[inline]
    pub fn on_subtrees_pruned(&mut self, count: u64) {
        self.subtrees_pruned = self.subtrees_pruned.saturating_add_val(count);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add_val(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: u64) {
        self.root_lower_bound = bound;
    }
}

impl std::fmt::Display for BnbSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Bin-Completion Solver Statistics:")?;
        writeln!(f, "  Nodes explored:        {}", self.nodes_explored)?;
        writeln!(f, "  Feasible sets:         {}", self.feasible_sets_generated)?;
        writeln!(f, "  Subtrees pruned:       {}", self.subtrees_pruned)?;
        writeln!(f, "  Solutions found:       {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:     {}", self.max_depth)?;
        writeln!(f, "  Root lower bound:      {}", self.root_lower_bound)?;
        writeln!(f, "  Total time:            {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = BnbSolverStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_feasible_sets_generated(3);
        stats.on_subtrees_pruned(2);
        stats.on_solution_found();
        stats.on_depth_update(4);
        stats.on_depth_update(2);

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.feasible_sets_generated, 3);
        assert_eq!(stats.subtrees_pruned, 2);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.max_depth, 4);
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = BnbSolverStatistics {
            nodes_explored: u64::MAX,
            ..Default::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_display_contains_counters() {
        let mut stats = BnbSolverStatistics::default();
        stats.set_root_lower_bound(7);
        let rendered = format!("{}", stats);
        assert!(rendered.contains("Root lower bound:      7"));
    }
}
