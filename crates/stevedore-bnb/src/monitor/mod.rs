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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait and `PruneReason` for observing the
//! bin-completion search. Monitors are purely observational: they see every
//! lifecycle event but cannot steer or stop the search.
//!
//! Lifecycle highlights
//! - enter → node expanded → {feasible sets | prune} → solution → exit
//! - `BnbSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; avoid blocking I/O in hot paths.

pub mod log;
pub mod no_op;

use crate::stats::BnbSolverStatistics;
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::instance::Instance;

/// Reasons for pruning a subtree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// No completion of the node could stay within the waste budget.
    WasteBound,
    /// Descending further could not use fewer bins than the incumbent.
    DepthBound,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::WasteBound => write!(f, "WasteBound"),
            PruneReason::DepthBound => write!(f, "DepthBound"),
        }
    }
}

/// Trait for observing the search process of the solver.
pub trait SearchMonitor<T>
where
    T: SolverNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, instance: &Instance<T>, statistics: &BnbSolverStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics);
    /// Called when a node is expanded. `depth` counts closed bins,
    /// `tail_len` the items still unplaced.
    fn on_node_expanded(&mut self, depth: usize, tail_len: usize, statistics: &BnbSolverStatistics);
    /// Called after the feasible completions of a node were generated.
    fn on_feasible_sets_generated(&mut self, count: usize, statistics: &BnbSolverStatistics);
    /// Called when a subtree is pruned.
    fn on_prune(&mut self, reason: PruneReason, statistics: &BnbSolverStatistics);
    /// Called when an improving solution is installed.
    fn on_solution_found(&mut self, num_bins: usize, statistics: &BnbSolverStatistics);
}

impl<T> std::fmt::Debug for dyn SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn SearchMonitor<T>
where
    T: SolverNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
