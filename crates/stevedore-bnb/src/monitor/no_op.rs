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

use crate::{
    monitor::{PruneReason, SearchMonitor},
    stats::BnbSolverStatistics,
};
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::instance::Instance;

/// A no-operation monitor that implements the `SearchMonitor` trait
/// but does nothing on any of the events.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor<T>
where
    T: SolverNumeric,
{
    _phantom: std::marker::PhantomData<T>,
}

impl<T> NoOperationMonitor<T>
where
    T: SolverNumeric,
{
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> SearchMonitor<T> for NoOperationMonitor<T>
where
    T: SolverNumeric,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, _instance: &Instance<T>, _statistics: &BnbSolverStatistics) {}

    #[inline(always)]
    fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {}

    #[inline(always)]
    fn on_node_expanded(
        &mut self,
        _depth: usize,
        _tail_len: usize,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    #[inline(always)]
    fn on_feasible_sets_generated(&mut self, _count: usize, _statistics: &BnbSolverStatistics) {}

    #[inline(always)]
    fn on_prune(&mut self, _reason: PruneReason, _statistics: &BnbSolverStatistics) {}

    #[inline(always)]
    fn on_solution_found(&mut self, _num_bins: usize, _statistics: &BnbSolverStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_callbacks_are_inert() {
        let instance = Instance::new(vec![3i64, 4], 10).unwrap();
        let stats = BnbSolverStatistics::default();
        let mut monitor = NoOperationMonitor::<i64>::new();

        monitor.on_enter_search(&instance, &stats);
        monitor.on_node_expanded(0, 2, &stats);
        monitor.on_feasible_sets_generated(1, &stats);
        monitor.on_prune(PruneReason::WasteBound, &stats);
        monitor.on_solution_found(2, &stats);
        monitor.on_exit_search(&stats);

        assert_eq!(monitor.name(), "NoOperationMonitor");
    }
}
