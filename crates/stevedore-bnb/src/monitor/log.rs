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
use std::time::{Duration, Instant};

/// A monitor that prints a progress table to stdout.
///
/// The wall clock is only consulted every `clock_check_mask + 1` expanded
/// nodes, and a row is printed at most once per `log_interval`.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_bins: Option<usize>,
}

impl LogMonitor {
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_bins: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<7} | {:<10} | {:<14} | {:<14}",
            "Elapsed", "Nodes", "Depth", "Best Bins", "Feasible Sets", "Pruned"
        );
        println!("{}", "-".repeat(82));
    }

    #[inline(always)]
    fn log_line(&mut self, depth: usize, stats: &BnbSolverStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_bins_str = match self.best_bins {
            Some(bins) => format!("{}", bins),
            None => "Inf".to_string(),
        };
        let elapsed_field = format!("{:.1}s", elapsed);

        println!(
            "{:<9} | {:<14} | {:<7} | {:<10} | {:<14} | {:<14}",
            elapsed_field,
            stats.nodes_explored,
            depth,
            best_bins_str,
            stats.feasible_sets_generated,
            stats.subtrees_pruned
        );

        self.last_log_time = now;
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> SearchMonitor<T> for LogMonitor
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, _instance: &Instance<T>, _statistics: &BnbSolverStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_bins = None; // Reset
        self.print_header();
    }

    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        println!("{}", "-".repeat(82));
        println!("Search finished.");
        print!("{}", statistics);
    }

    fn on_node_expanded(&mut self, depth: usize, _tail_len: usize, stats: &BnbSolverStatistics) {
        if (stats.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(depth, stats);
        }
    }

    fn on_feasible_sets_generated(&mut self, _count: usize, _statistics: &BnbSolverStatistics) {}

    fn on_prune(&mut self, _reason: PruneReason, _statistics: &BnbSolverStatistics) {}

    fn on_solution_found(&mut self, num_bins: usize, _statistics: &BnbSolverStatistics) {
        self.best_bins = Some(num_bins);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{monitor::no_op::NoOperationMonitor, solver::BinCompletionSolver};

    #[test]
    fn test_logging_does_not_change_the_result() {
        let instance = Instance::new(vec![5i64, 5, 4, 4, 3, 3], 12).unwrap();
        let mut solver = BinCompletionSolver::new();
        let logged = solver.solve(&instance, LogMonitor::default());
        let silent = solver.solve(&instance, NoOperationMonitor::new());
        assert_eq!(logged.packing(), silent.packing());
    }
}
