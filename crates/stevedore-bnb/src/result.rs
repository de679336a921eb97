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

use crate::stats::BnbSolverStatistics;
use stevedore_model::packing::Packing;

/// How the solver arrived at its answer.
///
/// Every reason certifies optimality; the variants only differ in the
/// amount of work that was necessary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The heuristic already met the root lower bound; no search ran.
    HeuristicMatchedBound,
    /// The search found a packing whose bin count equals the lower bound.
    LowerBoundReached,
    /// The search exhausted the tree without beating the incumbent,
    /// proving the incumbent optimal.
    SearchExhausted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeuristicMatchedBound => write!(f, "HeuristicMatchedBound"),
            Self::LowerBoundReached => write!(f, "LowerBoundReached"),
            Self::SearchExhausted => write!(f, "SearchExhausted"),
        }
    }
}

/// Result of the bin-completion solver after termination.
///
/// The packing is optimal regardless of the termination reason.
#[derive(Debug, Clone)]
pub struct BnbSolverOutcome {
    packing: Packing,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
}

impl BnbSolverOutcome {
    #[inline]
    pub fn new(
        packing: Packing,
        termination_reason: TerminationReason,
        statistics: BnbSolverStatistics,
    ) -> Self {
        Self {
            packing,
            termination_reason,
            statistics,
        }
    }

    /// Returns the optimal packing.
    #[inline]
    pub fn packing(&self) -> &Packing {
        &self.packing
    }

    /// Consumes the outcome and returns the optimal packing.
    #[inline]
    pub fn into_packing(self) -> Packing {
        self.packing
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> TerminationReason {
        self.termination_reason
    }

    /// Returns the solver statistics.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }
}

impl std::fmt::Display for BnbSolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Optimal packing with {} bins ({})",
            self.packing.num_bins(),
            self.termination_reason
        )?;
        write!(f, "{}", self.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let outcome = BnbSolverOutcome::new(
            Packing::empty(),
            TerminationReason::HeuristicMatchedBound,
            BnbSolverStatistics::default(),
        );
        assert_eq!(outcome.packing().num_bins(), 0);
        assert_eq!(
            outcome.termination_reason(),
            TerminationReason::HeuristicMatchedBound
        );
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }

    #[test]
    fn test_display_names_reason() {
        let outcome = BnbSolverOutcome::new(
            Packing::empty(),
            TerminationReason::SearchExhausted,
            BnbSolverStatistics::default(),
        );
        assert!(format!("{}", outcome).contains("SearchExhausted"));
    }
}
