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

//! # Stevedore BnB
//!
//! Exact bin packing via bin-completion branch-and-bound.
//!
//! The solver fills bins one at a time. At every node the largest unplaced
//! item seeds the next bin, all maximal feasible completions of that bin are
//! enumerated, and each completion spawns a child node. Two bounds drive the
//! pruning:
//!
//! - A lower bound on the bin count, computed once at the root
//!   (`bounds::lower_bound_2`, the Martello-Toth waste recurrence). When
//!   the best-fit-decreasing heuristic already meets it, no search runs.
//! - A waste budget derived from the incumbent: a node whose accumulated
//!   slack exceeds the budget cannot beat the incumbent and is cut off.
//!
//! Every outcome is certified optimal. The search either reaches the lower
//! bound, or exhausts the tree and thereby proves the incumbent optimal.
//!
//! ## Modules
//!
//! - `bounds`: lower bounds on the number of bins.
//! - `feasible`: enumeration of maximal feasible bin completions.
//! - `node`: parent-linked node arena for cheap solution reconstruction.
//! - `state`: incumbent tracking and the pruning quantities derived from it.
//! - `solver`: the `BinCompletionSolver` driver.
//! - `monitor`: observational hooks into the search.
//! - `stats`, `result`: telemetry and the outcome type.

pub mod bounds;
pub mod feasible;
pub mod monitor;
pub mod node;
pub mod result;
pub mod solver;
pub mod state;
pub mod stats;

pub use result::{BnbSolverOutcome, TerminationReason};
pub use solver::BinCompletionSolver;
