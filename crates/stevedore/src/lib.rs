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

//! # Stevedore
//!
//! One-dimensional bin packing over caller-owned items. Callers hand over a
//! collection of opaque values, a function extracting each value's numeric
//! size, and a bin capacity; stevedore hands back the values regrouped into
//! bins, with every item too large for a single bin separated out.
//!
//! ## Entry Points
//!
//! - Heuristic packers: [`next_fit`], [`first_fit`], [`first_fit_decreasing`],
//!   and [`best_fit_decreasing`], in increasing order of packing quality.
//! - Exact packer: [`bin_completion`], a branch-and-bound solver whose result
//!   is always a provably minimal number of bins.
//! - Lower bounds: [`lower_bound_1`] (volume bound) and [`lower_bound_2`]
//!   (Martello-Toth), valid floors for any feasible packing's bin count.
//!
//! ## Example
//!
//! ```rust
//! let fit = stevedore::best_fit_decreasing(
//!     vec!["crate", "drum", "pallet"],
//!     |item| item.len() as i64,
//!     10,
//! )
//! .unwrap();
//! assert_eq!(fit.bins().len(), 2);
//! assert!(fit.oversized().is_empty());
//! ```

pub mod bound;
pub mod fit;

pub use bound::{BoundReport, lower_bound_1, lower_bound_2};
pub use fit::{
    Fit, best_fit_decreasing, bin_completion, bin_completion_with_outcome, first_fit,
    first_fit_decreasing, next_fit,
};
pub use stevedore_bnb::{BinCompletionSolver, BnbSolverOutcome, TerminationReason};
pub use stevedore_model::error::InstanceError;
