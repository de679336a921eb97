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

//! Item-level packing entry points.
//!
//! Every function in this module follows the same contract: take ownership
//! of a collection of items, extract sizes through a caller-supplied
//! closure, pack the items that fit, and hand the items back grouped into
//! bins. Items whose size alone exceeds the capacity never participate in
//! packing and are returned separately, in input order.
//!
//! The capacity is validated before any item is sized; a non-positive
//! capacity fails without the size closure ever being called.

use stevedore_bnb::{
    BinCompletionSolver, BnbSolverOutcome, monitor::no_op::NoOperationMonitor,
};
use stevedore_core::num::solver::SolverNumeric;
use stevedore_fit::{
    BestFitDecreasing, FirstFit, FirstFitDecreasing, FittingStrategy, NextFit,
};
use stevedore_model::{error::InstanceError, instance::Instance, packing::Packing};

/// The result of a packing call: the caller's items regrouped into bins,
/// plus the items too large for any bin.
///
/// Bin contents preserve the relative input order of their items, and the
/// oversized list preserves input order as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fit<T> {
    bins: Vec<Vec<T>>,
    oversized: Vec<T>,
}

impl<T> Fit<T> {
    /// The packed bins.
    #[inline]
    pub fn bins(&self) -> &[Vec<T>] {
        &self.bins
    }

    /// The items whose size exceeds the capacity, in input order.
    #[inline]
    pub fn oversized(&self) -> &[T] {
        &self.oversized
    }

    /// The number of bins used.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// Consumes the fit, returning the bins and the oversized items.
    #[inline]
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<T>) {
        (self.bins, self.oversized)
    }
}

/// Packs items with the next-fit heuristic: one open bin at a time, closed
/// as soon as an item does not fit.
pub fn next_fit<I, T, S, F>(items: I, size_of: F, capacity: S) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    fit_with(items, size_of, capacity, &NextFit::new())
}

/// Packs items with the first-fit heuristic: each item joins the first bin
/// with enough residual capacity.
pub fn first_fit<I, T, S, F>(items: I, size_of: F, capacity: S) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    fit_with(items, size_of, capacity, &FirstFit::new())
}

/// Packs items with first-fit applied in descending size order.
pub fn first_fit_decreasing<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    fit_with(items, size_of, capacity, &FirstFitDecreasing::new())
}

/// Packs items with the best-fit-decreasing heuristic: items in descending
/// size order, each joining the fullest bin that can still accept it.
///
/// This is the strongest heuristic in the crate and seeds the exact solver.
pub fn best_fit_decreasing<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    fit_with(items, size_of, capacity, &BestFitDecreasing::new())
}

/// Packs items into a provably minimal number of bins with the
/// bin-completion branch-and-bound solver.
pub fn bin_completion<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    bin_completion_with_outcome(items, size_of, capacity).map(|(fit, _)| fit)
}

/// Like [`bin_completion`], but additionally returns the solver outcome
/// with its termination reason and search statistics.
pub fn bin_completion_with_outcome<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<(Fit<T>, BnbSolverOutcome), InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    let (items, instance) = prepare(items, size_of, capacity)?;
    let mut solver = BinCompletionSolver::preallocated(instance.num_items());
    let outcome = solver.solve(&instance, NoOperationMonitor::new());
    let fit = regroup(items, &instance, outcome.packing());
    Ok((fit, outcome))
}

fn fit_with<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
    strategy: &dyn FittingStrategy<S>,
) -> Result<Fit<T>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    let (items, instance) = prepare(items, size_of, capacity)?;
    let packing = strategy.pack(&instance);
    Ok(regroup(items, &instance, &packing))
}

/// Collects the items and builds the packing instance over their sizes.
/// The capacity check runs first so that an invalid configuration fails
/// before the size closure sees any item.
fn prepare<I, T, S, F>(
    items: I,
    mut size_of: F,
    capacity: S,
) -> Result<(Vec<T>, Instance<S>), InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    Instance::validate_capacity(capacity)?;
    let items: Vec<T> = items.into_iter().collect();
    let sizes: Vec<S> = items.iter().map(&mut size_of).collect();
    let instance = Instance::new(sizes, capacity)?;
    Ok((items, instance))
}

/// Moves the caller's items back out of the flat input vector into the
/// bins of the packing. Every input position is consumed exactly once,
/// either by a bin or by the oversized list.
fn regroup<T, S>(items: Vec<T>, instance: &Instance<S>, packing: &Packing) -> Fit<T>
where
    S: SolverNumeric,
{
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let bins = packing
        .bins()
        .into_iter()
        .map(|bin| {
            bin.into_iter()
                .map(|item| {
                    slots[instance.original_position(item)]
                        .take()
                        .expect("item placed in more than one bin")
                })
                .collect()
        })
        .collect();
    let oversized = instance
        .oversized_positions()
        .iter()
        .map(|&position| {
            slots[position]
                .take()
                .expect("oversized item placed in a bin")
        })
        .collect();
    Fit { bins, oversized }
}
