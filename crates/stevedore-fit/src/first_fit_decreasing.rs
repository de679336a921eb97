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

//! First-fit-decreasing heuristic
//!
//! First-fit applied to the items sorted largest first. Placing big items
//! early leaves the small ones to plug leftover gaps, which tightens the
//! result considerably compared to plain first-fit on adversarial orders.

use crate::{first_fit::first_fit_order, strategy::FittingStrategy};
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::{instance::Instance, packing::Packing};

/// The first-fit-decreasing strategy. Stateless and reusable across instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitDecreasing;

impl FirstFitDecreasing {
    pub fn new() -> Self {
        Self
    }
}

impl<T> FittingStrategy<T> for FirstFitDecreasing
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "FirstFitDecreasing"
    }

    fn pack(&self, instance: &Instance<T>) -> Packing {
        let order = instance.items_by_size_descending();
        first_fit_order(instance, &order)
    }
}
