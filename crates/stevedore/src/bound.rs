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

//! Lower-bound entry points.
//!
//! Both bounds are valid floors for the bin count of any feasible packing
//! of the given items. Oversized items never count towards a bound; their
//! number is reported alongside so callers can account for them.

use stevedore_bnb::bounds;
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::{error::InstanceError, instance::Instance};

/// A lower bound on the bin count, together with the number of items that
/// were excluded because their size exceeds the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundReport {
    /// The computed lower bound on the number of bins.
    pub bound: usize,
    /// The number of items excluded for exceeding the capacity.
    pub oversized: usize,
}

/// Computes the volume lower bound: total size divided by capacity,
/// rounded up.
pub fn lower_bound_1<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<BoundReport, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    let instance = prepare(items, size_of, capacity)?;
    Ok(BoundReport {
        bound: bounds::lower_bound_1(&instance),
        oversized: instance.num_oversized(),
    })
}

/// Computes the Martello-Toth lower bound, which accounts for capacity
/// wasted next to large items. Always at least as strong as
/// [`lower_bound_1`].
pub fn lower_bound_2<I, T, S, F>(
    items: I,
    size_of: F,
    capacity: S,
) -> Result<BoundReport, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    let instance = prepare(items, size_of, capacity)?;
    Ok(BoundReport {
        bound: bounds::lower_bound_2(&instance),
        oversized: instance.num_oversized(),
    })
}

fn prepare<I, T, S, F>(items: I, mut size_of: F, capacity: S) -> Result<Instance<S>, InstanceError>
where
    I: IntoIterator<Item = T>,
    S: SolverNumeric,
    F: FnMut(&T) -> S,
{
    Instance::validate_capacity(capacity)?;
    let sizes: Vec<S> = items.into_iter().map(|item| size_of(&item)).collect();
    Instance::new(sizes, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(size: &i64) -> i64 {
        *size
    }

    #[test]
    fn test_volume_bound() {
        let report = lower_bound_1(vec![4i64, 8, 1, 4, 2, 1], identity, 10).unwrap();
        assert_eq!(report, BoundReport { bound: 2, oversized: 0 });
    }

    #[test]
    fn test_waste_aware_bound_is_tighter() {
        // 6+6=12 overflows a bin of 10, so three bins are unavoidable even
        // though the total volume only forces two.
        let l1 = lower_bound_1(vec![6i64, 6, 6], identity, 10).unwrap();
        let l2 = lower_bound_2(vec![6i64, 6, 6], identity, 10).unwrap();
        assert_eq!(l1.bound, 2);
        assert_eq!(l2.bound, 3);
    }

    #[test]
    fn test_oversized_items_are_counted_not_bounded() {
        let report = lower_bound_2(vec![7i64, 3, 2], identity, 5).unwrap();
        assert_eq!(report.oversized, 1);
        assert_eq!(report.bound, 1);
    }

    #[test]
    fn test_empty_input() {
        let report = lower_bound_2(Vec::<i64>::new(), identity, 10).unwrap();
        assert_eq!(report, BoundReport { bound: 0, oversized: 0 });
    }

    #[test]
    fn test_invalid_capacity() {
        let result = lower_bound_1(vec![1i64], identity, -3);
        assert_eq!(result.unwrap_err(), InstanceError::NonPositiveCapacity);
    }
}
