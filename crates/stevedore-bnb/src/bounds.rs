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

//! Lower bounds on the number of bins
//!
//! Two bounds of increasing strength. `lower_bound_1` is the continuous
//! relaxation, total size divided by capacity rounded up. `lower_bound_2`
//! is the Martello-Toth waste bound: it walks the items largest first,
//! matches each large item with the small items that could share its bin,
//! and charges any room no small item can fill as provable waste. The
//! waste is added to the total size before dividing, so the result
//! dominates `lower_bound_1` while staying a true lower bound.
//!
//! Both bounds depend only on the multiset of sizes, never on input order.

use num_traits::ToPrimitive;
use stevedore_core::{
    algorithm::partition_index,
    num::{constants::Zero, solver::SolverNumeric},
};
use stevedore_model::instance::Instance;

/// Ceiling division of two non-negative values, as a bin count.
#[inline]
fn ceil_div<T>(numerator: T, denominator: T) -> usize
where
    T: SolverNumeric,
{
    debug_assert!(
        denominator > T::ZERO,
        "called `ceil_div` with non-positive denominator: {}",
        denominator
    );
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let bins = if remainder > T::ZERO {
        quotient + T::one()
    } else {
        quotient
    };
    bins.to_usize().unwrap_or(usize::MAX)
}

/// The continuous lower bound: total item size over capacity, rounded up.
///
/// Cheap and order-independent, but blind to how the sizes combine. Three
/// items of size 6 in bins of 10 have a total of 18 and thus a bound of 2,
/// even though no two of them share a bin.
pub fn lower_bound_1<T>(instance: &Instance<T>) -> usize
where
    T: SolverNumeric,
{
    ceil_div(instance.total_size(), instance.capacity())
}

/// The Martello-Toth lower bound.
///
/// Processes items largest first. Each large item claims a bin; the small
/// items that fit into its leftover room are carried along as potential
/// companions. Carried size that falls short of the leftover room becomes
/// waste no packing can avoid, and the waste inflates the continuous bound:
///
/// ```text
/// lb2 = ceil((waste + total_size) / capacity)
/// ```
///
/// Always at least as strong as [`lower_bound_1`] and exact noticeably more
/// often, e.g. it proves that three items of size 6 need three bins of 10.
pub fn lower_bound_2<T>(instance: &Instance<T>) -> usize
where
    T: SolverNumeric,
{
    let capacity = instance.capacity();
    // Ascending, so the largest remaining item is always at the back.
    let mut remaining = instance.sorted_sizes_ascending();

    let mut waste = T::ZERO;
    let mut carry = T::ZERO;
    let mut element_total = T::ZERO;

    while let Some(largest) = remaining.pop() {
        element_total = element_total + largest;
        let room = capacity - largest;

        // Small items that could share a bin with `largest` join the carry.
        let cut = partition_index(0, remaining.len(), |i| remaining[i] > room);
        for &size in &remaining[..cut] {
            carry = carry + size;
            element_total = element_total + size;
        }
        remaining.drain(..cut);

        if carry > room {
            // The companions overfill this bin; the surplus rolls over.
            carry = carry - room;
        } else if carry < room {
            // Nothing left to fill the gap. That room is lost for good.
            waste = waste + (room - carry);
            carry = T::ZERO;
        }
    }

    ceil_div(waste + element_total, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(sizes: Vec<i64>, capacity: i64) -> Instance<i64> {
        Instance::new(sizes, capacity).unwrap()
    }

    #[test]
    fn test_lower_bound_1_rounds_up() {
        assert_eq!(lower_bound_1(&instance(vec![4, 8, 1, 4, 2, 1], 10)), 2);
        assert_eq!(lower_bound_1(&instance(vec![5, 5], 10)), 1);
        assert_eq!(lower_bound_1(&instance(vec![5, 5, 1], 10)), 2);
    }

    #[test]
    fn test_lower_bound_1_empty() {
        assert_eq!(lower_bound_1(&instance(vec![], 10)), 0);
    }

    #[test]
    fn test_lower_bound_2_sees_unfillable_room() {
        // Total is 18, so lb1 says 2. No pair of 6s shares a bin of 10,
        // and the waste term pushes the bound to the true optimum of 3.
        let inst = instance(vec![6, 6, 6], 10);
        assert_eq!(lower_bound_1(&inst), 2);
        assert_eq!(lower_bound_2(&inst), 3);
    }

    #[test]
    fn test_lower_bound_2_reference_instance() {
        assert_eq!(lower_bound_2(&instance(vec![4, 8, 1, 4, 2, 1], 10)), 2);
    }

    #[test]
    fn test_lower_bound_2_dominates_lower_bound_1() {
        let cases = vec![
            instance(vec![4, 8, 1, 4, 2, 1], 10),
            instance(vec![6, 6, 6], 10),
            instance(vec![5, 5, 4, 4, 3, 3], 12),
            instance(vec![9, 9, 9, 1, 1, 1], 10),
            instance(vec![], 7),
        ];
        for inst in &cases {
            assert!(lower_bound_2(inst) >= lower_bound_1(inst));
        }
    }

    #[test]
    fn test_lower_bound_2_is_order_independent() {
        let a = lower_bound_2(&instance(vec![4, 8, 1, 4, 2, 1], 10));
        let b = lower_bound_2(&instance(vec![1, 2, 4, 1, 8, 4], 10));
        let c = lower_bound_2(&instance(vec![8, 4, 4, 2, 1, 1], 10));
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_lower_bound_2_empty() {
        assert_eq!(lower_bound_2(&instance(vec![], 10)), 0);
    }

    #[test]
    fn test_lower_bound_2_exact_capacity_items() {
        assert_eq!(lower_bound_2(&instance(vec![10, 10, 10], 10)), 3);
    }
}
