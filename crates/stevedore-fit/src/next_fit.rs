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

//! Next-fit heuristic
//!
//! Keeps exactly one bin open at a time. Each item in input order is placed
//! into the open bin if it fits; otherwise the bin is closed for good and a
//! fresh one is opened. Runs in linear time and never revisits a closed bin,
//! which makes it the weakest but cheapest of the provided strategies.

use crate::{sized_bin::SizedBin, strategy::FittingStrategy};
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::{instance::Instance, packing::Packing};

/// The next-fit strategy. Stateless and reusable across instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextFit;

impl NextFit {
    pub fn new() -> Self {
        Self
    }
}

impl<T> FittingStrategy<T> for NextFit
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "NextFit"
    }

    fn pack(&self, instance: &Instance<T>) -> Packing {
        let capacity = instance.capacity();
        let mut closed: Vec<Vec<_>> = Vec::new();
        let mut open: Option<SizedBin<T>> = None;

        for item in instance.items() {
            let size = instance.size(item);
            match open.as_mut() {
                Some(bin) if bin.residual(capacity) >= size => bin.push(item, size),
                Some(bin) => {
                    let full = std::mem::replace(bin, SizedBin::open_with(item, size));
                    closed.push(full.into_items());
                }
                None => open = Some(SizedBin::open_with(item, size)),
            }
        }

        if let Some(bin) = open {
            closed.push(bin.into_items());
        }

        Packing::from_bins(closed, instance.num_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stevedore_model::index::ItemIndex;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    fn bins_of(packing: &Packing) -> Vec<Vec<ItemIndex>> {
        packing.bins()
    }

    #[test]
    fn test_closed_bins_are_never_revisited() {
        // The 1 at position 2 would fit into the first bin, but next-fit
        // closed it when the 8 arrived.
        let instance = Instance::new(vec![4i64, 8, 1], 10).unwrap();
        let packing = NextFit::new().pack(&instance);
        assert_eq!(packing.num_bins(), 2);
        assert_eq!(bins_of(&packing), vec![vec![ii(0)], vec![ii(1), ii(2)]]);
    }

    #[test]
    fn test_reference_instance() {
        let instance = Instance::new(vec![4i64, 8, 1, 4, 2, 1], 10).unwrap();
        let packing = NextFit::new().pack(&instance);
        // [4], [8,1], [4,2,1]
        assert_eq!(packing.num_bins(), 3);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(Vec::<i64>::new(), 10).unwrap();
        let packing = NextFit::new().pack(&instance);
        assert_eq!(packing.num_bins(), 0);
    }

    #[test]
    fn test_exact_capacity_items() {
        let instance = Instance::new(vec![10i64, 10, 10], 10).unwrap();
        let packing = NextFit::new().pack(&instance);
        assert_eq!(packing.num_bins(), 3);
    }
}
