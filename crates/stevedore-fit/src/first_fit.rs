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

//! First-fit heuristic
//!
//! Every bin stays open for the whole run. Each item is placed into the
//! lowest-index bin that still has room, and a new bin is opened at the end
//! of the list only when no existing bin fits.

use crate::{sized_bin::SizedBin, strategy::FittingStrategy};
use stevedore_core::num::solver::SolverNumeric;
use stevedore_model::{
    index::ItemIndex,
    instance::Instance,
    packing::Packing,
};

/// Packs items in the given order, each into the first bin with room.
///
/// Shared between plain first-fit and first-fit-decreasing, which differ
/// only in the order they feed items in.
pub(crate) fn first_fit_order<T>(instance: &Instance<T>, order: &[ItemIndex]) -> Packing
where
    T: SolverNumeric,
{
    let capacity = instance.capacity();
    let mut bins: Vec<SizedBin<T>> = Vec::new();

    for &item in order {
        let size = instance.size(item);
        match bins.iter_mut().find(|b| b.residual(capacity) >= size) {
            Some(bin) => bin.push(item, size),
            None => bins.push(SizedBin::open_with(item, size)),
        }
    }

    Packing::from_bins(
        bins.into_iter().map(SizedBin::into_items).collect(),
        instance.num_items(),
    )
}

/// The first-fit strategy. Stateless and reusable across instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl FirstFit {
    pub fn new() -> Self {
        Self
    }
}

impl<T> FittingStrategy<T> for FirstFit
where
    T: SolverNumeric,
{
    fn name(&self) -> &str {
        "FirstFit"
    }

    fn pack(&self, instance: &Instance<T>) -> Packing {
        let order: Vec<ItemIndex> = instance.items().collect();
        first_fit_order(instance, &order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_earlier_bins_are_revisited() {
        // Unlike next-fit, the 1 at position 2 lands back in the first bin.
        let instance = Instance::new(vec![4i64, 8, 1], 10).unwrap();
        let packing = FirstFit::new().pack(&instance);
        assert_eq!(packing.num_bins(), 2);
        assert_eq!(packing.bins(), vec![vec![ii(0), ii(2)], vec![ii(1)]]);
    }

    #[test]
    fn test_reference_instance() {
        let instance = Instance::new(vec![4i64, 8, 1, 4, 2, 1], 10).unwrap();
        let packing = FirstFit::new().pack(&instance);
        // [4,1,4,1], [8,2]
        assert_eq!(packing.num_bins(), 2);
        assert_eq!(
            packing.bins(),
            vec![vec![ii(0), ii(2), ii(3), ii(5)], vec![ii(1), ii(4)]]
        );
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(Vec::<i64>::new(), 10).unwrap();
        assert_eq!(FirstFit::new().pack(&instance).num_bins(), 0);
    }

    #[test]
    fn test_single_item() {
        let instance = Instance::new(vec![7i64], 10).unwrap();
        let packing = FirstFit::new().pack(&instance);
        assert_eq!(packing.num_bins(), 1);
        assert_eq!(packing.bins(), vec![vec![ii(0)]]);
    }
}
