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

use crate::index::{BinIndex, ItemIndex};

/// A complete assignment of items to bins.
///
/// This struct uses a Structure of Arrays (SoA) layout.
/// Data is indexed directly by `ItemIndex` (i.e., index `i` corresponds to
/// item `i` of the instance the packing was produced for).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packing {
    /// The assigned bin for each item.
    /// `assignments[i]` is the bin holding item `i`.
    assignments: Vec<BinIndex>,

    /// The number of bins used. Bin indices are dense in `0..num_bins`.
    num_bins: usize,
}

impl Packing {
    /// Constructs a packing from explicit per-bin item lists.
    ///
    /// Bin `b` of the result holds exactly the items of `bins[b]`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the bins do not cover every item of
    /// `0..num_items` exactly once.
    pub fn from_bins(bins: Vec<Vec<ItemIndex>>, num_items: usize) -> Self {
        let num_bins = bins.len();
        let mut assignments = vec![BinIndex::new(usize::MAX); num_items];
        let mut assigned = 0usize;

        for (bin, items) in bins.iter().enumerate() {
            for &item in items {
                debug_assert!(
                    item.get() < num_items,
                    "called `Packing::from_bins` with item index out of bounds: the len is {} but the index is {}",
                    num_items,
                    item.get()
                );
                debug_assert!(
                    assignments[item.get()].get() == usize::MAX,
                    "called `Packing::from_bins` with item {} assigned to more than one bin",
                    item.get()
                );
                assignments[item.get()] = BinIndex::new(bin);
                assigned += 1;
            }
        }

        debug_assert!(
            assigned == num_items,
            "called `Packing::from_bins` with {} of {} items assigned",
            assigned,
            num_items
        );

        Self {
            assignments,
            num_bins,
        }
    }

    /// Returns the packing of an empty instance: no items, no bins.
    pub fn empty() -> Self {
        Self {
            assignments: Vec::new(),
            num_bins: 0,
        }
    }

    /// Returns the number of bins used.
    #[inline]
    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Returns the number of items covered by this packing.
    #[inline]
    pub fn num_items(&self) -> usize {
        self.assignments.len()
    }

    /// Returns the bin holding a specific item.
    #[inline]
    pub fn bin_for_item(&self, item: ItemIndex) -> BinIndex {
        debug_assert!(
            item.get() < self.assignments.len(),
            "called `Packing::bin_for_item` with item index out of bounds: the len is {} but the index is {}",
            self.assignments.len(),
            item.get()
        );
        self.assignments[item.get()]
    }

    /// Returns a slice of assigned bins for all items.
    #[inline]
    pub fn assignments(&self) -> &[BinIndex] {
        &self.assignments
    }

    /// Expands the flat assignment table back into per-bin item lists.
    ///
    /// Within each bin, items appear in ascending item order.
    pub fn bins(&self) -> Vec<Vec<ItemIndex>> {
        let mut bins: Vec<Vec<ItemIndex>> = vec![Vec::new(); self.num_bins];
        for (item, &bin) in self.assignments.iter().enumerate() {
            bins[bin.get()].push(ItemIndex::new(item));
        }
        bins
    }
}

impl std::fmt::Display for Packing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Packing Summary")?;
        writeln!(f, "   Bins Used: {}", self.num_bins)?;
        writeln!(f, "   Items:     {}", self.assignments.len())?;

        if self.num_bins == 0 {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "   {:<10} | {:<40}", "Bin", "Items")?;
        writeln!(f, "   {:-<10}-+-{:-<40}", "", "")?;
        for (bin, items) in self.bins().iter().enumerate() {
            let list = items
                .iter()
                .map(|i| i.get().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "   {:<10} | {:<40}", bin, list)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_from_bins_and_accessors() {
        let packing = Packing::from_bins(vec![vec![ii(1), ii(3)], vec![ii(0), ii(2)]], 4);

        assert_eq!(packing.num_bins(), 2);
        assert_eq!(packing.num_items(), 4);
        assert_eq!(packing.bin_for_item(ii(0)).get(), 1);
        assert_eq!(packing.bin_for_item(ii(1)).get(), 0);
        assert_eq!(packing.bin_for_item(ii(2)).get(), 1);
        assert_eq!(packing.bin_for_item(ii(3)).get(), 0);
    }

    #[test]
    fn test_bins_round_trip_sorted() {
        let packing = Packing::from_bins(vec![vec![ii(3), ii(1)], vec![ii(2), ii(0)]], 4);
        let bins = packing.bins();
        assert_eq!(bins, vec![vec![ii(1), ii(3)], vec![ii(0), ii(2)]]);
    }

    #[test]
    fn test_empty_packing() {
        let packing = Packing::empty();
        assert_eq!(packing.num_bins(), 0);
        assert_eq!(packing.num_items(), 0);
        assert!(packing.bins().is_empty());
    }

    #[test]
    fn test_display_mentions_bin_count() {
        let packing = Packing::from_bins(vec![vec![ii(0)]], 1);
        let rendered = format!("{}", packing);
        assert!(rendered.contains("Bins Used: 1"));
    }
}
