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

use smallvec::SmallVec;
use stevedore_core::num::{ops::SaturatingAddVal, solver::SolverNumeric};
use stevedore_model::index::ItemIndex;

/// An open bin tracked by its current fill level.
///
/// Most bins hold only a handful of items, so the item list is stored
/// inline until it grows past eight entries.
#[derive(Debug, Clone)]
pub struct SizedBin<T> {
    fill: T,
    items: SmallVec<[ItemIndex; 8]>,
}

impl<T> SizedBin<T>
where
    T: SolverNumeric,
{
    /// Opens a new bin holding a single item.
    #[inline]
    pub fn open_with(item: ItemIndex, size: T) -> Self {
        let mut items = SmallVec::new();
        items.push(item);
        Self { fill: size, items }
    }

    /// Returns the current fill level.
    #[inline(always)]
    pub fn fill(&self) -> T {
        self.fill
    }

    /// Returns the remaining room given the uniform bin capacity.
    #[inline(always)]
    pub fn residual(&self, capacity: T) -> T {
        capacity - self.fill
    }

    /// Adds an item to this bin. Callers check the residual first.
    #[inline]
    pub fn push(&mut self, item: ItemIndex, size: T) {
        self.fill = self.fill.saturating_add_val(size);
        self.items.push(item);
    }

    /// Returns the items in this bin in insertion order.
    #[inline]
    pub fn items(&self) -> &[ItemIndex] {
        &self.items
    }

    /// Consumes the bin and returns its items.
    #[inline]
    pub fn into_items(self) -> Vec<ItemIndex> {
        self.items.into_vec()
    }

    /// Returns the number of items in this bin.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks whether the bin is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_open_and_push() {
        let mut bin = SizedBin::open_with(ii(0), 4i64);
        assert_eq!(bin.fill(), 4);
        assert_eq!(bin.len(), 1);

        bin.push(ii(3), 2);
        assert_eq!(bin.fill(), 6);
        assert_eq!(bin.items(), &[ii(0), ii(3)]);
        assert!(!bin.is_empty());
    }

    #[test]
    fn test_residual() {
        let bin = SizedBin::open_with(ii(0), 4i64);
        assert_eq!(bin.residual(10), 6);
        assert_eq!(bin.residual(4), 0);
    }

    #[test]
    fn test_into_items() {
        let mut bin = SizedBin::open_with(ii(1), 1i64);
        bin.push(ii(2), 1);
        assert_eq!(bin.into_items(), vec![ii(1), ii(2)]);
    }
}
