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

//! # Monotonic Partition Search
//!
//! A single generic binary search over a logical index range, parameterized
//! by a monotone predicate. Every sorted-sequence search in the workspace
//! goes through this primitive instead of hand-rolling its own bisection:
//! the best-fit placement search ("which bin fits"), the best-fit relocation
//! search ("where does the updated bin belong"), and the lower-bound prefix
//! cut ("which items are small enough").

/// Returns the leftmost index in `lo..hi` for which `pred` is `true`,
/// or `hi` if the predicate is `false` over the entire range.
///
/// # Invariants
///
/// - `pred` must be monotone over `lo..hi`: once it flips to `true` it must
///   stay `true` for every larger index. The result is meaningless otherwise.
///
/// # Panics
///
/// In debug builds, this function will panic if `lo > hi`.
#[inline(always)]
pub fn partition_index<P>(lo: usize, hi: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    debug_assert!(
        lo <= hi,
        "called `partition_index` with an inverted range: lo is {} but hi is {}",
        lo,
        hi
    );

    let mut lo = lo;
    let mut hi = hi;
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_index_empty_range() {
        assert_eq!(partition_index(0, 0, |_| true), 0);
        assert_eq!(partition_index(3, 3, |_| false), 3);
    }

    #[test]
    fn test_partition_index_all_false() {
        assert_eq!(partition_index(0, 5, |_| false), 5);
    }

    #[test]
    fn test_partition_index_all_true() {
        assert_eq!(partition_index(0, 5, |_| true), 0);
    }

    #[test]
    fn test_partition_index_boundary() {
        let values = [1, 3, 5, 7, 9];
        // First index whose value is >= key.
        assert_eq!(partition_index(0, values.len(), |i| values[i] >= 4), 2);
        assert_eq!(partition_index(0, values.len(), |i| values[i] >= 5), 2);
        assert_eq!(partition_index(0, values.len(), |i| values[i] >= 9), 4);
        assert_eq!(partition_index(0, values.len(), |i| values[i] >= 10), 5);
        assert_eq!(partition_index(0, values.len(), |i| values[i] >= 0), 0);
    }

    #[test]
    fn test_partition_index_sub_range() {
        let values = [9, 8, 7, 6, 5];
        // Search restricted to 1..4 only.
        assert_eq!(partition_index(1, 4, |i| values[i] < 8), 2);
        assert_eq!(partition_index(1, 4, |i| values[i] < 1), 4);
    }
}
