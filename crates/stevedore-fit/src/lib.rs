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

//! # Stevedore Fit
//!
//! Greedy fitting heuristics for one-dimensional bin packing.
//!
//! Four classic strategies are provided, all deterministic and all operating
//! on a validated `Instance`:
//!
//! - `next_fit`: keeps a single open bin, closes it on the first overflow.
//! - `first_fit`: places each item into the lowest-index bin with room.
//! - `first_fit_decreasing`: first-fit over items sorted largest first.
//! - `best_fit_decreasing`: tightest-fitting bin over items sorted largest
//!   first, with the open bins maintained in fill-descending order so both
//!   the bin choice and the insertion point are found by binary search.
//!
//! None of these guarantee optimality. `best_fit_decreasing` is the strongest
//! of the four and doubles as the upper-bound seed for the exact solver in
//! `stevedore_bnb`.

pub mod best_fit_decreasing;
pub mod first_fit;
pub mod first_fit_decreasing;
pub mod next_fit;
pub mod sized_bin;
pub mod strategy;

pub use best_fit_decreasing::BestFitDecreasing;
pub use first_fit::FirstFit;
pub use first_fit_decreasing::FirstFitDecreasing;
pub use next_fit::NextFit;
pub use strategy::FittingStrategy;
