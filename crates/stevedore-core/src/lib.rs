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

//! # Stevedore Core
//!
//! Foundational utilities and numerics for the stevedore bin-packing
//! ecosystem. This crate consolidates reusable building blocks that underpin
//! the higher-level model, fitting, and exact-solver crates.
//!
//! ## Modules
//!
//! - `algorithm`: the monotonic binary search `partition_index`, the single
//!   primitive behind sorted-bin placement, sorted-bin relocation, and the
//!   lower-bound prefix cut.
//! - `num`: integer-centric utilities including the associated constant
//!   trait `Zero`, by-value checked/saturating arithmetic traits, and the
//!   `SolverNumeric` trait alias every engine is generic over.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`).
//!
//! ## Purpose
//!
//! These primitives enable robust, generic packing code while reducing
//! accidental bugs (index mixing, overflow) with minimal runtime overhead.

pub mod algorithm;
pub mod num;
pub mod utils;
