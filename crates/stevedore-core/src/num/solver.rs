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

//! # Solver Numeric Trait
//!
//! Unified numeric bounds for the packing and bounding components.
//! `SolverNumeric` specifies the integer capabilities required across the
//! workspace, including intrinsic traits (`PrimInt`, `Signed`), conversions
//! from primitive indices, and by-value checked/saturating arithmetic traits.
//!
//! ## Motivation
//!
//! Exact packing pipelines should remain generic over integer size types
//! while retaining predictable arithmetic semantics. This trait collects the
//! necessary bounds into a single alias, simplifying generic signatures and
//! ensuring consistent overflow handling.

use std::hash::Hash;

use crate::num::{
    constants::Zero,
    ops::{checked_arithmetic, saturating_arithmetic},
};
use num_traits::{FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types that can be used as item sizes and bin
/// capacities. This includes integer types that support various arithmetic
/// operations with both saturating and checked semantics.
/// These are usually all signed integer types `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait SolverNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + saturating_arithmetic::SaturatingMulVal
    + checked_arithmetic::CheckedAddVal
    + Send
    + Sync
    + Hash
{
}

impl<T> SolverNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + saturating_arithmetic::SaturatingMulVal
        + checked_arithmetic::CheckedAddVal
        + Send
        + Sync
        + Hash
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solver_numeric<T: SolverNumeric>() {}

    #[test]
    fn test_signed_integers_satisfy_bounds() {
        assert_solver_numeric::<i8>();
        assert_solver_numeric::<i16>();
        assert_solver_numeric::<i32>();
        assert_solver_numeric::<i64>();
        assert_solver_numeric::<isize>();
    }
}
