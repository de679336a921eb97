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

//! # Stevedore Model
//!
//! **The Core Domain Model for the Stevedore Bin Packing Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **One-Dimensional Bin Packing Problem**. It serves as the data interchange
//! layer between the problem definition (user input) and the packing engines
//! (`stevedore_fit`, `stevedore_bnb`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **preparation** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`ItemIndex`, `BinIndex`) to prevent logical indexing errors.
//! * **`error`**: Instance validation errors with positions pointing back at the caller's input.
//! * **`instance`**: Contains the `Instance` (immutable, validated, oversized items already partitioned out).
//! * **`packing`**: Defines the output format, a flat item-to-bin assignment table.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally use an `ItemIndex` to access a bin.
//! 2.  **Memory Layout**: Solutions are stored in **Structure of Arrays (SoA)** format (flattened vectors) to maximize cache locality during search.
//! 3.  **Fail-Fast**: Constructors validate inputs eagerly to ensure the engines never encounter an invalid state.

pub mod error;
pub mod index;
pub mod instance;
pub mod packing;
