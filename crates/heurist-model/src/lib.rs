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

//! # Heurist Model
//!
//! The data interchange layer between problem instances and the solver crates.
//!
//! ## Architecture
//!
//! * **`index`**: Typed positions (`VertexIndex`, `CityIndex`) into the declared input order.
//! * **`graph`**: `AdjacencyList` (raw, as supplied) and `Graph` (validated, immutable, flattened).
//! * **`city`**: `City<T>` coordinates and the validated `Cities<T>` sequence.
//! * **`coloring`**: The `Coloring` produced by the coloring engines.
//! * **`tour`**: Closed `Tour<T>` values and the `tour_cost` function.
//! * **`error`**: `ValidationError`, raised before any algorithm runs.
//! * **`loading`**: JSON instance sets, including the built-in default example.
//!
//! ## Design Philosophy
//!
//! 1.  **Validate once**: Instances are checked when they are constructed. Every
//!     algorithm consumes a `&Graph` or `&Cities<T>` and is therefore infallible.
//! 2.  **Order is data**: The declared enumeration order of vertices and cities
//!     drives every tie-break, so it is stored explicitly as index order and never
//!     derived from hash map iteration.
//! 3.  **Flat layout**: Adjacency is stored as offsets into a single neighbor
//!     vector to keep the hot loops of the exact search cache friendly.

pub mod city;
pub mod coloring;
pub mod error;
pub mod graph;
pub mod index;
pub mod loading;
pub mod tour;
