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

//! Instance validation errors.
//!
//! Every error in this module is raised synchronously while an instance is
//! being constructed, before any algorithm can observe it. None of them is
//! recovered internally.

use thiserror::Error;

/// The reason an instance was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The graph declares no vertices.
    #[error("empty graph")]
    EmptyGraph,

    /// A neighbor list names a vertex that is not declared.
    #[error("undeclared vertex reference: vertex '{vertex}' lists undeclared neighbor '{neighbor}'")]
    UndeclaredVertex {
        /// The declared vertex whose neighbor list contains the reference.
        vertex: String,
        /// The label that is not part of the vertex set.
        neighbor: String,
    },

    /// The same vertex label is declared more than once.
    #[error("duplicate vertex declaration: '{vertex}'")]
    DuplicateVertex {
        /// The label that was declared twice.
        vertex: String,
    },

    /// A tour needs at least two cities.
    #[error("at least two cities are required to build a tour, found {found}")]
    TooFewCities {
        /// The number of cities that was supplied.
        found: usize,
    },
}
