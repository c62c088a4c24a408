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

//! Size guards for exponential solvers.
//!
//! The exact coloring and exact tour solvers have no internal size check: on a
//! large instance they still return the right answer, just not in any useful
//! amount of time. Callers decide whether to run them by consulting a
//! `SizeLimit` first, which keeps the trade-off visible at the call site.

/// An upper bound on the instance size an exact solver may be invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeLimit {
    max: Option<usize>,
}

impl SizeLimit {
    /// Admits instances with at most `max` elements.
    #[inline]
    pub const fn new(max: usize) -> Self {
        Self { max: Some(max) }
    }

    /// Admits every instance.
    #[inline]
    pub const fn unbounded() -> Self {
        Self { max: None }
    }

    /// Returns the configured maximum, or `None` if unbounded.
    #[inline]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns `true` if an instance of the given size may be solved exactly.
    #[inline]
    pub const fn admits(&self, size: usize) -> bool {
        match self.max {
            Some(max) => size <= max,
            None => true,
        }
    }
}

impl Default for SizeLimit {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl std::fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "SizeLimit(<= {})", max),
            None => write!(f, "SizeLimit(unbounded)"),
        }
    }
}
