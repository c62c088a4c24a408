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

//! # Strongly Typed Indices
//!
//! Graph vertices and cities are both addressed by their position in the
//! declared input order. `TypedIndex<T>` wraps that position in a `usize`
//! tagged with a zero-sized marker type so that a vertex position can never be
//! passed where a city position is expected. The wrapper is
//! `#[repr(transparent)]` and compiles down to a bare `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use heurist_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy)]
//! struct StopTag;
//! impl TypedIndexTag for StopTag { const NAME: &'static str = "StopIndex"; }
//!
//! type StopIndex = TypedIndex<StopTag>;
//! let s = StopIndex::new(3);
//! assert_eq!(s.get(), 3);
//! assert_eq!(format!("{}", s), "StopIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A position in some declared order, tagged with the domain it belongs to.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` for the given position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct NodeTag;

    impl TypedIndexTag for NodeTag {
        const NAME: &'static str = "NodeIdx";
    }

    type NodeIndex = TypedIndex<NodeTag>;

    #[test]
    fn test_new_and_get() {
        let idx = NodeIndex::new(4);
        assert_eq!(idx.get(), 4);
    }

    #[test]
    fn test_usize_round_trip_through_from() {
        let idx: NodeIndex = 9.into();
        let raw: usize = idx.into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn test_display_uses_tag_name() {
        let idx = NodeIndex::new(2);
        assert_eq!(format!("{}", idx), "NodeIdx(2)");
        assert_eq!(format!("{:?}", idx), "NodeIdx(2)");
    }

    #[test]
    fn test_ordering_follows_position() {
        let mut v = vec![NodeIndex::new(3), NodeIndex::new(1), NodeIndex::new(2)];
        v.sort();
        assert_eq!(v, vec![NodeIndex::new(1), NodeIndex::new(2), NodeIndex::new(3)]);
    }
}
