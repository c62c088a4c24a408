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

use fixedbitset::FixedBitSet;

/// A growable set of color indices backed by a bitset.
///
/// Colors are dense small integers, so membership and "smallest absent color"
/// queries reduce to word scans. The set is cleared and reused between
/// vertices to avoid per-vertex allocations.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColorSet {
    bits: FixedBitSet,
}

impl ColorSet {
    #[inline]
    pub(crate) fn with_capacity(num_colors: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(num_colors),
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.bits.clear();
    }

    #[inline]
    pub(crate) fn insert(&mut self, color: usize) {
        if color >= self.bits.len() {
            self.bits.grow(color + 1);
        }
        self.bits.insert(color);
    }

    /// Number of distinct colors in the set.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// The smallest non-negative color not in the set.
    #[inline]
    pub(crate) fn smallest_absent(&self) -> usize {
        self.bits.zeroes().next().unwrap_or(self.bits.len())
    }

    /// Clears the set, fills it with `colors` and returns the smallest absent color.
    #[inline]
    pub(crate) fn first_fit<I>(&mut self, colors: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        self.refill(colors);
        self.smallest_absent()
    }

    /// Clears the set, fills it with `colors` and returns the number of distinct colors.
    #[inline]
    pub(crate) fn count_distinct<I>(&mut self, colors: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        self.refill(colors);
        self.len()
    }

    #[inline]
    fn refill<I>(&mut self, colors: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.clear();
        for color in colors {
            self.insert(color);
        }
    }
}
