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

//! Approximation ratios of heuristic values against exact optima.

use num_traits::ToPrimitive;

/// Returns `value / optimal`, or `None` when `optimal` is not positive.
///
/// Color counts and tour costs are both accepted. A ratio of `1.0` means the
/// heuristic found an optimal solution.
pub fn approximation_ratio<V>(value: V, optimal: V) -> Option<f64>
where
    V: ToPrimitive,
{
    let optimal = optimal.to_f64()?;
    if optimal > 0.0 {
        Some(value.to_f64()? / optimal)
    } else {
        None
    }
}

/// Like [`approximation_ratio`], for an optimum that may not have been computed.
#[inline]
pub fn ratio_against<V>(value: V, optimal: Option<V>) -> Option<f64>
where
    V: ToPrimitive,
{
    optimal.and_then(|optimal| approximation_ratio(value, optimal))
}
