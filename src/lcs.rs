//! [Longest common subsequence](https://en.wikipedia.org/wiki/Longest_common_subsequence)
//! of two sequences.
//!
//! A subsequence need not be contiguous; see [`crate::longest`] for the
//! contiguous (substring) variant.
//!
//! # Examples
//!
//! ```
//!     use stringology::lcs;
//!
//!     let mut out = Vec::new();
//!     lcs::copy(b"XMJYAUZ", b"MZJAWXU", &mut out);
//!     assert_eq!(out, b"MJAU");
//! ```

use crate::hirschberg::{self, Span, Table};
use crate::ring::RingTable;
use crate::sink::Sink;
use core::marker::PhantomData;

struct LcsTable<C, F> {
    eq: F,
    _symbol: PhantomData<fn(&C)>,
}

impl<C: Clone, F: Fn(&C, &C) -> bool> Table for LcsTable<C, F> {
    type Symbol = C;
    type Output = C;

    fn last_row(&self, s1: Span<'_, C>, s2: Span<'_, C>) -> Vec<i64> {
        let (size1, size2) = (s1.len(), s2.len());
        let mut tbl = RingTable::<i64>::new(size2 + 1);
        for l in 1..=size1 {
            for r in 1..=size2 {
                // column 0 stays 0 across row reuse
                let score = if (self.eq)(s1.get(l - 1), s2.get(r - 1)) {
                    tbl[l - 1][r - 1] + 1
                } else {
                    tbl[l - 1][r].max(tbl[l][r - 1])
                };
                tbl[l][r] = score;
            }
        }
        tbl.take_row(size1)
    }

    fn trace_col(
        &self,
        s1: Span<'_, C>,
        s2: Span<'_, C>,
        transposed: bool,
        sink: &mut dyn Sink<C>,
    ) {
        if transposed {
            return self.trace_col(s2, s1, false, sink);
        }
        let found = s1
            .iter()
            .find(|&lhs| s2.iter().any(|rhs| (self.eq)(lhs, rhs)));
        if let Some(item) = found {
            sink.accept(item.clone());
        }
    }
}

/// Copies a longest common subsequence into the sink, under natural symbol
/// equality.
///
/// Time O(N*M), space O(min(N, M)).
pub fn copy<C: Clone + PartialEq>(r1: &[C], r2: &[C], sink: &mut dyn Sink<C>) {
    copy_with(r1, r2, sink, |lhs, rhs| lhs == rhs)
}

/// Copies a longest common subsequence under a caller-supplied equivalence.
pub fn copy_with<C: Clone, F: Fn(&C, &C) -> bool>(
    r1: &[C],
    r2: &[C],
    sink: &mut dyn Sink<C>,
    eq: F,
) {
    let table = LcsTable {
        eq,
        _symbol: PhantomData,
    };
    hirschberg::trace(&table, r1, r2, sink)
}
