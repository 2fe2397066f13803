//! Optimal sequence alignment under the
//! [Levenshtein distance](https://en.wikipedia.org/wiki/Levenshtein_distance).
//!
//! The alignment is emitted as pairs `(Option<C>, Option<C>)`; `None` marks
//! an insertion or deletion. A match scores +1, a substitution or indel -1.
//!
//! # Examples
//!
//! ```
//!     use stringology::edit_distance;
//!
//!     let mut pairs = Vec::new();
//!     edit_distance::zip(b"this", b"has", &mut pairs);
//!     assert_eq!(pairs, [
//!         (Some(b't'), None),
//!         (Some(b'h'), Some(b'h')),
//!         (Some(b'i'), Some(b'a')),
//!         (Some(b's'), Some(b's')),
//!     ]);
//! ```

use crate::hirschberg::{self, Span, Table};
use crate::ring::RingTable;
use crate::sink::Sink;
use core::marker::PhantomData;

struct EditTable<C, F> {
    eq: F,
    _symbol: PhantomData<fn(&C)>,
}

impl<C: Clone, F: Fn(&C, &C) -> bool> Table for EditTable<C, F> {
    type Symbol = C;
    type Output = (Option<C>, Option<C>);

    fn last_row(&self, s1: Span<'_, C>, s2: Span<'_, C>) -> Vec<i64> {
        let (size1, size2) = (s1.len(), s2.len());
        let mut tbl = RingTable::<i64>::new(size2 + 1);
        for l in 0..=size1 {
            for r in 0..=size2 {
                let score = if l == 0 {
                    -(r as i64)
                } else if r == 0 {
                    -(l as i64)
                } else if (self.eq)(s1.get(l - 1), s2.get(r - 1)) {
                    1 + tbl[l - 1][r - 1]
                } else {
                    -1 + tbl[l - 1][r - 1].max(tbl[l - 1][r]).max(tbl[l][r - 1])
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
        sink: &mut dyn Sink<Self::Output>,
    ) {
        let (mut l, mut r) = (0, 0);
        while l < s1.len() {
            let lhs = s1.get(l);
            // pair with the single shorter-side symbol only on equivalence
            // or at the final symbol of the longer side
            let pair = if r == s2.len() || (l + 1 != s1.len() && !(self.eq)(lhs, s2.get(r))) {
                (Some(lhs.clone()), None)
            } else {
                let rhs = s2.get(r).clone();
                r += 1;
                (Some(lhs.clone()), Some(rhs))
            };
            l += 1;
            sink.accept(if transposed { (pair.1, pair.0) } else { pair });
        }
    }
}

/// Aligns two sequences under natural symbol equality.
///
/// Time O(N*M), space O(min(N, M)).
pub fn zip<C: Clone + PartialEq>(
    r1: &[C],
    r2: &[C],
    sink: &mut dyn Sink<(Option<C>, Option<C>)>,
) {
    zip_with(r1, r2, sink, |lhs, rhs| lhs == rhs)
}

/// Aligns two sequences under a caller-supplied equivalence.
pub fn zip_with<C: Clone, F: Fn(&C, &C) -> bool>(
    r1: &[C],
    r2: &[C],
    sink: &mut dyn Sink<(Option<C>, Option<C>)>,
    eq: F,
) {
    let table = EditTable {
        eq,
        _symbol: PhantomData,
    };
    hirschberg::trace(&table, r1, r2, sink)
}
