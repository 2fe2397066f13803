//! Implementation of the [suffix array](https://doi.org/10.1137/0222058)
//! built by Manber–Myers prefix doubling, with the Kasai longest common
//! prefix array.

//! # Examples
//!
//! ```
//!     use stringology::array::SuffixArray;
//!
//!     let text = b"space efficient alternative to suffix tree$".to_vec();
//!     let sa = SuffixArray::<u8>::new(text).unwrap();
//!
//!     // finds the entry position of a substring, O(|find| * log(|text|))
//!     assert_eq!(sa.find_any(b"efficient"), Some(6));
//!     assert_eq!(sa.find_any(b"rope"), None);
//!
//!     // lcp[i] = max_pref(sa[i], sa[i + 1]) && lcp.len() == sa.len()
//!     let lcp = sa.lcp();
//! ```

use crate::error::CapacityError;
use crate::lcp::Lcp;
use crate::size::{checked, TextSize};
use core::cmp::Ordering;
use core::slice::Iter;

pub(crate) fn natural_less<C: Ord>(lhs: &C, rhs: &C) -> bool {
    lhs < rhs
}

/// Starting positions of the suffixes of an owned text, in lexicographic
/// order under the `less` predicate the array was built with.
#[derive(Debug, Clone)]
pub struct SuffixArray<C, S = usize, F = fn(&C, &C) -> bool> {
    text: Vec<C>,
    idx: Vec<S>,
    less: F,
}

// one record per suffix while sorting
struct Suffix<S> {
    pos: S,
    rank: (S, S),
}

impl<C: Ord, S: TextSize> SuffixArray<C, S> {
    /// Construct with the natural symbol order. Complexity
    /// O(n * log(n) * log(n)).
    /// ```
    /// use stringology::array::SuffixArray;
    ///
    /// let sa = SuffixArray::<u8>::new(b"word".to_vec()).unwrap();
    /// assert_eq!(sa.positions(), &[3, 1, 2, 0]);
    /// ```
    /// If the text does not fit the index type the array does not come into
    /// existence.
    pub fn new(text: Vec<C>) -> Result<Self, CapacityError> {
        Self::with_less(text, natural_less::<C>)
    }
}

impl<C, S: TextSize, F: Fn(&C, &C) -> bool> SuffixArray<C, S, F> {
    /// Construct with a caller-supplied strict weak order; equivalence is
    /// derived as `!less(a, b) && !less(b, a)`.
    /// ```
    /// use stringology::array::SuffixArray;
    ///
    /// let text = b"Bananas".to_vec();
    /// let sa = SuffixArray::<u8, usize, _>::with_less(text, |lhs: &u8, rhs: &u8| {
    ///     lhs.to_ascii_lowercase() < rhs.to_ascii_lowercase()
    /// }).unwrap();
    /// assert_eq!(sa.find_any(b"BANAN"), Some(0));
    /// ```
    pub fn with_less(text: Vec<C>, less: F) -> Result<Self, CapacityError> {
        let idx = sort_suffixes(&text, &less)?;
        Ok(Self { text, idx, less })
    }

    /// Return ref on text
    #[inline]
    pub fn text(&self) -> &[C] {
        &self.text
    }

    /// Starting positions of the suffixes in lexicographic order
    #[inline]
    pub fn positions(&self) -> &[S] {
        &self.idx
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Return iterator on sorted suffix positions
    #[inline]
    pub fn iter(&self) -> Iter<'_, S> {
        self.idx.iter()
    }

    /// The sorted positions of the suffixes starting with `needle`, found by
    /// `|needle|` successive binary searches. Complexity
    /// O(|needle| * log(|text|)).
    ///
    /// Positions past the end of the text compare equal to the queried
    /// symbol, so a suffix that is a strict prefix of the needle can end up
    /// bracketed with the real matches. Padding the text with a terminal
    /// symbol seen nowhere else rules such suffixes out.
    pub fn equal_range(&self, needle: &[C]) -> &[S] {
        let mut range: &[S] = &self.idx;
        for (at, key) in needle.iter().enumerate() {
            let ch = |pos: &S| {
                let cur = pos.to_usize() + at;
                if cur < self.text.len() {
                    &self.text[cur]
                } else {
                    key
                }
            };
            let lower = range.partition_point(|pos| (self.less)(ch(pos), key));
            range = &range[lower..];
            let upper = range.partition_point(|pos| !(self.less)(key, ch(pos)));
            range = &range[..upper];
            if range.is_empty() {
                break;
            }
        }
        range
    }

    /// Position of some occurrence of `needle`, or `None`. The empty needle
    /// yields `|text|`.
    /// ```
    /// use stringology::array::SuffixArray;
    ///
    /// let sa = SuffixArray::<u8>::new(b"word".to_vec()).unwrap();
    /// assert_eq!(sa.find_any(b"or"), Some(1));
    /// assert_eq!(sa.find_any(b""), Some(4));
    /// ```
    #[inline]
    pub fn find_any(&self, needle: &[C]) -> Option<S> {
        if needle.is_empty() {
            return S::from_usize(self.text.len());
        }
        self.equal_range(needle).first().copied()
    }

    /// All occurrences of `needle`, lazily, in no particular order. The
    /// empty needle yields `|text|` and then every position.
    pub fn find_all(&self, needle: &[C]) -> FindAll<'_, S> {
        FindAll {
            empty: if needle.is_empty() {
                S::from_usize(self.text.len())
            } else {
                None
            },
            positions: self.equal_range(needle).iter(),
        }
    }

    /// lcp\[i\] = max_pref(sa\[i\], sa\[i + 1\]) && lcp.len() == sa.len()
    /// Construct LCP by Kasai's algorithm. Complexity O(n)
    /// ```
    /// use stringology::array::SuffixArray;
    ///
    /// let sa = SuffixArray::<u8>::new(b"banana".to_vec()).unwrap();
    /// assert_eq!(sa.lcp().inner(), &[1, 3, 0, 0, 2, 0]);
    /// ```
    pub fn lcp(&self) -> Lcp<S> {
        let size = self.text.len();
        let eq = |lhs: &C, rhs: &C| !(self.less)(lhs, rhs) && !(self.less)(rhs, lhs);
        let mut lcp = vec![S::zero(); size];
        let mut inverse = vec![0; size];
        for (at, pos) in self.idx.iter().enumerate() {
            inverse[pos.to_usize()] = at;
        }
        // the carry drops by at most one per outer step, so the inner walk
        // is amortized O(n)
        let mut carry = 0;
        for pos in 0..size {
            let cur = inverse[pos];
            if cur + 1 < size {
                let next = self.idx[cur + 1].to_usize();
                while pos + carry < size
                    && next + carry < size
                    && eq(&self.text[pos + carry], &self.text[next + carry])
                {
                    carry += 1;
                }
                // fits: carry <= size
                lcp[cur] = S::from_usize(carry).unwrap();
                carry = carry.saturating_sub(1);
            } else {
                lcp[cur] = S::zero();
                carry = 0;
            }
        }
        Lcp::new(lcp)
    }
}

impl<'sa, C, S: TextSize, F: Fn(&C, &C) -> bool> IntoIterator for &'sa SuffixArray<C, S, F> {
    type Item = &'sa S;
    type IntoIter = Iter<'sa, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.idx.iter()
    }
}

/// Lazy positions borrowed from [`SuffixArray::find_all`].
pub struct FindAll<'sa, S> {
    empty: Option<S>,
    positions: Iter<'sa, S>,
}

impl<'sa, S: TextSize> Iterator for FindAll<'sa, S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if let Some(len) = self.empty.take() {
            return Some(len);
        }
        self.positions.next().copied()
    }
}

fn sort_suffixes<C, S, F>(text: &[C], less: &F) -> Result<Vec<S>, CapacityError>
where
    S: TextSize,
    F: Fn(&C, &C) -> bool,
{
    checked::<S>(text.len())?;
    let mut sufs: Vec<Suffix<S>> = (0..text.len())
        // fits, checked above
        .map(|pos| Suffix {
            pos: S::from_usize(pos).unwrap(),
            rank: (S::zero(), S::zero()),
        })
        .collect();

    fill_first_rank(&mut sufs, |lhs, rhs| {
        less(&text[lhs.pos.to_usize()], &text[rhs.pos.to_usize()])
    });
    let mut offset = 1;
    while !sorted(&sufs) {
        fill_second_rank(&mut sufs, offset);
        fill_first_rank(&mut sufs, |lhs, rhs| lhs.rank < rhs.rank);
        offset *= 2;
    }
    Ok(sufs.into_iter().map(|suf| suf.pos).collect())
}

// sort, then assign dense ranks starting at 1: equivalent suffixes share a
// rank, a strictly greater one advances it
fn fill_first_rank<S, L>(sufs: &mut [Suffix<S>], less: L)
where
    S: TextSize,
    L: Fn(&Suffix<S>, &Suffix<S>) -> bool,
{
    sufs.sort_by(|lhs, rhs| {
        if less(lhs, rhs) {
            Ordering::Less
        } else if less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    let mut acc = S::one();
    for at in 1..sufs.len() {
        let bump = less(&sufs[at - 1], &sufs[at]);
        sufs[at - 1].rank.0 = acc;
        if bump {
            acc += S::one();
        }
    }
    if let Some(last) = sufs.last_mut() {
        last.rank.0 = acc;
    }
}

// rank of the suffix `offset` positions to the right; 0 outside the text
fn fill_second_rank<S: TextSize>(sufs: &mut [Suffix<S>], offset: usize) {
    let mut ranks = vec![S::zero(); sufs.len()];
    for suf in sufs.iter() {
        ranks[suf.pos.to_usize()] = suf.rank.0;
    }
    for suf in sufs.iter_mut() {
        let next = suf.pos.to_usize() + offset;
        suf.rank.1 = if next < ranks.len() {
            ranks[next]
        } else {
            S::zero()
        };
    }
}

// all ranks distinct once the densest one reaches the suffix count
fn sorted<S: TextSize>(sufs: &[Suffix<S>]) -> bool {
    match sufs.last() {
        None => true,
        Some(last) => last.rank.0.to_usize() == sufs.len(),
    }
}
