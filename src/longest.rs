//! Longest repeated and longest common substrings.
//!
//! Substrings are contiguous; see [`crate::lcs`] for the subsequence
//! variant.

use crate::array::{natural_less, SuffixArray};
use crate::lcp::Lcp;
use crate::size::TextSize;
use crate::sink::Sink;
use crate::tree::{ChildMap, SuffixTree};

/// The longest substring occurring at least twice, located by the maximum
/// entry of the LCP array. Ties resolve to the lexicographically smallest
/// candidate. Complexity O(n).
/// ```
/// use stringology::array::SuffixArray;
/// use stringology::longest;
///
/// let sa = SuffixArray::<u8>::new(b"mississippi$".to_vec()).unwrap();
/// let lcp = sa.lcp();
/// assert_eq!(longest::repeated_substring(&sa, &lcp), b"issi");
/// ```
pub fn repeated_substring<'sa, C, S, F>(
    array: &'sa SuffixArray<C, S, F>,
    lcp: &Lcp<S>,
) -> &'sa [C]
where
    S: TextSize,
    F: Fn(&C, &C) -> bool,
{
    let text = array.text();
    let mut best_at = 0;
    let mut best_len = 0;
    for (at, len) in lcp.iter().enumerate() {
        if len.to_usize() > best_len {
            best_len = len.to_usize();
            best_at = at;
        }
    }
    if best_len == 0 {
        return &text[text.len()..];
    }
    let pos = array.positions()[best_at].to_usize();
    &text[pos..pos + best_len]
}

/// The longest substring occurring at least twice, located by the deepest
/// inner edge of an explicit (terminator-padded) suffix tree. Complexity
/// O(n); space O(tree height).
/// ```
/// use stringology::longest;
/// use stringology::tree::SuffixTree;
///
/// let tree: SuffixTree<u8> = SuffixTree::from_text(b"banana$".iter().copied()).unwrap();
/// assert_eq!(longest::repeated_substring_tree(&tree), b"ana");
/// ```
pub fn repeated_substring_tree<'t, C, S, M>(tree: &'t SuffixTree<C, S, M>) -> &'t [C]
where
    C: Clone + Eq,
    S: TextSize,
    M: ChildMap<C, S>,
{
    let text = tree.text();
    let mut best: &[C] = &text[text.len()..];
    if let Some(root) = tree.branch(&[]) {
        for edge in tree.depth_first_search(root) {
            if tree.leaf(edge.child_node) || edge.labels_len.to_usize() <= best.len() {
                continue;
            }
            let (first, last) = tree.labels(&edge);
            best = &text[first.to_usize()..last.to_usize()];
        }
    }
    best
}

/// Copies the longest common substring of `r1` and `r2` into the sink,
/// under the natural symbol order.
///
/// Complexity O((n + m) * log(n + m) * log(n + m)); the enhanced suffix
/// array of the concatenation is built with the smallest index type that
/// fits it.
/// ```
/// use stringology::longest;
///
/// let mut out = Vec::new();
/// longest::common_substring(b"xabxac", b"abcabxabcd", &mut out);
/// assert_eq!(out, b"abxa");
/// ```
pub fn common_substring<C: Ord + Clone>(r1: &[C], r2: &[C], sink: &mut dyn Sink<C>) {
    common_substring_with(r1, r2, sink, natural_less::<C>)
}

/// Copies the longest common substring under a caller-supplied strict weak
/// order.
pub fn common_substring_with<C, F>(r1: &[C], r2: &[C], sink: &mut dyn Sink<C>, less: F)
where
    C: Clone,
    F: Fn(&C, &C) -> bool,
{
    let mut text = Vec::with_capacity(r1.len() + r2.len());
    text.extend(r1.iter().cloned());
    let mid = r1.len();
    text.extend(r2.iter().cloned());
    if text.len() < u8::MAX as usize {
        scan::<C, u8, F>(text, mid, less, sink)
    } else if text.len() < u16::MAX as usize {
        scan::<C, u16, F>(text, mid, less, sink)
    } else if text.len() < u32::MAX as usize {
        scan::<C, u32, F>(text, mid, less, sink)
    } else {
        scan::<C, usize, F>(text, mid, less, sink)
    }
}

fn scan<C, S, F>(text: Vec<C>, mid: usize, less: F, sink: &mut dyn Sink<C>)
where
    C: Clone,
    S: TextSize,
    F: Fn(&C, &C) -> bool,
{
    let array = match SuffixArray::<C, S, F>::with_less(text, less) {
        Ok(array) => array,
        // the dispatch above picked an index type that fits
        Err(_) => return,
    };
    let lcp = array.lcp();
    let positions = array.positions();
    let text = array.text();
    let mut best: &[C] = &[];
    for at in 1..positions.len() {
        let prev = positions[at - 1].to_usize();
        let cur = positions[at].to_usize();
        // only pairs that straddle the boundary witness both texts
        if (prev < mid) == (cur < mid) {
            continue;
        }
        let pos = prev.min(cur);
        // the common prefix must not run across the boundary
        let len = lcp[at - 1].to_usize().min(mid - pos);
        if len > best.len() {
            best = &text[pos..pos + len];
        }
    }
    for ch in best {
        sink.accept(ch.clone());
    }
}
