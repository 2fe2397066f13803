//! Substring indexing and pairwise alignment over generic symbols.
//!
//! Two index structures answer occurrence queries at interactive latency:
//! the [`array::SuffixArray`] (Manber–Myers, with a Kasai LCP array) and
//! the [`tree::SuffixTree`] (Ukkonen, built online). On top of them,
//! [`longest`] finds longest repeated and longest common substrings, and a
//! shared Hirschberg driver gives [`edit_distance`] and [`lcs`] their
//! linear-space tracebacks.
//!
//! ```
//!     use stringology::{array::SuffixArray, tree::SuffixTree};
//!
//!     let word = b"bananas$";
//!
//!     let sa = SuffixArray::<u8>::new(word.to_vec()).unwrap();
//!     assert_eq!(sa.find_any(b"nan"), Some(2));
//!
//!     let st: SuffixTree<u8> = SuffixTree::from_text(word.iter().copied()).unwrap();
//!     assert_eq!(st.find_first(b"nan"), Some(2));
//! ```

pub mod array;
pub mod edit_distance;
pub mod error;
pub mod hirschberg;
pub mod lcp;
pub mod lcs;
pub mod longest;
pub mod ring;
pub mod sink;
pub mod size;
pub mod tree;

pub use crate::error::CapacityError;
pub use crate::sink::Sink;
pub use crate::size::TextSize;
