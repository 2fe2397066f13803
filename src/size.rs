//! Index types bounding text offsets and node ids.
//!
//! Every structure in this crate is generic over an unsigned index type so
//! the caller can trade address range for memory. A `u32` suffix array over
//! ASCII text is half the size of a `usize` one on 64-bit targets.

use crate::error::CapacityError;
use core::convert::TryFrom;
use core::fmt::Debug;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Unsigned index selected by the caller to bound text offsets.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize`.
pub trait TextSize:
    Copy
    + Ord
    + Eq
    + Debug
    + Default
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
{
    fn zero() -> Self;
    fn one() -> Self;
    fn max() -> Self;
    fn to_usize(self) -> usize;
    /// Narrowing conversion; `None` when the value does not fit.
    fn from_usize(n: usize) -> Option<Self>;
}

macro_rules! impl_text_size {
    ($($tp:ident),* $(,)?) => {
        $(
            impl TextSize for $tp {
                #[inline]
                fn zero() -> Self {
                    0
                }
                #[inline]
                fn one() -> Self {
                    1
                }
                #[inline]
                fn max() -> Self {
                    $tp::MAX
                }
                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
                #[inline]
                fn from_usize(n: usize) -> Option<Self> {
                    TryFrom::try_from(n).ok()
                }
            }
        )*
    };
}
impl_text_size!(u8, u16, u32, u64, usize);

// leaf_id <-> suffix origin, so edges and child maps store a bare index
#[inline]
pub(crate) fn flip<S: TextSize>(n: S) -> S {
    <S as TextSize>::max() - n
}

#[inline]
pub(crate) fn checked<S: TextSize>(len: usize) -> Result<S, CapacityError> {
    S::from_usize(len).ok_or(CapacityError {
        len,
        max: <S as TextSize>::max().to_usize(),
    })
}
