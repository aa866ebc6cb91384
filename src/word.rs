//! Backing word types for [`UintN`](crate::UintN).

use core::fmt::{Binary, Debug};
use core::ops::{BitAndAssign, BitOrAssign};

use num_traits::{PrimInt, Unsigned, WrappingSub};

/// Unsigned machine integer usable as the backing storage of a
/// [`UintN`](crate::UintN).
///
/// The trait collects the numeric, bitwise, and formatting capabilities the
/// implementation needs on top of [`PrimInt`], plus [`BITS`](Self::BITS) so
/// word counts can be computed in const contexts. It is implemented for all
/// primitive unsigned integer types.
pub trait Word:
    PrimInt + Unsigned + WrappingSub + BitAndAssign + BitOrAssign + Binary + Debug
{
    /// Number of bits in the word type.
    const BITS: usize;
}

macro_rules! impl_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: usize = <$ty>::BITS as usize;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
