//! Fixed-width unsigned integers packed into machine words.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, Shl, ShlAssign};

use crate::broadword;
use crate::word::Word;

/// Returns the number of `W` words needed to store `bits` bits.
///
/// This is the companion of [`UintN`]'s word-count parameter: `L` must equal
/// `words_for::<W>(N)`. The [`uint_n!`](crate::uint_n) macro fills it in so
/// call sites never spell it by hand.
///
/// # Examples
///
/// ```
/// use uintn::words_for;
///
/// assert_eq!(words_for::<u8>(9), 2);
/// assert_eq!(words_for::<u64>(64), 1);
/// assert_eq!(words_for::<u64>(65), 2);
/// ```
pub const fn words_for<W: Word>(bits: usize) -> usize {
    bits.div_ceil(W::BITS)
}

/// Unsigned integer of exactly `N` bits, stored in `L` words of `W`.
///
/// The value lives entirely on the stack in `L = ceil(N / W::BITS)` words,
/// with the word at index 0 holding the *most* significant bits. Logical bit
/// 0 is the least significant bit of the whole value and lives in the last
/// word.
///
/// `N` and `L` are coupled: every constructor forces a compile-time check
/// that `N` is positive and that `L` matches [`words_for`]. Use the
/// [`uint_n!`](crate::uint_n) macro to name instantiations without spelling
/// `L`.
///
/// # Filler bits
///
/// When `N` is not a multiple of `W::BITS`, the most significant word has
/// storage above position `N - 1`. Those filler bits are not kept at zero:
/// shifting, AND, [`decrement`](Self::decrement), and the single-bit
/// operations leave whatever they leave, and only the operations that treat
/// the value as exactly `N` bits wide, [`count_ones`](Self::count_ones) and
/// [`Display`](core::fmt::Display), mask them out. Whether normalizing on
/// every operation instead would be safer without measurable cost is an
/// open design question. Two consequences to keep in mind:
///
/// - comparing raw [`words`](Self::words) of logically equal values may
///   disagree, which is why the type provides no equality operator;
/// - [`from_words`](Self::from_words) does not mask either, so whatever the
///   caller puts above `N - 1` becomes filler.
///
/// # Examples
///
/// ```
/// use uintn::{popcount, uint_n, UintN};
///
/// let mut x: uint_n!(11, u8) = UintN::new();
/// x.set(1);
/// x.set(3);
/// x.set(10);
/// assert!(x.test(10));
/// assert_eq!(popcount(x), 3);
/// assert_eq!(x.to_string(), "100'00001010");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UintN<const N: usize, const L: usize, W = u64> {
    // Most significant word first; `words[L - 1]` holds logical bit 0.
    words: [W; L],
}

impl<const N: usize, const L: usize, W: Word> UintN<N, L, W> {
    /// The logical bit width `N`.
    pub const WIDTH: usize = N;

    /// The number of backing words `L`.
    pub const WORDS: usize = L;

    // Significant low-order bits in the most significant word.
    const TOP_BITS: usize = if N % W::BITS != 0 { N % W::BITS } else { W::BITS };

    // Referenced from every constructor so that invalid instantiations fail
    // to compile instead of misbehaving at run time.
    const CHECK: () = {
        assert!(N > 0, "bit width must be positive");
        assert!(
            L == N.div_ceil(W::BITS),
            "word count does not match bit width"
        );
    };

    /// Creates the all-zero value.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(9, u8) = UintN::new();
    /// assert_eq!(x.to_string(), "0'00000000");
    /// ```
    pub fn new() -> Self {
        let _ = Self::CHECK;
        Self {
            words: [W::zero(); L],
        }
    }

    /// Creates a value from exactly `L` words, most significant first.
    ///
    /// No masking is performed: bits placed at or above position `N - 1`'s
    /// word offset in `words[0]` become filler.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(9, u8) = UintN::from_words([0b1, 0b101]);
    /// assert_eq!(x.to_string(), "1'00000101");
    /// ```
    pub fn from_words(words: [W; L]) -> Self {
        let _ = Self::CHECK;
        Self { words }
    }

    /// Creates a value from a single word placed in the least significant
    /// position; all higher words are zero.
    ///
    /// Meaningful only when `x` fits in the bits the least significant word
    /// contributes to the value; no range check is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(10, u8) = UintN::from_word(0b1100);
    /// assert_eq!(x.to_string(), "00'00001100");
    /// ```
    pub fn from_word(x: W) -> Self {
        let _ = Self::CHECK;
        let mut words = [W::zero(); L];
        words[L - 1] = x;
        Self { words }
    }

    /// Returns the backing words, most significant first.
    ///
    /// Filler bits in the first word are exposed as stored; see the type
    /// documentation.
    pub fn words(&self) -> &[W; L] {
        &self.words
    }

    // Maps a logical bit position to (word index, offset in word).
    #[inline(always)]
    fn locate(pos: usize) -> (usize, usize) {
        (L - 1 - pos / W::BITS, pos % W::BITS)
    }

    /// Returns whether bit `pos` is set.
    ///
    /// Bit 0 is the least significant bit; bit `N - 1` the most significant.
    ///
    /// # Panics
    ///
    /// When debug assertions are enabled, panics if `N <= pos`. Release
    /// builds perform no check; `pos < N` is the caller's contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(11, u8) = UintN::from_words([0b101, 0b10010000]);
    /// assert!(x.test(10));
    /// assert!(!x.test(9));
    /// assert!(x.test(4));
    /// ```
    #[inline]
    pub fn test(&self, pos: usize) -> bool {
        debug_assert!(pos < N, "pos must be less than N={N}, but got {pos}.");
        let (word, bit) = Self::locate(pos);
        (self.words[word] >> bit) & W::one() != W::zero()
    }

    /// Sets bit `pos` to one, leaving all other bits unchanged.
    ///
    /// # Panics
    ///
    /// When debug assertions are enabled, panics if `N <= pos`. Release
    /// builds perform no check; `pos < N` is the caller's contract.
    #[inline]
    pub fn set(&mut self, pos: usize) {
        debug_assert!(pos < N, "pos must be less than N={N}, but got {pos}.");
        let (word, bit) = Self::locate(pos);
        self.words[word] |= W::one() << bit;
    }

    /// Clears bit `pos`, leaving all other bits unchanged.
    ///
    /// # Panics
    ///
    /// When debug assertions are enabled, panics if `N <= pos`. Release
    /// builds perform no check; `pos < N` is the caller's contract.
    #[inline]
    pub fn unset(&mut self, pos: usize) {
        debug_assert!(pos < N, "pos must be less than N={N}, but got {pos}.");
        let (word, bit) = Self::locate(pos);
        self.words[word] &= !(W::one() << bit);
    }

    /// Decrements the value by one, wrapping to all bits set when the value
    /// is zero.
    ///
    /// The borrow propagates from the least significant word upward and
    /// stops at the first word that was non-zero before decrementing.
    /// Filler bits take part in the borrow chain like any other bits; the
    /// logical value still wraps modulo `2^N` because the read paths mask.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let mut x: uint_n!(10, u8) = UintN::from_words([0b1, 0b1]);
    /// x.decrement();
    /// assert_eq!(x.to_string(), "01'00000000");
    /// x.decrement();
    /// assert_eq!(x.to_string(), "00'11111111");
    /// ```
    pub fn decrement(&mut self) {
        for i in (0..L).rev() {
            let word = self.words[i];
            self.words[i] = word.wrapping_sub(&W::one());
            if word != W::zero() {
                break;
            }
        }
    }

    /// Counts the set bits among the `N` logical bits.
    ///
    /// The most significant word is masked to its significant low bits
    /// before counting, so filler never contributes; the remaining words
    /// are counted at full width.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(2, u8) = UintN::from_word(0b111);
    /// assert_eq!(x.count_ones(), 2);
    /// ```
    pub fn count_ones(&self) -> usize {
        let top = self.words[0] & broadword::mask_lo::<W>(Self::TOP_BITS);
        let mut count = broadword::popcount(top);
        for &word in &self.words[1..] {
            count += broadword::popcount(word);
        }
        count
    }
}

/// Counts the set bits among the `N` logical bits of `x`.
///
/// Free-function form of [`UintN::count_ones`].
///
/// # Examples
///
/// ```
/// use uintn::{popcount, uint_n, UintN};
///
/// let x: uint_n!(9, u8) = UintN::from_words([0b1, 0b1]);
/// assert_eq!(popcount(x), 2);
/// ```
pub fn popcount<const N: usize, const L: usize, W: Word>(x: UintN<N, L, W>) -> usize {
    x.count_ones()
}

impl<const N: usize, const L: usize, W: Word> Default for UintN<N, L, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const L: usize, W: Word> ShlAssign<usize> for UintN<N, L, W> {
    /// Shifts the value left by `amount` bits in place.
    ///
    /// Bits shifted past the most significant word are discarded; vacated
    /// low positions are zero.
    fn shl_assign(&mut self, amount: usize) {
        let whole = amount / W::BITS;
        let shift = amount % W::BITS;
        if whole >= L {
            self.words = [W::zero(); L];
            return;
        }
        for i in 0..L {
            let src = i + whole;
            self.words[i] = if src < L {
                self.words[src] << shift
            } else {
                W::zero()
            };
            // The word one further right feeds the bits that spill in from
            // below. A zero in-word shift has no spill and would need a
            // right shift by the full word width, so it is skipped.
            if shift != 0 && src + 1 < L {
                self.words[i] |= self.words[src + 1] >> (W::BITS - shift);
            }
        }
    }
}

impl<const N: usize, const L: usize, W: Word> Shl<usize> for UintN<N, L, W> {
    type Output = Self;

    /// Returns the value shifted left by `amount` bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(10, u8) = UintN::from_words([0b0, 0b10101001]);
    /// assert_eq!((x << 3).to_string(), "01'01001000");
    /// ```
    fn shl(mut self, amount: usize) -> Self {
        self <<= amount;
        self
    }
}

impl<const N: usize, const L: usize, W: Word> BitAndAssign for UintN<N, L, W> {
    /// Word-wise AND; no masking is needed since AND cannot introduce set
    /// bits.
    fn bitand_assign(&mut self, rhs: Self) {
        for i in 0..L {
            self.words[i] &= rhs.words[i];
        }
    }
}

impl<const N: usize, const L: usize, W: Word> BitAnd for UintN<N, L, W> {
    type Output = Self;

    /// Returns the word-wise AND of the two values.
    ///
    /// # Examples
    ///
    /// ```
    /// use uintn::{uint_n, UintN};
    ///
    /// let x: uint_n!(10, u8) = UintN::from_words([0b10, 0b111]);
    /// let y: uint_n!(10, u8) = UintN::from_words([0b11, 0b101]);
    /// assert_eq!((x & y).to_string(), "10'00000101");
    /// ```
    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl<const N: usize, const L: usize, W: Word> fmt::Display for UintN<N, L, W> {
    /// Renders exactly `N` binary digits, most significant bit first, with
    /// `'` between words. Filler bits are never rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.words[0] & broadword::mask_lo::<W>(Self::TOP_BITS);
        write!(f, "{:0width$b}", top, width = Self::TOP_BITS)?;
        for &word in &self.words[1..] {
            write!(f, "'{:0width$b}", word, width = W::BITS)?;
        }
        Ok(())
    }
}

/// Expands to the [`UintN`] type with the given bit width over the given
/// word type (`u64` when omitted), computing the word-count parameter with
/// [`words_for`].
///
/// # Examples
///
/// ```
/// use uintn::{uint_n, UintN};
///
/// let x: uint_n!(11, u8) = UintN::from_word(0b101);
/// assert_eq!(x.to_string(), "000'00000101");
///
/// type ChildMap = uint_n!(64);
/// let map = ChildMap::new();
/// assert_eq!(map.count_ones(), 0);
/// ```
#[macro_export]
macro_rules! uint_n {
    ($bits:expr) => {
        $crate::UintN<{ $bits }, { $crate::words_for::<u64>($bits) }, u64>
    };
    ($bits:expr, $word:ty) => {
        $crate::UintN<{ $bits }, { $crate::words_for::<$word>($bits) }, $word>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    const SEED: u64 = 113;

    // Reads the logical value back through `test`, bit by bit.
    fn value<const N: usize, const L: usize, W: Word>(x: &UintN<N, L, W>) -> u128 {
        (0..N)
            .rev()
            .fold(0u128, |acc, pos| (acc << 1) | u128::from(x.test(pos)))
    }

    #[test]
    fn from_word_renders_width() {
        let x: uint_n!(2, u8) = UintN::from_word(1);
        assert_eq!(x.to_string(), "01");
    }

    #[test]
    fn from_words_renders_grouped() {
        let x: uint_n!(9, u8) = UintN::from_words([0b1, 0b101]);
        assert_eq!(x.to_string(), "1'00000101");
    }

    #[test]
    fn new_is_zero() {
        let x: uint_n!(11, u8) = UintN::new();
        assert_eq!(x.to_string(), "000'00000000");
        assert_eq!(x.count_ones(), 0);
    }

    #[test]
    fn shl_single_word() {
        let x: uint_n!(1, u8) = UintN::from_word(1);
        assert_eq!((x << 1).to_string(), "0");

        let x: uint_n!(2, u8) = UintN::from_word(0b01);
        assert_eq!((x << 1).to_string(), "10");
    }

    #[test]
    fn shl_across_words() {
        let mut x: uint_n!(10, u8) = UintN::from_words([0b00000000, 0b10101001]);
        x <<= 3;
        assert_eq!(x.to_string(), "01'01001000");

        let mut x: uint_n!(32, u8) =
            UintN::from_words([0b00000000, 0b10101001, 0b00001000, 0b00000100]);
        x <<= 9;
        assert_eq!(x.to_string(), "01010010'00010000'00001000'00000000");
    }

    #[test]
    fn shl_zero_is_identity() {
        let x: uint_n!(10, u8) = UintN::from_words([0b01, 0b01001000]);
        assert_eq!((x << 0).to_string(), x.to_string());
    }

    #[test]
    fn shl_word_multiple() {
        let mut x: uint_n!(16, u8) = UintN::from_words([0b00000000, 0b10101001]);
        x <<= 8;
        assert_eq!(x.to_string(), "10101001'00000000");
    }

    #[test]
    fn shl_full_width_clears() {
        let x: uint_n!(10, u8) = UintN::from_words([0b11, 0b11111111]);
        assert_eq!((x << 10).to_string(), "00'00000000");
        assert_eq!((x << 64).to_string(), "00'00000000");
    }

    #[test]
    fn decrement_single_word() {
        let mut x: uint_n!(1, u8) = UintN::from_word(1);
        x.decrement();
        assert_eq!(x.to_string(), "0");
        x.decrement();
        assert_eq!(x.to_string(), "1");
    }

    #[test]
    fn decrement_borrows_across_words() {
        let mut x: uint_n!(10, u8) = UintN::from_words([0b1, 0b1]);
        x.decrement();
        assert_eq!(x.to_string(), "01'00000000");
        x.decrement();
        assert_eq!(x.to_string(), "00'11111111");
    }

    #[test]
    fn decrement_zero_wraps() {
        let mut x: uint_n!(9, u8) = UintN::new();
        x.decrement();
        assert_eq!(x.to_string(), "1'11111111");
    }

    #[test]
    fn popcount_masks_filler() {
        let x: uint_n!(1, u8) = UintN::from_word(0);
        assert_eq!(popcount(x), 0);
        let x: uint_n!(1, u8) = UintN::from_word(1);
        assert_eq!(popcount(x), 1);
        let x: uint_n!(2, u8) = UintN::from_word(0b11);
        assert_eq!(popcount(x), 2);
        let x: uint_n!(2, u8) = UintN::from_word(0b111);
        assert_eq!(popcount(x), 2);
        let x: uint_n!(9, u8) = UintN::from_words([0b1, 0b1]);
        assert_eq!(popcount(x), 2);
    }

    #[test]
    fn popcount_exact_word_multiple() {
        let x: uint_n!(16, u8) = UintN::from_words([0xFF, 0xFF]);
        assert_eq!(popcount(x), 16);

        let x: uint_n!(8, u8) = UintN::from_word(0xAB);
        assert_eq!(popcount(x), 0xABu8.count_ones() as usize);
    }

    #[test]
    fn bitand_word_wise() {
        let mut x: uint_n!(1, u8) = UintN::from_word(1);
        let y: uint_n!(1, u8) = UintN::from_word(1);
        x &= y;
        assert_eq!(x.to_string(), "1");

        let mut x: uint_n!(1, u8) = UintN::from_word(0);
        x &= y;
        assert_eq!(x.to_string(), "0");

        let mut x: uint_n!(10, u8) = UintN::from_words([0b10, 0b111]);
        let y: uint_n!(10, u8) = UintN::from_words([0b11, 0b101]);
        x &= y;
        assert_eq!(x.to_string(), "10'00000101");
    }

    #[test]
    fn bitand_properties() {
        let x: uint_n!(10, u8) = UintN::from_words([0b10, 0b111]);
        let y: uint_n!(10, u8) = UintN::from_words([0b11, 0b101]);
        let z: uint_n!(10, u8) = UintN::from_words([0b01, 0b110]);
        let zero: uint_n!(10, u8) = UintN::new();

        assert_eq!((x & y).to_string(), (y & x).to_string());
        assert_eq!(((x & y) & z).to_string(), (x & (y & z)).to_string());
        assert_eq!((x & x).to_string(), x.to_string());
        assert_eq!((x & zero).to_string(), zero.to_string());
    }

    #[test]
    fn test_reads_single_bits() {
        let x: uint_n!(1, u8) = UintN::from_word(1);
        assert!(x.test(0));
        let x: uint_n!(1, u8) = UintN::from_word(0);
        assert!(!x.test(0));

        let x: uint_n!(11, u8) = UintN::from_words([0b101, 0b10010000]);
        assert!(x.test(10));
        assert!(!x.test(9));
        assert!(x.test(8));
        assert!(x.test(7));
        assert!(!x.test(6));
        assert!(x.test(4));
        assert!(!x.test(3));
    }

    #[test]
    fn set_is_idempotent() {
        let mut x: uint_n!(11, u8) = UintN::new();
        x.set(1);
        x.set(3);
        x.set(7);
        x.set(10);
        x.set(10);
        assert_eq!(x.to_string(), "100'10001010");
    }

    #[test]
    fn unset_clears_single_bits() {
        let mut x: uint_n!(11, u8) = UintN::from_words([0b101, 0b10001010]);
        x.unset(0);
        x.unset(1);
        x.unset(8);
        assert_eq!(x.to_string(), "100'10001000");
    }

    #[test]
    fn set_then_test_round_trip() {
        for pos in 0..11 {
            let mut x: uint_n!(11, u8) = UintN::new();
            x.set(pos);
            for q in 0..11 {
                assert_eq!(x.test(q), q == pos);
            }
            x.unset(pos);
            assert_eq!(x.count_ones(), 0);
        }
    }

    #[test]
    fn default_word_type() {
        let mut x: uint_n!(70) = UintN::new();
        x.set(69);
        x.set(0);
        assert_eq!(x.count_ones(), 2);
        assert!(x.test(69));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn test_out_of_range_asserts() {
        let x: uint_n!(11, u8) = UintN::new();
        x.test(11);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn set_out_of_range_asserts() {
        let mut x: uint_n!(11, u8) = UintN::new();
        x.set(11);
    }

    #[test]
    fn matches_wide_reference() {
        const MASK: u128 = (1 << 20) - 1;

        let mut rng = ChaChaRng::seed_from_u64(SEED);
        let mut x: uint_n!(20, u8) = UintN::new();
        let mut reference: u128 = 0;

        for _ in 0..1000 {
            match rng.gen_range(0..4) {
                0 => {
                    let pos = rng.gen_range(0..20);
                    x.set(pos);
                    reference |= 1 << pos;
                }
                1 => {
                    let pos = rng.gen_range(0..20);
                    x.unset(pos);
                    reference &= !(1 << pos);
                }
                2 => {
                    let amount = rng.gen_range(0..25);
                    x <<= amount;
                    reference = (reference << amount) & MASK;
                }
                _ => {
                    x.decrement();
                    reference = reference.wrapping_sub(1) & MASK;
                }
            }
            assert_eq!(value(&x), reference);
            assert_eq!(x.count_ones(), reference.count_ones() as usize);
        }
    }
}
