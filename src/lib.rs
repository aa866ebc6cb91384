//! # Fixed-width unsigned integers in Rust
//!
//! `uintn` provides [`UintN`], an unsigned integer of exactly `N` bits
//! packed into a fixed-length array of machine words. It is the compact
//! presence-bitmap building block used inside latency-sensitive containers
//! (child-existence maps of trie nodes over a bounded alphabet, occupancy
//! bitmaps of open-addressing tables, and similar) where the width is
//! known at compile time and allocation is unwelcome.
//!
//! ## Design policy
//!
//! - **Fixed width, inline storage:**
//!   The bit width is a compile-time constant and the value is a plain
//!   `Copy` type of `ceil(N / W::BITS)` words on the stack. No heap, no
//!   shared ownership, no synchronization.
//!
//! - **Pay for masking only where it matters:**
//!   Storage bits above position `N - 1` in the top word are *filler* and
//!   are not kept normalized; the operations that treat the value as
//!   exactly `N` bits wide mask them out. See the [`UintN`] documentation
//!   for the full contract.
//!
//! - **Zero-overhead contracts:**
//!   Bit positions must be in `[0, N)`. The bound is checked by
//!   `debug_assert!` only; release builds trust the caller.
//!
//! - **Word-generic:**
//!   Any primitive unsigned integer can back the storage via the [`Word`]
//!   trait; `u64` is the default.
//!
//! ## Examples
//!
//! The [`uint_n!`] macro names an instantiation without spelling the word
//! count:
//!
//! ```
//! use uintn::{popcount, uint_n, UintN};
//!
//! let mut children: uint_n!(26, u8) = UintN::new();
//! children.set(0);
//! children.set(25);
//! assert!(children.test(25));
//! assert_eq!(popcount(children), 2);
//! assert_eq!(children.to_string(), "10'00000000'00000000'00000001");
//! ```
//!
//! ## Non-goals
//!
//! General arithmetic (addition, multiplication, division) is out of
//! scope: the type supports exactly the operations its container use cases
//! need, namely shifting, masking, decrement-with-borrow, population count,
//! and single-bit access.
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod broadword;
pub mod uint;
pub mod word;

pub use uint::{popcount, words_for, UintN};
pub use word::Word;
