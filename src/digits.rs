//! The digit-storage abstraction the big-integer kernel is generic over.
//!
//! The digit width is a type parameter bounded by [`Digit`]; storage itself
//! stays a plain `Vec<D>`, which already gives random access, `len`,
//! `push`, `reserve`, and `.iter().rev()` for free.
//!
//! Every double-width scratch value used by the kernel fits in a `u64`
//! regardless of which [`Digit`] is chosen (8, 16, or 32 bits), so the
//! scratch register is fixed at `u64` rather than a second associated type.
//! A digit width whose double does not fit a native integer simply has no
//! [`Digit`] impl.

use std::fmt::Debug;
use std::hash::Hash;

/// One base-`β` limb of a [`crate::Z`], `β = 2^BITS`.
pub trait Digit: Copy + Clone + Default + Eq + Ord + Hash + Debug + 'static {
    /// The digit width `w`.
    const BITS: u32;
    /// The largest representable digit, `β - 1`.
    const MAX: Self;

    /// Widen to a `u64` scratch register (lossless: `BITS <= 32`).
    fn to_wide(self) -> u64;

    /// Narrow a `u64` scratch register back to a digit, truncating to the
    /// low `BITS` bits.
    fn from_wide(wide: u64) -> Self;

    /// Number of leading zero bits within this digit (not within the 64
    /// bits of the `u64` scratch type it widens to).
    fn digit_leading_zeros(self) -> u32 {
        self.to_wide().leading_zeros() - (64 - Self::BITS)
    }
}

impl Digit for u8 {
    const BITS: u32 = 8;
    const MAX: Self = u8::MAX;

    fn to_wide(self) -> u64 {
        u64::from(self)
    }

    fn from_wide(wide: u64) -> Self {
        wide as Self
    }
}

impl Digit for u16 {
    const BITS: u32 = 16;
    const MAX: Self = u16::MAX;

    fn to_wide(self) -> u64 {
        u64::from(self)
    }

    fn from_wide(wide: u64) -> Self {
        wide as Self
    }
}

impl Digit for u32 {
    const BITS: u32 = 32;
    const MAX: Self = u32::MAX;

    fn to_wide(self) -> u64 {
        u64::from(self)
    }

    fn from_wide(wide: u64) -> Self {
        wide as Self
    }
}

/// The digit width used when a caller doesn't pin one down.
pub type DefaultDigit = u32;
