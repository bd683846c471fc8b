//! Fixed-width two's-complement words with masking and wrapping arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum supported word width in bits.
pub const MIN_WIDTH: u32 = 1;
/// Maximum supported word width in bits.
pub const MAX_WIDTH: u32 = 64;

/// A two's-complement integer confined to a fixed bit width.
///
/// The bit pattern is stored zero-extended in a `u64`; bits at or above the
/// word width are always zero. Arithmetic wraps at the word width, matching
/// the behavior of a hardware datapath of that width. This representation is
/// used for register-file contents and for the datapaths of the RTL-style
/// candidate devices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    width: u32,
    /// Zero-extended bit pattern; bits >= `width` are always zero.
    bits: u64,
}

/// Errors produced when constructing a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The requested width is outside the supported 1..=64 range.
    #[error("invalid word width {0} (supported range is {MIN_WIDTH}..={MAX_WIDTH})")]
    InvalidWidth(u32),
}

impl Word {
    /// Creates a zero word of the given width.
    pub fn new(width: u32) -> Result<Self, WordError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
            return Err(WordError::InvalidWidth(width));
        }
        Ok(Self { width, bits: 0 })
    }

    /// Creates a word by truncating `value` to `width` bits.
    ///
    /// Values outside the representable range wrap, exactly as an assignment
    /// into a `width`-bit register would.
    pub fn from_i64(value: i64, width: u32) -> Result<Self, WordError> {
        let mut word = Self::new(width)?;
        word.bits = (value as u64) & word.mask();
        Ok(word)
    }

    /// Returns a word of the same width holding `value` truncated to it.
    ///
    /// This is the infallible form of [`from_i64`](Word::from_i64) for use
    /// once a width has been validated: an assignment of `value` into a
    /// register of this word's width.
    pub fn with_value(self, value: i64) -> Word {
        Word {
            width: self.width,
            bits: (value as u64) & self.mask(),
        }
    }

    /// Returns the word width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the signed value, sign-extended from the word width.
    pub fn value(&self) -> i64 {
        let sign_bit = 1u64 << (self.width - 1);
        if self.bits & sign_bit != 0 {
            (self.bits | !self.mask()) as i64
        } else {
            self.bits as i64
        }
    }

    /// Returns the raw zero-extended bit pattern.
    pub fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Returns true if all bits are zero.
    pub fn is_zero(&self) -> bool {
        self.bits == 0
    }

    /// Adds two words of the same width, wrapping at the word width.
    ///
    /// # Panics
    ///
    /// Panics if the operand widths differ.
    pub fn wrapping_add(&self, other: &Word) -> Word {
        self.check_width(other, "add");
        Word {
            width: self.width,
            bits: self.bits.wrapping_add(other.bits) & self.mask(),
        }
    }

    /// Multiplies two words of the same width, wrapping at the word width.
    ///
    /// # Panics
    ///
    /// Panics if the operand widths differ.
    pub fn wrapping_mul(&self, other: &Word) -> Word {
        self.check_width(other, "multiply");
        Word {
            width: self.width,
            bits: self.bits.wrapping_mul(other.bits) & self.mask(),
        }
    }

    fn check_width(&self, other: &Word, op: &str) {
        assert_eq!(
            self.width, other.width,
            "cannot {op} words of width {} and {}",
            self.width, other.width
        );
    }

    fn mask(&self) -> u64 {
        if self.width == 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word<{}>({})", self.width, self.value())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
