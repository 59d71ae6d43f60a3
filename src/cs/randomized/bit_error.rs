//! Sources of single-bit channel errors.
//!
//! The simulator never reaches for a global generator. Whoever drives it hands in an
//! [`ErrorSource`], so a run can be random, seeded, or fully scripted without any other change.

use crate::cs::ecc::CODEWORD_BITS;
use crate::error::{Error, Result};
use rand::Rng;

/// Chooses which codeword bit the channel corrupts.
pub trait ErrorSource {
    /// Returns the 0-based index of the bit to flip. Must be in `0..7`.
    fn next_error_index(&mut self) -> usize;
}

impl<E: ErrorSource + ?Sized> ErrorSource for &mut E {
    fn next_error_index(&mut self) -> usize {
        (**self).next_error_index()
    }
}

/// Draws error indices uniformly from `0..7`.
#[derive(Debug, Clone)]
pub struct RandomErrors<R> {
    rng: R,
}

impl<R: Rng> RandomErrors<R> {
    /// Wraps a random number generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Gives back the underlying generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> ErrorSource for RandomErrors<R> {
    fn next_error_index(&mut self) -> usize {
        self.rng.gen_range(0..CODEWORD_BITS)
    }
}

/// Replays a fixed sequence of error indices, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedErrors {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedErrors {
    /// Creates a scripted source.
    ///
    /// # Errors
    ///
    /// `Error::EmptyErrorSequence` if `indices` is empty, `Error::BitIndexOutOfRange` if any
    /// index is 7 or more.
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        if indices.is_empty() {
            return Err(Error::EmptyErrorSequence);
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= CODEWORD_BITS) {
            return Err(Error::BitIndexOutOfRange {
                index,
                len: CODEWORD_BITS,
            });
        }
        Ok(Self { indices, cursor: 0 })
    }

    /// Cycles through every bit position `0, 1, ..., 6, 0, ...`
    pub fn cycling() -> Self {
        Self {
            indices: (0..CODEWORD_BITS).collect(),
            cursor: 0,
        }
    }
}

impl ErrorSource for ScriptedErrors {
    fn next_error_index(&mut self) -> usize {
        let index = self.indices[self.cursor];
        self.cursor = (self.cursor + 1) % self.indices.len();
        index
    }
}
