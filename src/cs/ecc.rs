//! Error correction code implementations.
//!
//! This module provides the Hamming(7,4) linear block code:
//! - Nibble-level `encode`/`decode` with syndrome-based single-error correction
//! - A byte-stream codec implementing [`ErrorCorrection`]
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::cs::ecc::{ErrorCorrection, HammingCode};
//!
//! let code = HammingCode::new();
//! let mut encoded = code.encode(b"Hi").unwrap();
//! encoded[0] ^= 0b0000_0100;
//! assert_eq!(code.decode(&encoded).unwrap(), b"Hi");
//! ```

pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Hamming(7,4) error correction code
pub mod hamming;
pub use hamming::{
    decode, encode, hamming_decode, hamming_encode, Codeword, DataWord, DecodeResult, HammingCode,
    SyndromeVector, CODEWORD_BITS, DATA_BITS, GENERATOR_MATRIX, PARITY_CHECK_MATRIX,
};
