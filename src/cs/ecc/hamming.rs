//! Hamming(7,4) error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! The (7,4) variant encodes 4 data bits into 7 bits by adding 3 parity bits, and its minimum
//! distance of 3 lets it correct any single-bit error. Two flipped bits are neither detected nor
//! corrected: the decoder confidently "fixes" the wrong position.
//!
//! Codewords use the classic positional layout, 1-indexed:
//!
//! ```text
//! position:  1   2   3   4   5   6   7
//! bit:       p1  p2  d1  p3  d2  d3  d4
//! ```
//!
//! Parity bit `p_k` sits at position `2^(k-1)` and covers every position whose index has that bit
//! set, so the syndrome read back as a binary number is the 1-based position of the error.
//!
//! This implementation provides:
//! - [`encode`] and [`decode`] over single nibbles, exposing the syndrome and corrected codeword
//! - [`HammingCode`], a byte-stream codec implementing [`ErrorCorrection`]
//! - The generator and parity-check matrices for the layout above
//!
//! All inputs are masked to their low bit, so `encode` and `decode` are total functions.

use crate::cs::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use bitvec::prelude::*;
use std::fmt;

/// Number of data bits per codeword
pub const DATA_BITS: usize = 4;

/// Number of bits in a codeword
pub const CODEWORD_BITS: usize = 7;

/// 0-based codeword indices holding `d1..d4`
const DATA_POSITIONS: [usize; DATA_BITS] = [2, 4, 5, 6];

/// Generator matrix `G` for the `[p1, p2, d1, p3, d2, d3, d4]` layout.
///
/// Row `i` is the codeword of the data word with only `d(i+1)` set, so `encode(d) = d·G (mod 2)`.
pub const GENERATOR_MATRIX: [[u8; CODEWORD_BITS]; DATA_BITS] = [
    [1, 1, 1, 0, 0, 0, 0],
    [1, 0, 0, 1, 1, 0, 0],
    [0, 1, 0, 1, 0, 1, 0],
    [1, 1, 0, 1, 0, 0, 1],
];

/// Parity-check matrix `H`. Column `j` is the binary form of position `j + 1`, LSB in row 0.
pub const PARITY_CHECK_MATRIX: [[u8; CODEWORD_BITS]; 3] = [
    [1, 0, 1, 0, 1, 0, 1],
    [0, 1, 1, 0, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 1],
];

fn write_bits(f: &mut fmt::Formatter<'_>, bits: &[u8]) -> fmt::Result {
    for (i, bit) in bits.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", bit)?;
    }
    Ok(())
}

/// Four data bits `[d1, d2, d3, d4]`, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataWord([u8; DATA_BITS]);

impl DataWord {
    /// Creates a data word, keeping only the low bit of each input
    pub fn new(bits: [u8; DATA_BITS]) -> Self {
        Self(bits.map(|b| b & 1))
    }

    /// Splits the low four bits of `nibble` into `[d1, d2, d3, d4]`
    pub fn from_nibble(nibble: u8) -> Self {
        Self([
            (nibble >> 3) & 1,
            (nibble >> 2) & 1,
            (nibble >> 1) & 1,
            nibble & 1,
        ])
    }

    /// Reads up to four bits from a bit slice. Missing trailing bits are zero.
    pub fn from_bits(bits: &BitSlice<u8, Msb0>) -> Self {
        Self(std::array::from_fn(|i| bits.get(i).map_or(0, |bit| u8::from(*bit))))
    }

    /// The bits `[d1, d2, d3, d4]`
    pub fn bits(&self) -> [u8; DATA_BITS] {
        self.0
    }

    /// The data word as a 4-bit value, `d1` being the most significant bit
    pub fn nibble(&self) -> u8 {
        self.0.iter().fold(0, |acc, &bit| (acc << 1) | bit)
    }
}

impl fmt::Display for DataWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

/// Seven code bits `[p1, p2, d1, p3, d2, d3, d4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword([u8; CODEWORD_BITS]);

impl Codeword {
    /// Creates a codeword, keeping only the low bit of each input
    pub fn new(bits: [u8; CODEWORD_BITS]) -> Self {
        Self(bits.map(|b| b & 1))
    }

    /// The bits at positions 1..=7
    pub fn bits(&self) -> [u8; CODEWORD_BITS] {
        self.0
    }

    /// Returns a copy with the bit at 0-based `index` inverted.
    ///
    /// # Errors
    ///
    /// `Error::BitIndexOutOfRange` if `index >= 7`.
    pub fn flip(&self, index: usize) -> Result<Self> {
        if index >= CODEWORD_BITS {
            return Err(Error::BitIndexOutOfRange {
                index,
                len: CODEWORD_BITS,
            });
        }
        let mut bits = self.0;
        bits[index] ^= 1;
        Ok(Self(bits))
    }

    /// The bits at the data positions 3, 5, 6 and 7, taken as they are with no correction
    pub fn data_bits(&self) -> DataWord {
        DataWord(DATA_POSITIONS.map(|i| self.0[i]))
    }

    /// Number of positions where `self` and `other` differ
    pub fn distance(&self, other: &Codeword) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Packs the codeword MSB-first into bits 1..8 of a byte; bit 0 is always clear.
    fn to_byte(self) -> u8 {
        let mut byte = 0u8;
        let bits = byte.view_bits_mut::<Msb0>();
        for (i, &bit) in self.0.iter().enumerate() {
            bits.set(i + 1, bit == 1);
        }
        byte
    }

    /// Inverse of `to_byte`. The leading padding bit is ignored.
    fn from_byte(byte: u8) -> Self {
        let bits = byte.view_bits::<Msb0>();
        Self(std::array::from_fn(|i| u8::from(bits[i + 1])))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

/// Syndrome bits `[s1, s2, s3]` computed from a received codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SyndromeVector([u8; 3]);

impl SyndromeVector {
    /// Computes `H·rᵀ (mod 2)` for a received word
    pub fn of(received: &Codeword) -> Self {
        Self(PARITY_CHECK_MATRIX.map(|row| {
            row.iter()
                .zip(received.0.iter())
                .fold(0, |acc, (h, bit)| acc ^ (h & bit))
        }))
    }

    /// The bits `[s1, s2, s3]`
    pub fn bits(&self) -> [u8; 3] {
        self.0
    }

    /// `s1 + 2*s2 + 4*s3`: 0 for no error, otherwise the 1-based error position
    pub fn error_position(&self) -> u8 {
        self.0[0] + (self.0[1] << 1) + (self.0[2] << 2)
    }

    /// True when every parity check passes
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0]
    }
}

impl fmt::Display for SyndromeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

/// Everything the decoder derives from one received codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeResult {
    /// Data bits extracted from the corrected codeword
    pub data_bits: DataWord,
    /// Syndrome of the received word
    pub syndrome_bits: SyndromeVector,
    /// 0 if no error was detected, else the 1-based position that was flipped back
    pub error_position: u8,
    /// The received word with the detected error undone
    pub corrected_codeword: Codeword,
}

/// Encodes four data bits into a codeword.
///
/// ```text
/// p1 = d1 ^ d2 ^ d4    (positions 1, 3, 5, 7)
/// p2 = d1 ^ d3 ^ d4    (positions 2, 3, 6, 7)
/// p3 = d2 ^ d3 ^ d4    (positions 4, 5, 6, 7)
/// ```
pub fn encode(data: DataWord) -> Codeword {
    let [d1, d2, d3, d4] = data.0;

    let p1 = d1 ^ d2 ^ d4;
    let p2 = d1 ^ d3 ^ d4;
    let p3 = d2 ^ d3 ^ d4;

    Codeword([p1, p2, d1, p3, d2, d3, d4])
}

/// Decodes a received codeword, correcting at most one flipped bit.
pub fn decode(received: Codeword) -> DecodeResult {
    let syndrome_bits = SyndromeVector::of(&received);
    let error_position = syndrome_bits.error_position();

    let mut corrected = received.0;
    if (1..=CODEWORD_BITS as u8).contains(&error_position) {
        corrected[usize::from(error_position) - 1] ^= 1;
    }
    let corrected_codeword = Codeword(corrected);

    DecodeResult {
        data_bits: corrected_codeword.data_bits(),
        syndrome_bits,
        error_position,
        corrected_codeword,
    }
}

/// Byte-stream Hamming(7,4) codec.
///
/// Each input byte is split into its high and low nibble; each nibble becomes one output byte
/// holding the 7 code bits MSB-first behind a zero padding bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingCode;

impl HammingCode {
    /// Creates the codec
    pub fn new() -> Self {
        HammingCode
    }

    /// Gets the number of encoded bytes needed for a given number of input bytes
    pub fn encoded_bytes_needed(&self, input_bytes: usize) -> usize {
        input_bytes * 8 / DATA_BITS
    }
}

impl ErrorCorrection for HammingCode {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let data_bits = data.view_bits::<Msb0>();

        Ok(data_bits
            .chunks(DATA_BITS)
            .map(|chunk| encode(DataWord::from_bits(chunk)).to_byte())
            .collect())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % 2 != 0 {
            return Err(Error::InvalidInput(format!(
                "Encoded data must hold two codewords per byte, got {} codewords",
                data.len()
            )));
        }

        let mut decoded = bitvec![u8, Msb0; 0; data.len() * DATA_BITS];

        for (block_idx, &byte) in data.iter().enumerate() {
            let result = decode(Codeword::from_byte(byte));
            for (bit_idx, bit) in result.data_bits.bits().into_iter().enumerate() {
                decoded.set(block_idx * DATA_BITS + bit_idx, bit == 1);
            }
        }

        Ok(decoded.as_raw_slice().to_vec())
    }
}

/// Encodes bytes using the Hamming(7,4) byte-stream codec
pub fn hamming_encode(data: &[u8]) -> Result<Vec<u8>> {
    HammingCode::new().encode(data)
}

/// Decodes bytes produced by [`hamming_encode`], correcting one error per codeword
pub fn hamming_decode(encoded: &[u8]) -> Result<Vec<u8>> {
    HammingCode::new().decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_data_words() -> impl Iterator<Item = DataWord> {
        (0u8..16).map(DataWord::from_nibble)
    }

    #[test]
    fn test_known_vector() {
        // p1 = 1^0^1 = 0, p2 = 1^1^1 = 1, p3 = 0^1^1 = 0
        let codeword = encode(DataWord::new([1, 0, 1, 1]));
        assert_eq!(codeword.bits(), [0, 1, 1, 0, 0, 1, 1]);

        for index in 0..CODEWORD_BITS {
            let received = codeword.flip(index).unwrap();
            let result = decode(received);
            assert_eq!(result.data_bits.bits(), [1, 0, 1, 1]);
            assert_eq!(result.error_position as usize, index + 1);
            assert_eq!(result.corrected_codeword, codeword);
        }
    }

    #[test]
    fn test_round_trip_without_error() {
        for data in all_data_words() {
            let result = decode(encode(data));
            assert_eq!(result.data_bits, data);
            assert_eq!(result.error_position, 0);
            assert!(result.syndrome_bits.is_zero());
            assert_eq!(result.corrected_codeword, encode(data));
        }
    }

    #[test]
    fn test_single_error_correction_exhaustive() {
        let mut cases = 0;
        for data in all_data_words() {
            let codeword = encode(data);
            for index in 0..CODEWORD_BITS {
                let received = codeword.flip(index).unwrap();
                assert_eq!(received.distance(&codeword), 1);

                let result = decode(received);
                assert_eq!(result.data_bits, data);
                assert_eq!(result.error_position as usize, index + 1);
                assert_eq!(result.syndrome_bits.error_position(), result.error_position);
                assert_eq!(result.corrected_codeword, codeword);
                cases += 1;
            }
        }
        assert_eq!(cases, 112);
    }

    #[test]
    fn test_double_error_is_miscorrected() {
        let data = DataWord::new([1, 0, 1, 1]);
        let codeword = encode(data);
        let received = codeword.flip(0).unwrap().flip(1).unwrap();

        let result = decode(received);
        // positions 1 and 2 XOR to syndrome 3, so bit 3 is wrongly flipped
        assert_eq!(result.error_position, 3);
        assert_ne!(result.data_bits, data);
    }

    #[test]
    fn test_inputs_are_masked() {
        let data = DataWord::new([3, 2, 5, 255]);
        assert_eq!(data.bits(), [1, 0, 1, 1]);

        let codeword = Codeword::new([2, 3, 3, 4, 6, 7, 9]);
        assert_eq!(codeword.bits(), [0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(decode(codeword).error_position, 0);
    }

    #[test]
    fn test_nibble_conversion() {
        assert_eq!(DataWord::from_nibble(0b1011).bits(), [1, 0, 1, 1]);
        assert_eq!(DataWord::from_nibble(0xF7).bits(), [0, 1, 1, 1]);
        for nibble in 0u8..16 {
            assert_eq!(DataWord::from_nibble(nibble).nibble(), nibble);
        }
    }

    #[test]
    fn test_flip_out_of_range() {
        let codeword = encode(DataWord::default());
        assert_eq!(
            codeword.flip(7),
            Err(Error::BitIndexOutOfRange { index: 7, len: 7 })
        );
    }

    #[test]
    fn test_received_data_bits_are_uncorrected() {
        let codeword = encode(DataWord::new([1, 0, 1, 1]));
        // index 4 is d2
        let received = codeword.flip(4).unwrap();
        assert_eq!(received.data_bits().bits(), [1, 1, 1, 1]);
        assert_eq!(decode(received).data_bits.bits(), [1, 0, 1, 1]);
    }

    #[test]
    fn test_generator_matrix_matches_encode() {
        for data in all_data_words() {
            let mut product = [0u8; CODEWORD_BITS];
            for (row, &bit) in GENERATOR_MATRIX.iter().zip(data.bits().iter()) {
                for (acc, &g) in product.iter_mut().zip(row.iter()) {
                    *acc ^= g & bit;
                }
            }
            assert_eq!(encode(data).bits(), product);
        }
    }

    #[test]
    fn test_parity_check_annihilates_generator() {
        for row in GENERATOR_MATRIX.iter() {
            assert!(SyndromeVector::of(&Codeword::new(*row)).is_zero());
        }
    }

    #[test]
    fn test_minimum_distance_is_three() {
        let codewords: Vec<Codeword> = all_data_words().map(encode).collect();
        let mut min = CODEWORD_BITS;
        for (i, a) in codewords.iter().enumerate() {
            for b in codewords.iter().skip(i + 1) {
                min = min.min(a.distance(b));
            }
        }
        assert_eq!(min, 3);
    }

    #[test]
    fn test_display() {
        let codeword = encode(DataWord::new([1, 0, 1, 1]));
        assert_eq!(codeword.to_string(), "0 1 1 0 0 1 1");
        assert_eq!(DataWord::from_nibble(0b0110).to_string(), "0 1 1 0");
        assert_eq!(decode(codeword.flip(5).unwrap()).syndrome_bits.to_string(), "0 1 1");
    }

    #[test]
    fn test_byte_codec_round_trip() {
        let data = b"Test data for Hamming code";
        let code = HammingCode::new();

        let encoded = code.encode(data).unwrap();
        assert_eq!(encoded.len(), code.encoded_bytes_needed(data.len()));
        assert!(encoded.iter().all(|byte| byte & 0x80 == 0));

        let decoded = code.decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_byte_codec_error_correction() {
        let data = b"Test";
        let mut encoded = hamming_encode(data).unwrap();

        // One error in every codeword, cycling through the code bits
        for (i, byte) in encoded.iter_mut().enumerate() {
            *byte ^= 0x40 >> (i % CODEWORD_BITS);
        }

        assert_eq!(hamming_decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_byte_codec_padding_bit_ignored() {
        let mut encoded = hamming_encode(b"A").unwrap();
        encoded[0] |= 0x80;
        assert_eq!(hamming_decode(&encoded).unwrap(), b"A");
    }

    #[test]
    fn test_byte_codec_odd_length() {
        let encoded = hamming_encode(b"ok").unwrap();
        let result = hamming_decode(&encoded[..3]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_empty_input() {
        let code = HammingCode::new();

        let encoded = code.encode(&[]).unwrap();
        assert!(encoded.is_empty());

        let decoded = code.decode(&[]).unwrap();
        assert!(decoded.is_empty());
    }
}
