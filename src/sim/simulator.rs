//! The simulation driver.
//!
//! Each 4-bit block goes through the same pipeline:
//!
//! 1. Encode the data word into a Hamming(7,4) codeword
//! 2. Ask the [`ErrorSource`] for a bit index and flip that bit
//! 3. Decode the received word, correcting the error
//!
//! Image runs feed the high then the low nibble of every selected pixel's luma through this
//! pipeline and keep a full trace of each step.

use crate::cs::ecc::{decode, encode, Codeword, DataWord, DecodeResult, DATA_BITS};
use crate::cs::randomized::{ErrorSource, RandomErrors};
use crate::error::Result;
use crate::sim::config::SimulationConfig;
use crate::sim::image::{PixelBuffer, Region, Rgb, Selection};
use crate::sim::stats::RunStatistics;
use bitvec::prelude::*;
use log::{debug, trace};
use rand_chacha::ChaCha20Rng;
use std::fmt;

/// Which half of the luma byte a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NibbleSelector {
    /// Bits 7..4
    High,
    /// Bits 3..0
    Low,
}

impl NibbleSelector {
    /// Processing order within a pixel
    pub const BOTH: [NibbleSelector; 2] = [NibbleSelector::High, NibbleSelector::Low];

    /// 0 for the high nibble, 1 for the low nibble
    pub fn index(&self) -> usize {
        match self {
            NibbleSelector::High => 0,
            NibbleSelector::Low => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NibbleSelector::High => "High nibble (bits b7-b4)",
            NibbleSelector::Low => "Low nibble (bits b3-b0)",
        }
    }
}

/// One data word's trip through the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transmission {
    /// The data word that was sent
    pub data: DataWord,
    /// Its encoding
    pub codeword: Codeword,
    /// 0-based index of the bit the channel flipped
    pub error_bit_index: usize,
    /// The codeword after corruption
    pub received: Codeword,
    /// What the decoder made of `received`
    pub decoded: DecodeResult,
}

/// Trace of a single nibble of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodewordRecord {
    pub x: usize,
    pub y: usize,
    pub nibble: NibbleSelector,
    /// Luma of the source pixel
    pub gray: u8,
    pub transmission: Transmission,
}

impl fmt::Display for CodewordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.transmission;
        let gray_bits = self
            .gray
            .view_bits::<Msb0>()
            .iter()
            .map(|bit| if *bit { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(f, "Pixel:               ({}, {})", self.x, self.y)?;
        writeln!(f, "Nibble:              {}", self.nibble.label())?;
        writeln!(f, "Gray value:          {}", self.gray)?;
        writeln!(f, "Gray bits:           {}", gray_bits)?;
        writeln!(f, "Data bits d:         {}", t.data)?;
        writeln!(f, "Codeword c:          {}", t.codeword)?;
        writeln!(f, "Error bit:           {}", t.error_bit_index + 1)?;
        writeln!(f, "Received r:          {}", t.received)?;
        writeln!(f, "Syndrome s:          {}", t.decoded.syndrome_bits)?;
        writeln!(f, "Error position:      {}", t.decoded.error_position)?;
        writeln!(f, "Corrected codeword:  {}", t.decoded.corrected_codeword)?;
        write!(f, "Decoded data bits:   {}", t.decoded.data_bits)
    }
}

/// How an image run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    /// At least one pixel was processed
    Completed,
    /// The selection clamped to zero pixels; nothing was processed
    RegionTooSmall,
}

/// Everything produced by [`Simulator::run_on_region`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    /// The selection after flooring and clamping
    pub region: Region,
    /// Preview built from the received, uncorrected data bits
    pub corrupted: PixelBuffer,
    /// Preview built from the decoded data bits
    pub corrected: PixelBuffer,
    /// One record per nibble, high before low, pixels in row-major order
    pub records: Vec<CodewordRecord>,
    pub stats: RunStatistics,
}

impl SimulationRun {
    pub fn status(&self) -> RunStatus {
        if self.records.is_empty() {
            RunStatus::RegionTooSmall
        } else {
            RunStatus::Completed
        }
    }

    /// The record at 1-based `index`, or `None` if out of range
    pub fn record(&self, index: usize) -> Option<&CodewordRecord> {
        index.checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// The record at 1-based `index`, with the index clamped into `1..=records.len()`.
    ///
    /// Returns the clamped index alongside the record, or `None` if there are no records.
    pub fn inspect(&self, index: usize) -> Option<(usize, &CodewordRecord)> {
        if self.records.is_empty() {
            return None;
        }
        let clamped = index.clamp(1, self.records.len());
        Some((clamped, &self.records[clamped - 1]))
    }
}

/// Result of [`Simulator::simulate_nibbles`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreamRun {
    pub transmissions: Vec<Transmission>,
    pub stats: RunStatistics,
}

/// Drives the codec over data words, injecting one bit error per codeword.
#[derive(Debug, Clone)]
pub struct Simulator<E> {
    errors: E,
}

impl Simulator<RandomErrors<ChaCha20Rng>> {
    /// Creates a simulator whose errors come from a ChaCha20 generator built from `config`
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(RandomErrors::new(config.rng()))
    }
}

impl<E: ErrorSource> Simulator<E> {
    pub fn new(errors: E) -> Self {
        Self { errors }
    }

    /// Gives back the error source
    pub fn into_inner(self) -> E {
        self.errors
    }

    /// Sends one data word through encode, a single-bit error and decode.
    ///
    /// # Errors
    ///
    /// `Error::BitIndexOutOfRange` if the error source returns an index of 7 or more.
    pub fn transmit(&mut self, data: DataWord) -> Result<Transmission> {
        let codeword = encode(data);
        let error_bit_index = self.errors.next_error_index();
        let received = codeword.flip(error_bit_index)?;
        let decoded = decode(received);

        trace!(
            "data {} -> codeword {}, flipped bit {}, syndrome position {}",
            data,
            codeword,
            error_bit_index,
            decoded.error_position
        );

        Ok(Transmission {
            data,
            codeword,
            error_bit_index,
            received,
            decoded,
        })
    }

    /// Transmits each 4-bit value in order. Only the low four bits of every item are used.
    pub fn simulate_nibbles<I>(&mut self, nibbles: I) -> Result<StreamRun>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut run = StreamRun::default();
        for nibble in nibbles {
            let transmission = self.transmit(DataWord::from_nibble(nibble))?;
            run.stats.record(&transmission.decoded);
            run.transmissions.push(transmission);
        }
        debug!(
            "stream run finished: {} blocks, {} corrected",
            run.stats.total_blocks, run.stats.errors_corrected
        );
        Ok(run)
    }

    /// Runs the simulation over the part of `image` covered by `selection`.
    ///
    /// Both output buffers start as copies of `image`. Each selected pixel is replaced by a flat
    /// gray pixel: in `corrupted` its luma is rebuilt from the received data bits, in `corrected`
    /// from the decoded ones. A selection that clamps to zero pixels yields
    /// [`RunStatus::RegionTooSmall`], no records and zeroed statistics.
    ///
    /// # Errors
    ///
    /// `Error::BitIndexOutOfRange` if the error source returns an index of 7 or more.
    pub fn run_on_region(
        &mut self,
        image: &PixelBuffer,
        selection: &Selection,
    ) -> Result<SimulationRun> {
        let region = selection.clamp_to(image.width(), image.height());
        let mut corrupted = image.clone();
        let mut corrected = image.clone();
        let mut records = Vec::with_capacity(region.pixel_count() * NibbleSelector::BOTH.len());
        let mut stats = RunStatistics::default();

        if region.is_empty() {
            debug!("selection {:?} clamps to an empty region", selection);
        } else {
            debug!(
                "simulating {}x{} region at ({}, {})",
                region.width, region.height, region.x, region.y
            );
        }

        for (x, y) in region.positions() {
            let Some(pixel) = image.get(x, y) else {
                continue;
            };
            let gray = pixel.luma();

            let mut received = [DataWord::default(); 2];
            let mut decoded = [DataWord::default(); 2];

            for (nibble, bits) in NibbleSelector::BOTH
                .into_iter()
                .zip(gray.view_bits::<Msb0>().chunks(DATA_BITS))
            {
                let transmission = self.transmit(DataWord::from_bits(bits))?;
                stats.record(&transmission.decoded);

                received[nibble.index()] = transmission.received.data_bits();
                decoded[nibble.index()] = transmission.decoded.data_bits;

                records.push(CodewordRecord {
                    x,
                    y,
                    nibble,
                    gray,
                    transmission,
                });
            }

            corrupted.set(x, y, Rgb::gray(join_nibbles(received)));
            corrected.set(x, y, Rgb::gray(join_nibbles(decoded)));
        }

        debug!(
            "region run finished: {} records, {} errors introduced, {} corrected",
            records.len(),
            stats.errors_introduced,
            stats.errors_corrected
        );

        Ok(SimulationRun {
            region,
            corrupted,
            corrected,
            records,
            stats,
        })
    }
}

fn join_nibbles([high, low]: [DataWord; 2]) -> u8 {
    (high.nibble() << 4) | low.nibble()
}
