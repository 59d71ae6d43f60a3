//! Aggregate counters for a simulation run.

use crate::cs::ecc::DecodeResult;
use std::fmt;

/// Counters accumulated over one run.
///
/// Every codeword gets exactly one injected error, so `errors_introduced` always equals
/// `total_codewords`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunStatistics {
    /// 4-bit data blocks processed
    pub total_blocks: u64,
    /// Codewords produced by the encoder
    pub total_codewords: u64,
    /// Single-bit errors injected by the channel
    pub errors_introduced: u64,
    /// Decodes that located and flipped back an error
    pub errors_corrected: u64,
}

impl RunStatistics {
    /// Accounts for one block that went through encode, corruption and decode
    pub fn record(&mut self, decoded: &DecodeResult) {
        self.total_blocks += 1;
        self.total_codewords += 1;
        self.errors_introduced += 1;
        if decoded.error_position > 0 {
            self.errors_corrected += 1;
        }
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.total_blocks == 0
    }

    /// Fraction of injected errors that were corrected, or 0.0 when none were injected
    pub fn correction_rate(&self) -> f64 {
        if self.errors_introduced == 0 {
            0.0
        } else {
            self.errors_corrected as f64 / self.errors_introduced as f64
        }
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "4-bit blocks:       {}", self.total_blocks)?;
        writeln!(f, "Codewords:          {}", self.total_codewords)?;
        writeln!(f, "Errors introduced:  {}", self.errors_introduced)?;
        write!(f, "Errors corrected:   {}", self.errors_corrected)
    }
}
