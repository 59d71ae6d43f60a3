pub mod cs;
pub mod error;
pub mod sim;

pub use cs::ecc::hamming::{decode, encode, Codeword, DataWord, DecodeResult, SyndromeVector};
pub use cs::randomized::{ErrorSource, RandomErrors, ScriptedErrors};
pub use error::{Error, Result};
pub use sim::{
    CodewordRecord, NibbleSelector, PixelBuffer, Region, Rgb, RunStatistics, RunStatus,
    Selection, SimulationConfig, SimulationRun, Simulator, StreamRun, Transmission,
};
