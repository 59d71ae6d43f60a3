//! Single-bit-error simulation over grayscale image regions.
//!
//! A run takes a pixel buffer and a selection rectangle. Each selected pixel is reduced to an
//! 8-bit luma value, split into two nibbles, and each nibble is pushed through the Hamming(7,4)
//! codec with exactly one bit flipped on the way. The run returns two previews (received and
//! corrected), one [`CodewordRecord`] per nibble in row-major order, and [`RunStatistics`].
//!
//! # Examples
//!
//! ```rust
//! use hamming_sim::sim::{PixelBuffer, Rgb, Selection, SimulationConfig, Simulator};
//!
//! let image = PixelBuffer::filled(4, 3, Rgb::new(200, 120, 40));
//! let mut simulator = Simulator::from_config(&SimulationConfig::default().with_seed(1));
//! let run = simulator
//!     .run_on_region(&image, &Selection::new(1.0, 0.0, 2.0, 2.0))
//!     .unwrap();
//!
//! assert_eq!(run.records.len(), 8);
//! assert_eq!(run.stats.errors_corrected, run.stats.errors_introduced);
//! ```

pub mod config;
pub mod image;
pub mod simulator;
pub mod stats;

pub use config::SimulationConfig;
pub use image::{PixelBuffer, Region, Rgb, Selection};
pub use simulator::{
    CodewordRecord, NibbleSelector, RunStatus, SimulationRun, Simulator, StreamRun, Transmission,
};
pub use stats::RunStatistics;
