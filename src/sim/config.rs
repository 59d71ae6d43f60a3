//! Simulation configuration.
//!
//! The only knob is the seed for the bit-error generator. Without one, every run draws fresh
//! entropy; with one, runs over the same image and selection are bit-identical.

use crate::error::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Environment variable consulted by [`SimulationConfig::from_env`]
pub const SEED_ENV_VAR: &str = "HAMMING_SIM_SEED";

/// Settings for a [`Simulator`](crate::sim::Simulator) backed by a random error source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationConfig {
    /// Seed for the error-index generator; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Sets a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reads the seed from `HAMMING_SIM_SEED` if it is set.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if the variable is set but is not an unsigned integer.
    pub fn from_env() -> Result<Self> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(value) => Self::parse_seed(&value).map(|seed| Self::default().with_seed(seed)),
            Err(_) => Ok(Self::default()),
        }
    }

    fn parse_seed(value: &str) -> Result<u64> {
        value.trim().parse().map_err(|_| {
            Error::InvalidInput(format!(
                "{} must be an unsigned integer, got {:?}",
                SEED_ENV_VAR, value
            ))
        })
    }

    /// Builds the generator described by this configuration
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}
