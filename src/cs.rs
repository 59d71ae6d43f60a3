pub mod ecc;
pub mod randomized;

// Re-export all modules
pub use ecc::*;
pub use randomized::*;
