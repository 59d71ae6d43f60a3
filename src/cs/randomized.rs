pub mod bit_error;

pub use bit_error::{ErrorSource, RandomErrors, ScriptedErrors};
