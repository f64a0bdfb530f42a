pub mod error;
pub mod normalize;
pub mod sequence;

pub use crate::error::{EolError, Result};
pub use crate::normalize::{normalize, normalize_bytes, Normalizer};
pub use crate::sequence::{compile_args, compile_pattern};
