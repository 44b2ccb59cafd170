//! Sampling engine: crop, nearest-neighbor resample, luma threshold.

pub mod extract;
pub mod source;
pub mod threshold;
