//! Bundled example animations, consumed read-only through the codec.

pub mod bundle;
