//! Frame-sequence codec: bit packing and the versioned JSON frame file.

pub mod file;
pub mod pack;
