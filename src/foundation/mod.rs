//! Shared foundation types: canvas geometry, ids, speed table, error taxonomy.

pub mod core;
pub mod error;
