//! Canonical binary frame model and timeline editing operations.

pub mod model;
pub mod timeline;
