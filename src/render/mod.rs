//! Sprite compositor: tile a sequence into one horizontal PNG strip.

pub mod sprite;
