//! Badgeforge is the frame pipeline and sprite codec for 48x11 LED badge animations.
//!
//! The crate turns arbitrary visual input (decoded video/GIF samples, hand-drawn
//! pixel grids) into a canonical sequence of black/white frames ([`BinaryFrame`] /
//! [`FrameSequence`]) and moves that sequence across three boundaries:
//!
//! 1. **Sample**: `SourceImage + CropRect -> BinaryFrame` (crop, nearest-neighbor
//!    resample, luma threshold, optional invert)
//! 2. **Edit**: timeline operations over a [`FrameSequence`] (add, duplicate,
//!    delete, reorder, fill, clear, commit an edited grid)
//! 3. **Persist / Export**: a bit-packed base64 JSON frame file ([`FrameFile`])
//!    and a single-row sprite sheet PNG ([`RenderedSprite`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Binary pixels at rest**: every stored sample is exactly 0 (black) or
//!   255 (white); intermediate grayscale values never survive a pipeline step.
//! - **Deterministic-by-default**: sampling, codec and sprite composition are
//!   pure functions of their inputs.
//! - **No IO in the pipeline**: file reads/writes live in the codec IO helpers,
//!   the example-bundle loader and the CLI, never in the transformation math.
//!
//! Device transport, video decoding and UI concerns are external collaborators;
//! the crate's sole contract with the downstream upload tool is the exported
//! sprite PNG of dimensions `(width * frame_count) x height` with strictly
//! binary grayscale pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod codec;
mod foundation;
mod frame;
mod render;
mod sample;

pub use assets::bundle::{ExampleAnimation, ExampleBundle, ExampleMeta, ManifestEntry};
pub use codec::file::{
    FRAME_FILE_VERSION, FrameFile, FrameFileMeta, PackedFrame, decode, encode, encode_with_meta,
};
pub use codec::pack::{pack_frame_bits, packed_len, unpack_frame_bits};
pub use foundation::core::{
    BADGE_HEIGHT, BADGE_WIDTH, Canvas, FrameId, SpeedLevel, TimelineLimits, planned_frame_count,
};
pub use foundation::error::{BadgeError, BadgeResult};
pub use frame::model::{BLACK, BinaryFrame, FrameSequence, WHITE};
pub use frame::timeline::{
    MoveDirection, add_blank, clear, delete, duplicate, fill, shift, update_frame,
};
pub use render::sprite::{RenderedSprite, render_sprite, sprite_filename};
pub use sample::extract::{ExtractOutcome, extract_frames};
pub use sample::source::{CropRect, SourceImage};
pub use sample::threshold::{luma_u8, sample_frame};
