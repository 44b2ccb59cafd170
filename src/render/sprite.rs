use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::core::SpeedLevel;
use crate::foundation::error::BadgeResult;
use crate::frame::model::FrameSequence;

/// An exported sprite sheet: PNG bytes plus the geometry the downstream
/// upload tool relies on.
///
/// Ephemeral: produced on demand, never mutated, replaced wholesale on
/// re-render.
#[derive(Clone, Debug)]
pub struct RenderedSprite {
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
    /// Total sprite width: `frame_width * frame_count`.
    pub width: u32,
    /// Sprite height: the frame height.
    pub height: u32,
    /// Number of frames tiled into the strip.
    pub frame_count: usize,
}

/// Tile a sequence into a single-row sprite strip and encode it as PNG.
///
/// Frame `k` is blitted at horizontal offset `k * frame_width`, frames
/// strictly left-to-right in sequence order with no gaps or overlap. Each
/// binary sample expands to an opaque grayscale RGBA pixel
/// (`R = G = B = sample`, `A = 255`), so every decoded pixel of the export is
/// exactly 0 or 255. Deterministic: identical sequences produce identical
/// raster content (PNG container metadata aside). The sequence type
/// guarantees at least one frame.
#[tracing::instrument(skip(seq), fields(frames = seq.len()))]
pub fn render_sprite(seq: &FrameSequence) -> BadgeResult<RenderedSprite> {
    let canvas = seq.canvas();
    let frame_count = seq.len();
    let sprite_w = canvas.width * frame_count as u32;
    let sprite_h = canvas.height;

    let mut rgba = vec![0u8; sprite_w as usize * sprite_h as usize * 4];
    for (k, frame) in seq.frames().iter().enumerate() {
        let x_off = k * canvas.width as usize;
        for y in 0..canvas.height as usize {
            for x in 0..canvas.width as usize {
                let sample = frame.pixels()[y * canvas.width as usize + x];
                let idx = (y * sprite_w as usize + x_off + x) * 4;
                rgba[idx] = sample;
                rgba[idx + 1] = sample;
                rgba[idx + 2] = sample;
                rgba[idx + 3] = 255;
            }
        }
    }

    let mut png = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut png),
        &rgba,
        sprite_w,
        sprite_h,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode sprite png")?;

    Ok(RenderedSprite {
        png,
        width: sprite_w,
        height: sprite_h,
        frame_count,
    })
}

/// Suggested export filename: `badge_sprite_speed{n}_{fps}fps_{timestamp}.png`.
/// Cosmetic only; nothing downstream parses it.
pub fn sprite_filename(speed: SpeedLevel, timestamp: &str) -> String {
    format!(
        "badge_sprite_speed{}_{}fps_{}.png",
        speed.0,
        speed.fps(),
        timestamp
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprite.rs"]
mod tests;
