use crate::foundation::error::{BadgeError, BadgeResult};
use crate::frame::model::{BLACK, BinaryFrame, WHITE};
use crate::sample::source::{CropRect, SourceImage};

fn luma_f64(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Rec. 601 luma from RGB channels, rounded to the nearest integer. Alpha is
/// ignored throughout the sampler.
///
/// The thresholding step compares the unrounded luma; this quantized form is
/// for display and diagnostics.
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    luma_f64(r, g, b).round().min(255.0) as u8
}

/// Convert one rectangular region of a decoded RGBA image into a binary frame.
///
/// The pipeline per output pixel:
///
/// 1. **Crop**: sampling is restricted to `crop` (clamped into the source);
///    pixels outside it never influence the output.
/// 2. **Resample**: nearest-neighbor pick at
///    `crop.origin + (ox + 0.5, oy + 0.5) * crop.size / (out_w, out_h)`,
///    floored and clamped back into the crop. One source pixel per output
///    pixel, no interpolation; the target matrix has 528 pixels, averaging
///    buys nothing.
/// 3. **Luma**: `0.299*R + 0.587*G + 0.114*B`, alpha ignored.
/// 4. **Threshold + invert**: `gray >= threshold` classifies the pixel "on";
///    the stored sample is `BLACK` for on, `WHITE` for off, flipped when
///    `invert` is set.
///
/// Fails with [`BadgeError::InvalidGeometry`] on non-positive output
/// dimensions or a crop with non-positive clamped area; no partial frame is
/// produced. Stateless and pure: the same inputs always yield the same frame
/// content (ids aside).
#[tracing::instrument(skip(src), fields(src_w = src.width(), src_h = src.height()))]
pub fn sample_frame(
    src: &SourceImage<'_>,
    crop: CropRect,
    out_width: u32,
    out_height: u32,
    threshold: u8,
    invert: bool,
) -> BadgeResult<BinaryFrame> {
    if out_width == 0 || out_height == 0 {
        return Err(BadgeError::invalid_geometry(format!(
            "output dimensions must be positive, got {out_width}x{out_height}"
        )));
    }
    let crop = crop.clamped_to(src.width(), src.height())?;

    let mut frame = BinaryFrame::blank(out_width, out_height);
    let pixels = frame.pixels_mut();

    // Inclusive clamp bounds keep the floored pick inside the crop even when
    // the midpoint math lands exactly on the right/bottom edge.
    let max_x = (crop.x + crop.width).ceil() as u32 - 1;
    let max_y = (crop.y + crop.height).ceil() as u32 - 1;
    let min_x = crop.x.floor() as u32;
    let min_y = crop.y.floor() as u32;

    for oy in 0..out_height {
        let sy = crop.y + (f64::from(oy) + 0.5) * crop.height / f64::from(out_height);
        let sy = (sy.floor() as u32).clamp(min_y, max_y.min(src.height() - 1));
        for ox in 0..out_width {
            let sx = crop.x + (f64::from(ox) + 0.5) * crop.width / f64::from(out_width);
            let sx = (sx.floor() as u32).clamp(min_x, max_x.min(src.width() - 1));

            let [r, g, b, _a] = src.rgba_at(sx, sy);
            let gray = luma_f64(r, g, b);
            let base = if gray >= f64::from(threshold) {
                BLACK
            } else {
                WHITE
            };
            let value = if invert { 255 - base } else { base };
            pixels[(oy * out_width + ox) as usize] = value;
        }
    }

    Ok(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/sample/threshold.rs"]
mod tests;
