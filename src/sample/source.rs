use crate::foundation::error::{BadgeError, BadgeResult};

/// A borrowed view over one decoded RGBA8 image (a video frame, GIF frame or
/// still picture handed in by an external decoder).
///
/// The sampler never owns or copies source pixels; callers keep the decoded
/// buffer alive for the duration of a [`crate::sample_frame`] call.
#[derive(Clone, Copy, Debug)]
pub struct SourceImage<'a> {
    width: u32,
    height: u32,
    rgba: &'a [u8],
}

impl<'a> SourceImage<'a> {
    /// Wrap a tightly packed row-major RGBA8 buffer.
    ///
    /// Rejects zero dimensions and a buffer length that does not match
    /// `width * height * 4`.
    pub fn new(width: u32, height: u32, rgba: &'a [u8]) -> BadgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(BadgeError::invalid_geometry(format!(
                "source image dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(BadgeError::malformed_payload(format!(
                "source buffer holds {} bytes but {width}x{height} RGBA needs {expected}",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Source width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Source height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// RGBA channels of the pixel at `(x, y)`; coordinates must be in bounds.
    pub(crate) fn rgba_at(self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.rgba[idx],
            self.rgba[idx + 1],
            self.rgba[idx + 2],
            self.rgba[idx + 3],
        ]
    }
}

/// Crop rectangle in source pixel coordinates. May be non-integer; it is
/// clamped into the source bounds before sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropRect {
    /// Left edge in source pixels.
    pub x: f64,
    /// Top edge in source pixels.
    pub y: f64,
    /// Width in source pixels.
    pub width: f64,
    /// Height in source pixels.
    pub height: f64,
}

impl CropRect {
    /// A crop covering the whole of `src`.
    pub fn full(src: &SourceImage<'_>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(src.width()),
            height: f64::from(src.height()),
        }
    }

    /// Clamp this rectangle to lie within a `width x height` source.
    ///
    /// Fails with [`BadgeError::InvalidGeometry`] when the clamped rectangle
    /// has non-positive area (crop entirely outside the source, or degenerate
    /// input).
    pub(crate) fn clamped_to(self, width: u32, height: u32) -> BadgeResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(BadgeError::invalid_geometry(format!(
                "crop origin must be finite, got ({}, {})",
                self.x, self.y
            )));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(BadgeError::invalid_geometry(format!(
                "crop rectangle must have positive finite size, got {}x{}",
                self.width, self.height
            )));
        }
        let x0 = self.x.clamp(0.0, f64::from(width));
        let y0 = self.y.clamp(0.0, f64::from(height));
        let x1 = (self.x + self.width).clamp(0.0, f64::from(width));
        let y1 = (self.y + self.height).clamp(0.0, f64::from(height));
        if x1 - x0 <= 0.0 || y1 - y0 <= 0.0 {
            return Err(BadgeError::invalid_geometry(format!(
                "crop rectangle ({}, {}) {}x{} lies outside the {width}x{height} source",
                self.x, self.y, self.width, self.height
            )));
        }
        Ok(Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/source.rs"]
mod tests;
