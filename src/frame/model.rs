use crate::foundation::core::{Canvas, FrameId};
use crate::foundation::error::{BadgeError, BadgeResult};

/// Sample value of a lit ("black" on the badge) pixel.
pub const BLACK: u8 = 0;

/// Sample value of an unlit ("white") pixel.
pub const WHITE: u8 = 255;

/// One black/white frame of the badge matrix.
///
/// Pixels are row-major, one byte per sample, and every sample is exactly
/// [`BLACK`] or [`WHITE`] at rest; intermediate grayscale values are illegal.
/// Each frame owns its buffer outright, so mutating one frame can never alias
/// into another. [`BinaryFrame::duplicate`] is the editor's "clone frame"
/// operation and assigns a fresh id; `Clone` is a verbatim snapshot (same id)
/// used when copying whole sequences.
#[derive(Clone, Debug)]
pub struct BinaryFrame {
    id: FrameId,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl BinaryFrame {
    /// Allocate an all-white frame with a fresh id. Never fails.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            id: FrameId::fresh(),
            width,
            height,
            pixels: vec![WHITE; width as usize * height as usize],
        }
    }

    /// Build a frame from an existing pixel grid (e.g. a committed editor
    /// canvas), validating dimensions and the binary-only invariant.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> BadgeResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BadgeError::malformed_payload(format!(
                "pixel grid holds {} samples but {width}x{height} needs {expected}",
                pixels.len()
            )));
        }
        if let Some(bad) = pixels.iter().find(|&&px| px != BLACK && px != WHITE) {
            return Err(BadgeError::malformed_payload(format!(
                "pixel grid contains non-binary sample value {bad}"
            )));
        }
        Ok(Self {
            id: FrameId::fresh(),
            width,
            height,
            pixels,
        })
    }

    /// Deep copy with a fresh id; the clone never shares storage with `self`.
    pub fn duplicate(&self) -> Self {
        Self {
            id: FrameId::fresh(),
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Opaque frame identity.
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frame dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major pixel samples, one byte each, strictly [`BLACK`] or [`WHITE`].
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Sample at `(x, y)`. Panics on out-of-bounds coordinates, matching slice
    /// indexing semantics.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Overwrite every sample with one binary value, keeping the frame id.
    pub(crate) fn fill(&mut self, value: u8) -> BadgeResult<()> {
        if value != BLACK && value != WHITE {
            return Err(BadgeError::malformed_payload(format!(
                "fill value must be {BLACK} or {WHITE}, got {value}"
            )));
        }
        self.pixels.fill(value);
        Ok(())
    }

    /// Replace the whole pixel buffer with a committed grid of the same
    /// dimensions, keeping the frame id.
    pub(crate) fn overwrite(&mut self, grid: &[u8]) -> BadgeResult<()> {
        let expected = self.width as usize * self.height as usize;
        if grid.len() != expected {
            return Err(BadgeError::malformed_payload(format!(
                "committed grid holds {} samples but frame is {}x{} ({expected})",
                grid.len(),
                self.width,
                self.height
            )));
        }
        if let Some(bad) = grid.iter().find(|&&px| px != BLACK && px != WHITE) {
            return Err(BadgeError::malformed_payload(format!(
                "committed grid contains non-binary sample value {bad}"
            )));
        }
        self.pixels.copy_from_slice(grid);
        Ok(())
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// An ordered, never-empty list of equally sized frames.
///
/// Insertion order is the playback/export order. A sequence is owned by
/// exactly one caller at a time; concurrent mutation from two call sites is a
/// caller-level bug (single-writer expectation), not something the pipeline
/// locks against.
#[derive(Clone, Debug)]
pub struct FrameSequence {
    frames: Vec<BinaryFrame>,
}

impl FrameSequence {
    /// Start a sequence from its first frame.
    pub fn new(first: BinaryFrame) -> Self {
        Self {
            frames: vec![first],
        }
    }

    /// Build a sequence from an ordered list of frames.
    ///
    /// Rejects an empty list and frames of mismatched dimensions.
    pub fn from_frames(frames: Vec<BinaryFrame>) -> BadgeResult<Self> {
        let Some(first) = frames.first() else {
            return Err(BadgeError::empty_sequence(
                "a frame sequence needs at least one frame",
            ));
        };
        let canvas = first.canvas();
        for (idx, frame) in frames.iter().enumerate() {
            if frame.canvas() != canvas {
                return Err(BadgeError::malformed_payload(format!(
                    "frame {idx} is {}x{} but the sequence is {}x{}",
                    frame.width(),
                    frame.height(),
                    canvas.width,
                    canvas.height
                )));
            }
        }
        Ok(Self { frames })
    }

    /// Number of frames; always >= 1.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Dimensions shared by every frame in the sequence.
    pub fn canvas(&self) -> Canvas {
        self.frames[0].canvas()
    }

    /// Frame at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&BinaryFrame> {
        self.frames.get(index)
    }

    /// Frames in playback order.
    pub fn frames(&self) -> &[BinaryFrame] {
        &self.frames
    }

    pub(crate) fn frames_mut(&mut self) -> &mut Vec<BinaryFrame> {
        &mut self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
