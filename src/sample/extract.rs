use crate::foundation::error::BadgeResult;
use crate::frame::model::BinaryFrame;
use crate::sample::source::{CropRect, SourceImage};
use crate::sample::threshold::sample_frame;

/// Result of a batch extraction run.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Frames produced, in slot order. Empty when cancelled before slot 0.
    pub frames: Vec<BinaryFrame>,
    /// True when a cancellation request stopped the run early; `frames` then
    /// holds the prefix produced so far and the caller decides whether to
    /// keep or discard it.
    pub cancelled: bool,
}

/// Drive [`sample_frame`] over a batch of ready-made `(image, crop)` samples,
/// one per frame-time slot.
///
/// Seeking and decoding are external-collaborator concerns: the caller hands
/// in decoded samples in slot order (typically `planned_frame_count` of them,
/// see [`crate::planned_frame_count`]). Cancellation is cooperative and
/// checked once per slot before any sampling work for that slot.
#[tracing::instrument(skip_all)]
pub fn extract_frames<'a, I, C>(
    samples: I,
    out_width: u32,
    out_height: u32,
    threshold: u8,
    invert: bool,
    mut cancel_requested: C,
) -> BadgeResult<ExtractOutcome>
where
    I: IntoIterator<Item = (SourceImage<'a>, CropRect)>,
    C: FnMut() -> bool,
{
    let mut frames = Vec::new();
    for (src, crop) in samples {
        if cancel_requested() {
            tracing::debug!(produced = frames.len(), "extraction cancelled");
            return Ok(ExtractOutcome {
                frames,
                cancelled: true,
            });
        }
        frames.push(sample_frame(
            &src, crop, out_width, out_height, threshold, invert,
        )?);
    }
    Ok(ExtractOutcome {
        frames,
        cancelled: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/sample/extract.rs"]
mod tests;
