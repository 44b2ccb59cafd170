use crate::foundation::core::TimelineLimits;
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::frame::model::{BinaryFrame, FrameSequence, WHITE};

/// Direction for [`shift`]: swap a frame with its left or right neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    /// Swap with the previous frame (toward index 0).
    Left,
    /// Swap with the next frame (toward the end).
    Right,
}

/// Append a fresh all-white frame.
///
/// Fails with [`BadgeError::CapacityExceeded`] at the configured bound; the
/// sequence is left untouched in that case.
pub fn add_blank(seq: &mut FrameSequence, limits: TimelineLimits) -> BadgeResult<()> {
    if seq.len() >= limits.max_frames {
        return Err(BadgeError::CapacityExceeded {
            max: limits.max_frames,
        });
    }
    let canvas = seq.canvas();
    seq.frames_mut()
        .push(BinaryFrame::blank(canvas.width, canvas.height));
    Ok(())
}

/// Append a deep copy of the frame at `source_index` (fresh id, no aliasing).
pub fn duplicate(
    seq: &mut FrameSequence,
    source_index: usize,
    limits: TimelineLimits,
) -> BadgeResult<()> {
    if seq.len() >= limits.max_frames {
        return Err(BadgeError::CapacityExceeded {
            max: limits.max_frames,
        });
    }
    let copy = frame_at(seq, source_index)?.duplicate();
    seq.frames_mut().push(copy);
    Ok(())
}

/// Remove the frame at `index`.
///
/// Fails with [`BadgeError::LastFrameDeletion`] when only one frame remains;
/// the sequence is never allowed to become empty.
pub fn delete(seq: &mut FrameSequence, index: usize) -> BadgeResult<()> {
    if seq.len() == 1 {
        return Err(BadgeError::LastFrameDeletion);
    }
    check_index(seq, index)?;
    seq.frames_mut().remove(index);
    Ok(())
}

/// Swap the frame at `index` with its neighbor in `direction`.
///
/// Returns `true` if a swap happened, `false` when the target position falls
/// outside the sequence (a no-op, not an error).
pub fn shift(seq: &mut FrameSequence, index: usize, direction: MoveDirection) -> BadgeResult<bool> {
    check_index(seq, index)?;
    let target = match direction {
        MoveDirection::Left => index.checked_sub(1),
        MoveDirection::Right => {
            let next = index + 1;
            (next < seq.len()).then_some(next)
        }
    };
    let Some(target) = target else {
        return Ok(false);
    };
    seq.frames_mut().swap(index, target);
    Ok(true)
}

/// Overwrite every sample of the frame at `index` with one binary value.
/// Frame identity (id) is preserved.
pub fn fill(seq: &mut FrameSequence, index: usize, value: u8) -> BadgeResult<()> {
    check_index(seq, index)?;
    seq.frames_mut()[index].fill(value)
}

/// Reset the frame at `index` to all-white, preserving its id.
pub fn clear(seq: &mut FrameSequence, index: usize) -> BadgeResult<()> {
    fill(seq, index, WHITE)
}

/// Commit an edited pixel grid into the frame at `index`.
///
/// This is the integration seam for external drawing widgets: the adapter
/// collects the widget's current grid and calls this once per completed
/// change, rather than the pipeline tracking widget events. The grid must
/// match the frame's dimensions and hold only binary samples; the frame id is
/// preserved.
pub fn update_frame(seq: &mut FrameSequence, index: usize, grid: &[u8]) -> BadgeResult<()> {
    check_index(seq, index)?;
    seq.frames_mut()[index].overwrite(grid)
}

fn frame_at(seq: &FrameSequence, index: usize) -> BadgeResult<&BinaryFrame> {
    seq.get(index).ok_or(BadgeError::IndexOutOfRange {
        index,
        len: seq.len(),
    })
}

fn check_index(seq: &FrameSequence, index: usize) -> BadgeResult<()> {
    frame_at(seq, index).map(|_| ())
}

#[cfg(test)]
#[path = "../../tests/unit/frame/timeline.rs"]
mod tests;
