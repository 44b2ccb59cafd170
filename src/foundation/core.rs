use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{BadgeError, BadgeResult};

/// Native width of the badge LED matrix in pixels.
pub const BADGE_WIDTH: u32 = 48;

/// Native height of the badge LED matrix in pixels.
pub const BADGE_HEIGHT: u32 = 11;

/// Opaque per-frame identity, assigned at allocation and never reused.
///
/// Ids are process-local bookkeeping for editors (selection, drag state); they
/// are not persisted and do not survive a codec round-trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);

impl FrameId {
    /// Allocate a fresh id, distinct from every id handed out before it.
    pub fn fresh() -> Self {
        Self(NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas matching the badge LED matrix (48x11).
    pub const BADGE: Self = Self {
        width: BADGE_WIDTH,
        height: BADGE_HEIGHT,
    };

    /// Number of samples in one frame of this canvas.
    pub fn sample_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Playback speed level as exposed on the badge: an integer 1-8 mapped to a
/// fixed frames-per-second value through a static table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SpeedLevel(pub u8);

const SPEED_FPS_TABLE: [(u8, f64); 8] = [
    (1, 1.2),
    (2, 1.3),
    (3, 2.0),
    (4, 2.4),
    (5, 2.8),
    (6, 4.5),
    (7, 7.5),
    (8, 15.0),
];

impl SpeedLevel {
    /// Frames-per-second playback rate for this level.
    ///
    /// Unknown levels fall back to the table's first entry.
    pub fn fps(self) -> f64 {
        SPEED_FPS_TABLE
            .iter()
            .find(|(level, _)| *level == self.0)
            .map(|(_, fps)| *fps)
            .unwrap_or(SPEED_FPS_TABLE[0].1)
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Capacity bounds applied by timeline editor operations.
///
/// A value type passed by the caller; the pipeline holds no global
/// configuration state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineLimits {
    /// Maximum number of frames a sequence may hold.
    pub max_frames: usize,
}

impl TimelineLimits {
    /// Construct limits, rejecting a zero bound (sequences are never empty).
    pub fn new(max_frames: usize) -> BadgeResult<Self> {
        if max_frames == 0 {
            return Err(BadgeError::invalid_geometry(
                "max_frames must be >= 1 (sequences are never empty)",
            ));
        }
        Ok(Self { max_frames })
    }
}

impl Default for TimelineLimits {
    fn default() -> Self {
        Self { max_frames: 24 }
    }
}

/// Number of frames a batch extraction should produce for a trimmed clip:
/// `min(max_frames, ceil(trim_secs * fps))`, at least 1 for positive
/// durations.
pub fn planned_frame_count(trim_secs: f64, fps: f64, limits: TimelineLimits) -> BadgeResult<usize> {
    if !trim_secs.is_finite() || trim_secs <= 0.0 {
        return Err(BadgeError::invalid_geometry(format!(
            "trim duration must be a positive finite number of seconds, got {trim_secs}"
        )));
    }
    if !fps.is_finite() || fps <= 0.0 {
        return Err(BadgeError::invalid_geometry(format!(
            "fps must be a positive finite number, got {fps}"
        )));
    }
    let requested = (trim_secs * fps).ceil().max(1.0) as usize;
    Ok(requested.min(limits.max_frames))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
