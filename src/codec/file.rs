use std::path::Path;

use anyhow::Context as _;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::codec::pack::{pack_frame_bits, unpack_frame_bits};
use crate::foundation::core::SpeedLevel;
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::frame::model::{BinaryFrame, FrameSequence};

/// Format version this codec reads and writes.
pub const FRAME_FILE_VERSION: u32 = 1;

/// One bit-packed frame payload as it appears in the persisted file.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PackedFrame {
    /// Base64 (standard alphabet, padded) of the bit-packed samples.
    pub data: String,
}

/// Optional provenance block of a frame file.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct FrameFileMeta {
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The persisted frame-file representation (JSON on disk).
///
/// This single wire format backs save-to-file, load-from-file and the bundled
/// example animations; an independent decoder agreeing with [`encode`] bit for
/// bit is a correctness requirement, not an implementation detail.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FrameFile {
    /// Format version tag; see [`FRAME_FILE_VERSION`].
    pub version: u32,
    /// Declared frame width in pixels.
    pub width: u32,
    /// Declared frame height in pixels.
    pub height: u32,
    /// Playback speed level, stored verbatim when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<SpeedLevel>,
    /// Bit-packed frames in playback order.
    pub frames: Vec<PackedFrame>,
    /// Optional provenance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FrameFileMeta>,
}

impl FrameFile {
    /// Parse a frame file from JSON text. Parsing alone does not validate the
    /// payload; that happens in [`decode`].
    pub fn from_json_str(json: &str) -> BadgeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| BadgeError::serde(format!("frame file is not valid JSON: {e}")))
    }

    /// Serialize to pretty-printed JSON text.
    pub fn to_json_string(&self) -> BadgeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BadgeError::serde(format!("frame file serialization failed: {e}")))
    }

    /// Read and parse a frame file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> BadgeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read frame file '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Write this frame file to disk as JSON.
    pub fn write_path(&self, path: impl AsRef<Path>) -> BadgeResult<()> {
        let path = path.as_ref();
        let text = self.to_json_string()?;
        std::fs::write(path, text)
            .with_context(|| format!("write frame file '{}'", path.display()))?;
        Ok(())
    }
}

/// Encode a sequence into the version-1 frame file, stamping `created_at`
/// with the current UTC time.
pub fn encode(seq: &FrameSequence, speed: Option<SpeedLevel>) -> FrameFile {
    encode_with_meta(
        seq,
        speed,
        Some(FrameFileMeta {
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        }),
    )
}

/// Encode a sequence into the version-1 frame file with an explicit meta
/// block (or none, for byte-stable output in tests).
///
/// Width/height come from the first frame; uniform dimensions are a
/// [`FrameSequence`] invariant, not re-validated here. The sequence type also
/// guarantees at least one frame.
#[tracing::instrument(skip(seq, meta), fields(frames = seq.len()))]
pub fn encode_with_meta(
    seq: &FrameSequence,
    speed: Option<SpeedLevel>,
    meta: Option<FrameFileMeta>,
) -> FrameFile {
    let canvas = seq.canvas();
    let frames = seq
        .frames()
        .iter()
        .map(|frame| PackedFrame {
            data: BASE64.encode(pack_frame_bits(frame.pixels())),
        })
        .collect();
    FrameFile {
        version: FRAME_FILE_VERSION,
        width: canvas.width,
        height: canvas.height,
        speed,
        frames,
        meta,
    }
}

/// Decode a frame file back into a sequence plus its declared speed.
///
/// Rejects unknown versions and empty frame lists before touching pixel
/// data, and any frame whose base64 is corrupt or whose payload is shorter
/// than the declared `width x height` requires. Decoded frames get fresh ids
/// (ids are not persisted); pixel data is the exact inverse of [`encode`].
#[tracing::instrument(skip(file), fields(frames = file.frames.len()))]
pub fn decode(file: &FrameFile) -> BadgeResult<(FrameSequence, Option<SpeedLevel>)> {
    if file.version != FRAME_FILE_VERSION {
        return Err(BadgeError::UnsupportedVersion {
            found: file.version,
            expected: FRAME_FILE_VERSION,
        });
    }
    if file.frames.is_empty() {
        return Err(BadgeError::empty_sequence(
            "frame file declares zero frames",
        ));
    }
    if file.width == 0 || file.height == 0 {
        return Err(BadgeError::malformed_payload(format!(
            "frame file declares degenerate dimensions {}x{}",
            file.width, file.height
        )));
    }

    let mut frames = Vec::with_capacity(file.frames.len());
    for (idx, packed) in file.frames.iter().enumerate() {
        let bytes = BASE64.decode(&packed.data).map_err(|e| {
            BadgeError::malformed_payload(format!("frame {idx}: corrupt base64: {e}"))
        })?;
        let pixels = unpack_frame_bits(&bytes, file.width, file.height)
            .map_err(|e| BadgeError::malformed_payload(format!("frame {idx}: {e}")))?;
        frames.push(BinaryFrame::from_pixels(file.width, file.height, pixels)?);
    }

    Ok((FrameSequence::from_frames(frames)?, file.speed))
}

#[cfg(test)]
#[path = "../../tests/unit/codec/file.rs"]
mod tests;
