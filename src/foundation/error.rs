/// Convenience result type used across badgeforge.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Top-level error taxonomy used by pipeline APIs.
///
/// Every variant carries enough context (offending index, declared dimension,
/// byte counts) for a UI layer to present an actionable message.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// Degenerate geometry or numeric input: non-positive or non-finite crop
    /// rectangles, zero output dimensions, bad frame-count parameters.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// An operation required at least one frame but the sequence was empty.
    #[error("empty sequence: {0}")]
    EmptySequence(String),

    /// The codec was given a frame file with an unknown format version.
    #[error("unsupported frame file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version tag found in the file.
        found: u32,
        /// Version tag this codec understands.
        expected: u32,
    },

    /// Corrupt base64, truncated payload, or otherwise malformed frame data.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A timeline operation would grow the sequence past its configured bound.
    #[error("capacity exceeded: sequence already holds the maximum of {max} frames")]
    CapacityExceeded {
        /// Configured maximum frame count.
        max: usize,
    },

    /// An attempt to delete the only remaining frame of a sequence.
    #[error("cannot delete the last remaining frame")]
    LastFrameDeletion,

    /// A timeline operation referenced a frame index outside the sequence.
    #[error("frame index {index} out of range for sequence of {len} frames")]
    IndexOutOfRange {
        /// Index the caller asked for.
        index: usize,
        /// Current sequence length.
        len: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BadgeError {
    /// Build a [`BadgeError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`BadgeError::EmptySequence`] value.
    pub fn empty_sequence(msg: impl Into<String>) -> Self {
        Self::EmptySequence(msg.into())
    }

    /// Build a [`BadgeError::MalformedPayload`] value.
    pub fn malformed_payload(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Build a [`BadgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
