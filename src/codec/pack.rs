use crate::foundation::error::{BadgeError, BadgeResult};
use crate::frame::model::{BLACK, WHITE};

/// Packed byte length of one `width x height` frame: `ceil(samples / 8)`.
pub fn packed_len(width: u32, height: u32) -> usize {
    (width as usize * height as usize).div_ceil(8)
}

/// Bit-pack one frame's binary samples, row-major.
///
/// Sample index `i = row*width + col` lands in byte `i >> 3`, bit `i & 7`;
/// the bit is 1 for a black sample (0) and 0 for white (255). Trailing bits
/// of the last byte are zero-filled when the sample count is not a multiple
/// of eight.
pub fn pack_frame_bits(pixels: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];
    for (i, &px) in pixels.iter().enumerate() {
        if px == BLACK {
            bytes[i >> 3] |= 1 << (i & 7);
        }
    }
    bytes
}

/// Exact inverse of [`pack_frame_bits`] for a `width x height` frame.
///
/// Bit 1 becomes a black sample (0), bit 0 white (255); trailing bits beyond
/// the sample count are ignored. Fails with [`BadgeError::MalformedPayload`]
/// when `bytes` is shorter than the declared dimensions require (extra bytes
/// are tolerated and ignored).
pub fn unpack_frame_bits(bytes: &[u8], width: u32, height: u32) -> BadgeResult<Vec<u8>> {
    let samples = width as usize * height as usize;
    let needed = samples.div_ceil(8);
    if bytes.len() < needed {
        return Err(BadgeError::malformed_payload(format!(
            "packed frame holds {} bytes but {width}x{height} needs {needed}",
            bytes.len()
        )));
    }
    let mut pixels = vec![WHITE; samples];
    for (i, px) in pixels.iter_mut().enumerate() {
        if bytes[i >> 3] & (1 << (i & 7)) != 0 {
            *px = BLACK;
        }
    }
    Ok(pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/pack.rs"]
mod tests;
