use super::*;

#[test]
fn packed_len_is_ceil_of_samples_over_eight() {
    assert_eq!(packed_len(48, 11), 66); // 528 / 8
    assert_eq!(packed_len(3, 3), 2); // 9 samples -> 2 bytes
    assert_eq!(packed_len(8, 1), 1);
}

#[test]
fn bit_layout_is_lsb_first_row_major() {
    // 8x1 frame with samples 0 and 3 black -> single byte 0b0000_1001
    let mut pixels = vec![WHITE; 8];
    pixels[0] = BLACK;
    pixels[3] = BLACK;
    assert_eq!(pack_frame_bits(&pixels), vec![0b0000_1001]);

    // sample 9 of a 3x3 grid does not exist; sample 8 is bit 0 of byte 1
    let mut pixels = vec![WHITE; 9];
    pixels[8] = BLACK;
    assert_eq!(pack_frame_bits(&pixels), vec![0x00, 0x01]);
}

#[test]
fn trailing_bits_are_zero_filled_on_encode() {
    let pixels = vec![BLACK; 9];
    let bytes = pack_frame_bits(&pixels);
    assert_eq!(bytes, vec![0xFF, 0x01]); // bits 9..16 stay clear
}

#[test]
fn trailing_bits_are_ignored_on_decode() {
    // same 9 black samples, but with garbage in the unused bits
    let pixels = unpack_frame_bits(&[0xFF, 0xFF], 3, 3).unwrap();
    assert_eq!(pixels, vec![BLACK; 9]);
}

#[test]
fn unpack_rejects_truncated_payloads() {
    assert!(unpack_frame_bits(&[0xFF], 3, 3).is_err());
    assert!(unpack_frame_bits(&[], 48, 11).is_err());
}

#[test]
fn pack_then_unpack_is_identity() {
    // checkerboard on a 48x11 frame
    let pixels: Vec<u8> = (0..528)
        .map(|i| if (i / 48 + i % 48) % 2 == 0 { BLACK } else { WHITE })
        .collect();
    let bytes = pack_frame_bits(&pixels);
    assert_eq!(bytes.len(), packed_len(48, 11));
    assert_eq!(unpack_frame_bits(&bytes, 48, 11).unwrap(), pixels);
}
