use super::*;
use crate::frame::model::{BLACK, WHITE};

fn checkerboard(width: u32, height: u32) -> BinaryFrame {
    let pixels = (0..width as usize * height as usize)
        .map(|i| {
            let (x, y) = (i % width as usize, i / width as usize);
            if (x + y) % 2 == 0 { BLACK } else { WHITE }
        })
        .collect();
    BinaryFrame::from_pixels(width, height, pixels).unwrap()
}

fn badge_seq(n: usize) -> FrameSequence {
    let frames = (0..n).map(|_| checkerboard(48, 11)).collect();
    FrameSequence::from_frames(frames).unwrap()
}

#[test]
fn encode_declares_version_and_dimensions() {
    let file = encode(&badge_seq(2), Some(SpeedLevel(4)));
    assert_eq!(file.version, FRAME_FILE_VERSION);
    assert_eq!(file.width, 48);
    assert_eq!(file.height, 11);
    assert_eq!(file.speed, Some(SpeedLevel(4)));
    assert_eq!(file.frames.len(), 2);
    assert!(file.meta.unwrap().created_at.is_some());
}

#[test]
fn decode_inverts_encode_on_pixel_data() {
    let seq = badge_seq(3);
    let file = encode_with_meta(&seq, None, None);
    let (decoded, speed) = decode(&file).unwrap();

    assert_eq!(speed, None);
    assert_eq!(decoded.len(), seq.len());
    assert_eq!(decoded.canvas(), seq.canvas());
    for (a, b) in seq.frames().iter().zip(decoded.frames()) {
        assert_eq!(a.pixels(), b.pixels());
        // ids are not persisted
        assert_ne!(a.id(), b.id());
    }
}

#[test]
fn decode_rejects_unknown_versions() {
    let mut file = encode_with_meta(&badge_seq(1), None, None);
    file.version = 2;
    assert!(matches!(
        decode(&file),
        Err(BadgeError::UnsupportedVersion {
            found: 2,
            expected: 1
        })
    ));
}

#[test]
fn decode_rejects_empty_frame_lists() {
    let mut file = encode_with_meta(&badge_seq(1), None, None);
    file.frames.clear();
    assert!(matches!(decode(&file), Err(BadgeError::EmptySequence(_))));
}

#[test]
fn decode_rejects_corrupt_base64() {
    let mut file = encode_with_meta(&badge_seq(2), None, None);
    file.frames[1].data = "not/valid/base64!!!".to_owned();
    let err = decode(&file).unwrap_err();
    assert!(matches!(err, BadgeError::MalformedPayload(_)));
    assert!(err.to_string().contains("frame 1"));
}

#[test]
fn decode_rejects_truncated_payloads() {
    let mut file = encode_with_meta(&badge_seq(1), None, None);
    // one byte of payload against a declared 48x11 frame
    file.frames[0].data = {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode([0xFFu8])
    };
    let err = decode(&file).unwrap_err();
    assert!(matches!(err, BadgeError::MalformedPayload(_)));
}

#[test]
fn decode_rejects_degenerate_dimensions() {
    let mut file = encode_with_meta(&badge_seq(1), None, None);
    file.width = 0;
    assert!(matches!(decode(&file), Err(BadgeError::MalformedPayload(_))));
}

#[test]
fn json_round_trip_preserves_the_wire_format() {
    let file = encode_with_meta(&badge_seq(2), Some(SpeedLevel(6)), None);
    let json = file.to_json_string().unwrap();
    let parsed = FrameFile::from_json_str(&json).unwrap();

    assert_eq!(parsed.version, file.version);
    assert_eq!(parsed.speed, Some(SpeedLevel(6)));
    for (a, b) in file.frames.iter().zip(&parsed.frames) {
        assert_eq!(a.data, b.data);
    }

    let (decoded, _) = decode(&parsed).unwrap();
    assert_eq!(decoded.len(), 2);
}

#[test]
fn from_json_rejects_garbage() {
    assert!(matches!(
        FrameFile::from_json_str("{not json"),
        Err(BadgeError::Serde(_))
    ));
}

#[test]
fn optional_fields_may_be_absent_in_json() {
    let json = r#"{
        "version": 1,
        "width": 8,
        "height": 1,
        "frames": [ { "data": "AA==" } ]
    }"#;
    let file = FrameFile::from_json_str(json).unwrap();
    assert_eq!(file.speed, None);
    assert!(file.meta.is_none());
    let (seq, _) = decode(&file).unwrap();
    assert_eq!(seq.len(), 1);
    assert!(seq.frames()[0].pixels().iter().all(|&px| px == WHITE));
}
