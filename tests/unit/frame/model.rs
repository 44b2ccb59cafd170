use super::*;

#[test]
fn blank_frame_is_all_white_with_fresh_id() {
    let a = BinaryFrame::blank(48, 11);
    let b = BinaryFrame::blank(48, 11);
    assert_eq!(a.pixels().len(), 528);
    assert!(a.pixels().iter().all(|&px| px == WHITE));
    assert_ne!(a.id(), b.id());
}

#[test]
fn duplicate_never_aliases_the_original() {
    let mut original = BinaryFrame::blank(4, 2);
    let copy = original.duplicate();
    assert_ne!(original.id(), copy.id());
    assert_eq!(original.pixels(), copy.pixels());

    original.fill(BLACK).unwrap();
    assert!(original.pixels().iter().all(|&px| px == BLACK));
    assert!(copy.pixels().iter().all(|&px| px == WHITE));
}

#[test]
fn from_pixels_validates_length_and_binary_values() {
    assert!(BinaryFrame::from_pixels(4, 2, vec![WHITE; 8]).is_ok());
    assert!(BinaryFrame::from_pixels(4, 2, vec![WHITE; 7]).is_err());
    assert!(BinaryFrame::from_pixels(4, 2, vec![128; 8]).is_err());
}

#[test]
fn fill_rejects_non_binary_values() {
    let mut frame = BinaryFrame::blank(4, 2);
    assert!(frame.fill(BLACK).is_ok());
    assert!(frame.fill(WHITE).is_ok());
    assert!(frame.fill(42).is_err());
}

#[test]
fn fill_preserves_frame_id() {
    let mut frame = BinaryFrame::blank(4, 2);
    let id = frame.id();
    frame.fill(BLACK).unwrap();
    assert_eq!(frame.id(), id);
}

#[test]
fn sequence_rejects_empty_and_mismatched_frames() {
    assert!(matches!(
        FrameSequence::from_frames(vec![]),
        Err(crate::foundation::error::BadgeError::EmptySequence(_))
    ));

    let frames = vec![BinaryFrame::blank(48, 11), BinaryFrame::blank(48, 10)];
    assert!(FrameSequence::from_frames(frames).is_err());
}

#[test]
fn sequence_keeps_insertion_order() {
    let mut black = BinaryFrame::blank(2, 2);
    black.fill(BLACK).unwrap();
    let white = BinaryFrame::blank(2, 2);
    let black_id = black.id();
    let white_id = white.id();

    let seq = FrameSequence::from_frames(vec![black, white]).unwrap();
    assert_eq!(seq.len(), 2);
    assert!(!seq.is_empty());
    assert_eq!(seq.frames()[0].id(), black_id);
    assert_eq!(seq.frames()[1].id(), white_id);
}

#[test]
fn pixel_indexing_is_row_major() {
    let mut pixels = vec![WHITE; 8];
    pixels[6] = BLACK; // row 1, col 2 of a 4-wide grid
    let frame = BinaryFrame::from_pixels(4, 2, pixels).unwrap();
    assert_eq!(frame.pixel(2, 1), BLACK);
    assert_eq!(frame.pixel(2, 0), WHITE);
}
