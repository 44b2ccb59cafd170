use super::*;

fn solid_rgba(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat((w * h) as usize)
}

#[test]
fn source_image_validates_dimensions_and_length() {
    let buf = solid_rgba(3, 2, [1, 2, 3, 4]);
    let src = SourceImage::new(3, 2, &buf).unwrap();
    assert_eq!(src.width(), 3);
    assert_eq!(src.height(), 2);
    assert_eq!(src.rgba_at(2, 1), [1, 2, 3, 4]);

    assert!(SourceImage::new(0, 2, &buf).is_err());
    assert!(SourceImage::new(3, 2, &buf[..20]).is_err());
}

#[test]
fn full_crop_covers_the_source() {
    let buf = solid_rgba(10, 4, [0, 0, 0, 255]);
    let src = SourceImage::new(10, 4, &buf).unwrap();
    let crop = CropRect::full(&src);
    assert_eq!(crop, CropRect { x: 0.0, y: 0.0, width: 10.0, height: 4.0 });
}

#[test]
fn clamp_trims_overhanging_edges() {
    let crop = CropRect {
        x: -2.0,
        y: 1.0,
        width: 8.0,
        height: 10.0,
    };
    let clamped = crop.clamped_to(5, 5).unwrap();
    assert_eq!(clamped.x, 0.0);
    assert_eq!(clamped.y, 1.0);
    assert_eq!(clamped.width, 5.0);
    assert_eq!(clamped.height, 4.0);
}

#[test]
fn clamp_rejects_degenerate_and_outside_rects() {
    let zero = CropRect {
        x: 1.0,
        y: 1.0,
        width: 0.0,
        height: 3.0,
    };
    assert!(zero.clamped_to(5, 5).is_err());

    let negative = CropRect {
        x: 1.0,
        y: 1.0,
        width: -2.0,
        height: 3.0,
    };
    assert!(negative.clamped_to(5, 5).is_err());

    let outside = CropRect {
        x: 10.0,
        y: 10.0,
        width: 3.0,
        height: 3.0,
    };
    assert!(outside.clamped_to(5, 5).is_err());
}

#[test]
fn clamp_rejects_non_finite_origins() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let crop = CropRect {
            x: bad,
            y: 0.0,
            width: 3.0,
            height: 3.0,
        };
        assert!(crop.clamped_to(5, 5).is_err(), "x = {bad} must be rejected");

        let crop = CropRect {
            x: 0.0,
            y: bad,
            width: 3.0,
            height: 3.0,
        };
        assert!(crop.clamped_to(5, 5).is_err(), "y = {bad} must be rejected");
    }
}

#[test]
fn clamp_accepts_non_integer_rects() {
    let crop = CropRect {
        x: 0.5,
        y: 0.25,
        width: 3.5,
        height: 2.5,
    };
    let clamped = crop.clamped_to(8, 8).unwrap();
    assert_eq!(clamped, crop);
}
