use super::*;

#[test]
fn tint_on_opaque_white_yields_the_tint_exactly() {
    let out = apply_tint(&[255, 255, 255, 255], Rgba8::new(0, 153, 204, 255));
    assert_eq!(out, vec![0, 153, 204, 255]);
}

#[test]
fn alpha_only_tint_leaves_rgb_untouched() {
    let out = apply_tint(&[12, 200, 7, 255], Rgba8::new(255, 255, 255, 128));
    assert_eq!(out, vec![12, 200, 7, 128]);
}

#[test]
fn white_tint_is_the_identity() {
    let px = [3u8, 50, 250, 128, 0, 0, 0, 0];
    assert_eq!(apply_tint(&px, Rgba8::WHITE), px.to_vec());
}

#[test]
fn channels_scale_independently_per_pixel() {
    let px = [100u8, 100, 100, 100, 200, 200, 200, 200];
    let out = apply_tint(&px, Rgba8::new(255, 0, 128, 255));
    assert_eq!(out, vec![100, 0, 50, 100, 200, 0, 100, 200]);
}

#[test]
fn video_backed_bitmap_passes_through_untinted() {
    let vid = Bitmap::video_backed(320, 180, 1280, 720).unwrap();
    assert!(tinted_pixels(&vid, Rgba8::new(0, 153, 204, 255)).is_none());

    let bmp = Bitmap::from_rgba8(1, 1, vec![255, 255, 255, 255]).unwrap();
    assert_eq!(
        tinted_pixels(&bmp, Rgba8::new(0, 153, 204, 255)),
        Some(vec![0, 153, 204, 255])
    );
}
