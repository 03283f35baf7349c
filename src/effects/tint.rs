use crate::assets::bitmap::Bitmap;
use crate::foundation::core::Rgba8;
use crate::foundation::math::mul_div255_u8;

/// Apply a per-channel multiplicative tint to a straight-alpha RGBA8
/// buffer, returning a fresh buffer of identical dimensions.
///
/// Every channel of every pixel is scaled by the matching tint channel
/// (`out = px * tint / 255`, rounded). This is color modulation, not alpha
/// compositing against a background. Trailing bytes that do not form a
/// full quadruplet are copied unchanged.
pub fn apply_tint(pixels: &[u8], tint: Rgba8) -> Vec<u8> {
    let tr = u16::from(tint.r);
    let tg = u16::from(tint.g);
    let tb = u16::from(tint.b);
    let ta = u16::from(tint.a);

    let mut out = pixels.to_vec();
    for px in out.chunks_exact_mut(4) {
        px[0] = mul_div255_u8(u16::from(px[0]), tr);
        px[1] = mul_div255_u8(u16::from(px[1]), tg);
        px[2] = mul_div255_u8(u16::from(px[2]), tb);
        px[3] = mul_div255_u8(u16::from(px[3]), ta);
    }
    out
}

/// Tinted copy of a bitmap's pixel buffer, or `None` when the bitmap
/// exposes no readable pixels.
///
/// Tinting a pass-through source (a live video surface) is a no-op, not
/// an error; the caller blits the source untinted.
pub fn tinted_pixels(bitmap: &Bitmap, tint: Rgba8) -> Option<Vec<u8>> {
    bitmap.pixels().map(|px| apply_tint(px, tint))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tint.rs"]
mod tests;
