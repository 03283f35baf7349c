use crate::assets::bitmap::Bitmap;
use crate::foundation::error::{EaselError, EaselResult, LOAD_ERR_DECODE, LOAD_ERR_EMPTY};

/// Decode encoded image bytes into a static RGBA8 [`Bitmap`].
///
/// This is the synchronous end of the bitmap-acquisition collaborator:
/// transport and scheduling stay outside, the decoded result enters the
/// pipeline here. Failures carry a numeric category code and `resource`,
/// the identifier of the failing asset.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_bitmap(resource: &str, bytes: &[u8]) -> EaselResult<Bitmap> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| {
        tracing::debug!(error = %e, "image decode failed");
        EaselError::load(LOAD_ERR_DECODE, resource)
    })?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(EaselError::load(LOAD_ERR_EMPTY, resource));
    }
    Bitmap::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
