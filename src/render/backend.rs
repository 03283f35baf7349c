use crate::assets::bitmap::Bitmap;
use crate::foundation::error::EaselResult;
use crate::render::renderer::ResolvedDraw;

/// Seam to the external rasterizer collaborator.
///
/// Receives resolved draws and performs the actual surface blit; this
/// crate never touches a display surface directly. For
/// [`crate::PixelSource::Opaque`] draws the implementation samples the
/// bitmap handle itself.
pub trait Rasterizer {
    /// Blit `draw.src` of `bitmap` into `draw.dest` on the target surface.
    fn blit(&mut self, bitmap: &Bitmap, draw: &ResolvedDraw<'_>) -> EaselResult<()>;
}
