use kurbo::Rect;

use crate::assets::bitmap::Bitmap;
use crate::camera::view::{CameraState, OrthoOpts, PerspectiveOpts};
use crate::effects::tint::apply_tint;
use crate::foundation::core::{Rgba8, SurfaceSize};
use crate::foundation::error::EaselResult;
use crate::render::geometry::{DrawOpts, ImageMode, resolve_draw};
use crate::render::state::DrawState;

/// Pixel data accompanying a resolved draw.
#[derive(Clone, Debug)]
pub enum PixelSource<'a> {
    /// The bitmap's own buffer, untinted.
    Borrowed(&'a [u8]),
    /// Freshly tinted copy of the bitmap's buffer.
    Tinted(Vec<u8>),
    /// Pass-through source without readable pixels; the rasterizer samples
    /// the bitmap handle itself.
    Opaque,
}

impl PixelSource<'_> {
    /// Readable bytes, unless this is a pass-through source.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Borrowed(px) => Some(px),
            Self::Tinted(px) => Some(px),
            Self::Opaque => None,
        }
    }
}

/// Fully resolved draw request: destination rectangle, source
/// sub-rectangle, and the pixels to blit.
///
/// Ephemeral; produced by [`Renderer::draw_image`] and consumed by a
/// [`crate::render::backend::Rasterizer`] within the same draw call.
#[derive(Clone, Debug)]
pub struct ResolvedDraw<'a> {
    /// Axis-aligned destination rectangle on the render surface.
    pub dest: Rect,
    /// Validated, density-corrected source rectangle.
    pub src: Rect,
    /// Pixel data for the blit.
    pub pixels: PixelSource<'a>,
}

/// Drawing front end owning the camera and style state for one render
/// target.
///
/// Single-threaded by construction: all state is mutated by the same
/// control thread that issues draws, so a command between two draws simply
/// changes what later draws see.
#[derive(Clone, Debug)]
pub struct Renderer {
    surface: SurfaceSize,
    camera: CameraState,
    state: DrawState,
}

impl Renderer {
    /// Create a renderer for a surface, with the default camera and
    /// untinted corner-mode style.
    pub fn new(surface: SurfaceSize) -> EaselResult<Self> {
        Ok(Self {
            surface,
            camera: CameraState::new(surface)?,
            state: DrawState::default(),
        })
    }

    /// Current render-surface size.
    pub fn surface_size(&self) -> SurfaceSize {
        self.surface
    }

    /// Update the render-surface size used for default frustum/ortho-box
    /// derivation. Existing matrices are kept; only later projection
    /// commands see the new size.
    pub fn set_surface_size(&mut self, surface: SurfaceSize) {
        self.surface = surface;
    }

    /// Camera state for this render target.
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Place the camera at `(x, y, z)`; see
    /// [`CameraState::set_position`].
    pub fn set_camera_position(&mut self, x: f32, y: f32, z: f32) {
        self.camera.set_position(x, y, z);
    }

    /// Replace the projection with a perspective matrix built from `opts`
    /// and the current surface size.
    pub fn set_perspective(&mut self, opts: PerspectiveOpts) -> EaselResult<()> {
        self.camera.set_perspective(self.surface, opts)
    }

    /// Replace the projection with an orthographic matrix built from
    /// `opts` and the current surface size.
    pub fn set_ortho(&mut self, opts: OrthoOpts) -> EaselResult<()> {
        self.camera.set_ortho(self.surface, opts)
    }

    /// Drawing style state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Set the tint applied to subsequent image draws.
    pub fn set_tint(&mut self, tint: Rgba8) {
        self.state.set_tint(tint);
    }

    /// Clear the tint; subsequent image draws are untinted.
    pub fn clear_tint(&mut self) {
        self.state.clear_tint();
    }

    /// Set the image placement mode.
    pub fn set_image_mode(&mut self, mode: ImageMode) {
        self.state.set_image_mode(mode);
    }

    /// Set the image placement mode by name; unrecognized names retain the
    /// previous mode.
    pub fn set_image_mode_named(&mut self, name: &str) {
        self.state.set_image_mode_named(name);
    }

    /// Resolve an image draw against the current style state.
    ///
    /// Runs geometry resolution and, when a tint is active, the tint
    /// compositor. The result is handed to an external rasterizer; no
    /// surface is touched here.
    #[tracing::instrument(skip(self, bitmap))]
    pub fn draw_image<'a>(
        &self,
        bitmap: &'a Bitmap,
        dx: f64,
        dy: f64,
        opts: DrawOpts,
    ) -> ResolvedDraw<'a> {
        let (dest, src) = resolve_draw(bitmap, dx, dy, opts, self.state.image_mode());
        let pixels = match (bitmap.pixels(), self.state.tint()) {
            (None, _) => PixelSource::Opaque,
            (Some(px), Some(tint)) => PixelSource::Tinted(apply_tint(px, tint)),
            (Some(px), None) => PixelSource::Borrowed(px),
        };
        ResolvedDraw { dest, src, pixels }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
