use glam::Mat4;

use crate::camera::matrix;
use crate::foundation::core::SurfaceSize;
use crate::foundation::error::EaselResult;

/// Default vertical field of view: 60 degrees.
const DEFAULT_FOVY: f32 = std::f32::consts::FRAC_PI_3;

/// Whether the projection matrix is the surface-derived default or was
/// explicitly replaced by a caller command.
///
/// `Custom` is sticky: once a perspective or ortho command runs there is no
/// transition back. Construct a fresh [`CameraState`] to reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Surface-derived default perspective.
    Default,
    /// Caller-provided perspective or ortho projection.
    Custom,
}

/// Optional perspective parameters; `None` fields take surface-derived
/// defaults.
///
/// Explicit values are always used as given, even when falsy in the
/// source's sense: a caller passing `near = 0.0` gets a validation error,
/// not the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerspectiveOpts {
    /// Vertical field of view in radians. Default: 60 degrees.
    pub fovy: Option<f32>,
    /// Aspect ratio. Default: surface `width/height`.
    pub aspect: Option<f32>,
    /// Near clip distance. Default: one tenth of the default eye distance.
    pub near: Option<f32>,
    /// Far clip distance. Default: ten times the default eye distance.
    pub far: Option<f32>,
}

impl PerspectiveOpts {
    /// Resolve omitted parameters against the render surface.
    ///
    /// The default eye distance is `(height/2) / tan(fovy/2)`, computed
    /// from the resolved field of view so the default frustum stays
    /// visually centered for any surface size.
    fn resolve(self, surface: SurfaceSize) -> (f32, f32, f32, f32) {
        let fovy = self.fovy.unwrap_or(DEFAULT_FOVY);
        let aspect = self.aspect.unwrap_or_else(|| surface.aspect());
        let eye_dist = (surface.height as f32 * 0.5) / (fovy * 0.5).tan();
        let near = self.near.unwrap_or(eye_dist * 0.1);
        let far = self.far.unwrap_or(eye_dist * 10.0);
        (fovy, aspect, near, far)
    }
}

/// Optional orthographic parameters; `None` fields take surface-derived
/// defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrthoOpts {
    /// Left plane. Default: `-width/2`.
    pub left: Option<f32>,
    /// Right plane. Default: `width/2`.
    pub right: Option<f32>,
    /// Bottom plane. Default: `-height/2`.
    pub bottom: Option<f32>,
    /// Top plane. Default: `height/2`.
    pub top: Option<f32>,
    /// Near plane. Default: 0.
    pub near: Option<f32>,
    /// Far plane. Default: `max(width, height)`.
    pub far: Option<f32>,
}

impl OrthoOpts {
    fn resolve(self, surface: SurfaceSize) -> (f32, f32, f32, f32, f32, f32) {
        let half_w = surface.width as f32 * 0.5;
        let half_h = surface.height as f32 * 0.5;
        (
            self.left.unwrap_or(-half_w),
            self.right.unwrap_or(half_w),
            self.bottom.unwrap_or(-half_h),
            self.top.unwrap_or(half_h),
            self.near.unwrap_or(0.0),
            self.far
                .unwrap_or_else(|| surface.width.max(surface.height) as f32),
        )
    }
}

/// Per-render-target camera state: view matrix, projection matrix, and the
/// projection kind flag.
///
/// Mutated only by camera/perspective/ortho commands on the single control
/// thread; matrices handed out are replaced wholesale, never edited in
/// place.
#[derive(Clone, Debug)]
pub struct CameraState {
    view: Mat4,
    projection: Mat4,
    kind: ProjectionKind,
}

impl CameraState {
    /// Identity view with the default perspective projection for
    /// `surface`.
    pub fn new(surface: SurfaceSize) -> EaselResult<Self> {
        let (fovy, aspect, near, far) = PerspectiveOpts::default().resolve(surface);
        Ok(Self {
            view: Mat4::IDENTITY,
            projection: matrix::perspective(fovy, aspect, near, far)?,
            kind: ProjectionKind::Default,
        })
    }

    /// Place the camera at `(x, y, z)`.
    ///
    /// Camera motion is modeled as inverse scene motion: the view matrix
    /// becomes a translation by `(-x, -y, -z)`. Positioning is absolute;
    /// each call re-translates from identity instead of composing with the
    /// previous position.
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.view = matrix::translation(-x, -y, -z);
    }

    /// Replace the projection with a freshly built perspective matrix.
    ///
    /// Marks the projection [`ProjectionKind::Custom`]. On rejected
    /// parameters the previous projection and kind are left untouched.
    pub fn set_perspective(
        &mut self,
        surface: SurfaceSize,
        opts: PerspectiveOpts,
    ) -> EaselResult<()> {
        let (fovy, aspect, near, far) = opts.resolve(surface);
        self.projection = matrix::perspective(fovy, aspect, near, far)?;
        self.kind = ProjectionKind::Custom;
        Ok(())
    }

    /// Replace the projection with a freshly built orthographic matrix.
    ///
    /// Marks the projection [`ProjectionKind::Custom`]. On rejected
    /// parameters the previous projection and kind are left untouched.
    pub fn set_ortho(&mut self, surface: SurfaceSize, opts: OrthoOpts) -> EaselResult<()> {
        let (left, right, bottom, top, near, far) = opts.resolve(surface);
        self.projection = matrix::ortho(left, right, bottom, top, near, far)?;
        self.kind = ProjectionKind::Custom;
        Ok(())
    }

    /// View matrix (inverse of the camera's world translation).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix (perspective or orthographic).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Combined view-projection matrix (`projection * view`).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Current projection kind.
    pub fn projection_kind(&self) -> ProjectionKind {
        self.kind
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/view.rs"]
mod tests;
