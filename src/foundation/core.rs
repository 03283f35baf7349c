use crate::foundation::error::{EaselError, EaselResult};

pub use kurbo::{Point, Rect, Vec2};

/// Render-surface dimensions in pixels.
///
/// Supplied by the render-surface size provider; default frustum and
/// ortho-box parameters are derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Create a validated surface size with both dimensions non-zero.
    pub fn new(width: u32, height: u32) -> EaselResult<Self> {
        if width == 0 || height == 0 {
            return Err(EaselError::validation(
                "SurfaceSize dimensions must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Width/height aspect ratio.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Straight-alpha RGBA8 color.
///
/// Carries resolved 0-255 channel levels: decoded bitmap pixels and tint
/// colors (color-mode parsing happens upstream).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white; the multiplicative-identity tint.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Build a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
