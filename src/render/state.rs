use crate::foundation::core::Rgba8;
use crate::render::geometry::ImageMode;

/// Renderer-wide drawing style state: the active tint and image placement
/// mode.
///
/// Attached to the renderer, not to any bitmap; draws issued after a
/// mutation see the new state, earlier draws are unaffected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawState {
    tint: Option<Rgba8>,
    image_mode: ImageMode,
}

impl DrawState {
    /// Store the resolved 4-channel tint applied to subsequent draws.
    pub fn set_tint(&mut self, tint: Rgba8) {
        self.tint = Some(tint);
    }

    /// Clear the tint; subsequent draws are untinted.
    pub fn clear_tint(&mut self) {
        self.tint = None;
    }

    /// Active tint, if any.
    pub fn tint(&self) -> Option<Rgba8> {
        self.tint
    }

    /// Set the image placement mode.
    pub fn set_image_mode(&mut self, mode: ImageMode) {
        self.image_mode = mode;
    }

    /// Set the image placement mode by name.
    ///
    /// An unrecognized name is a silent no-op retaining the previous mode,
    /// matching the validated-input contract of the mode setter.
    pub fn set_image_mode_named(&mut self, name: &str) {
        if let Some(mode) = ImageMode::parse(name) {
            self.image_mode = mode;
        }
    }

    /// Active image placement mode.
    pub fn image_mode(&self) -> ImageMode {
        self.image_mode
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/state.rs"]
mod tests;
