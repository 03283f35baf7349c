use crate::foundation::error::{EaselError, EaselResult};

/// Backing storage of a [`Bitmap`], resolved once at acquisition time.
#[derive(Clone, Debug)]
pub enum BitmapKind {
    /// CPU-resident RGBA8 quadruplets, straight alpha.
    Static {
        /// Pixel buffer, `width * height * 4` bytes.
        pixels: Vec<u8>,
    },
    /// Live video-like surface without directly readable pixels.
    VideoBacked {
        /// Intrinsic video width in pixels, non-zero.
        video_width: u32,
        /// Intrinsic video height in pixels.
        video_height: u32,
    },
}

/// A decoded bitmap handed to the draw pipeline by the acquisition
/// collaborator.
///
/// Owned by the caller; the pipeline only reads it and derives tinted
/// copies. For static bitmaps `width`/`height` are the natural pixel
/// dimensions; for video-backed ones they are the element's displayed
/// size, with the intrinsic dimensions carried in the kind.
#[derive(Clone, Debug)]
pub struct Bitmap {
    width: u32,
    height: u32,
    display_width: Option<f64>,
    kind: BitmapKind,
}

impl Bitmap {
    /// Build a static bitmap from a straight-alpha RGBA8 buffer.
    ///
    /// The buffer length must be exactly `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> EaselResult<Self> {
        if width == 0 || height == 0 {
            return Err(EaselError::validation("Bitmap dimensions must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| EaselError::validation("Bitmap byte size overflow"))?;
        if pixels.len() != expected {
            return Err(EaselError::validation(format!(
                "Bitmap buffer length {} does not match {width}x{height} rgba8 ({expected})",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            display_width: None,
            kind: BitmapKind::Static { pixels },
        })
    }

    /// Build a video-backed bitmap: displayed element size plus intrinsic
    /// video dimensions.
    pub fn video_backed(
        width: u32,
        height: u32,
        video_width: u32,
        video_height: u32,
    ) -> EaselResult<Self> {
        if width == 0 || height == 0 {
            return Err(EaselError::validation("Bitmap dimensions must be > 0"));
        }
        if video_width == 0 || video_height == 0 {
            return Err(EaselError::validation(
                "video intrinsic dimensions must be > 0",
            ));
        }
        Ok(Self {
            width,
            height,
            display_width: None,
            kind: BitmapKind::VideoBacked {
                video_width,
                video_height,
            },
        })
    }

    /// Attach an explicit display-style width, enabling pixel-density
    /// correction for bitmaps displayed at a different logical size.
    pub fn with_display_width(mut self, display_width: f64) -> Self {
        self.display_width = Some(display_width);
        self
    }

    /// Width in pixels (natural for static, displayed for video-backed).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (natural for static, displayed for video-backed).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Explicit display-style width, if any.
    pub fn display_width(&self) -> Option<f64> {
        self.display_width
    }

    /// Backing-storage kind.
    pub fn kind(&self) -> &BitmapKind {
        &self.kind
    }

    /// Readable pixel buffer; `None` for video-backed sources.
    pub fn pixels(&self) -> Option<&[u8]> {
        match &self.kind {
            BitmapKind::Static { pixels } => Some(pixels),
            BitmapKind::VideoBacked { .. } => None,
        }
    }

    /// Default source dimensions for a draw that does not name its own.
    ///
    /// Static bitmaps use their natural size. Video-backed sources use the
    /// intrinsic video width, with the height rescaled against the
    /// displayed width so a styled element keeps its aspect.
    pub fn default_source_size(&self) -> (f64, f64) {
        match self.kind {
            BitmapKind::Static { .. } => (f64::from(self.width), f64::from(self.height)),
            BitmapKind::VideoBacked {
                video_width,
                video_height,
            } => (
                f64::from(video_width),
                f64::from(self.width) * f64::from(video_height) / f64::from(video_width),
            ),
        }
    }

    /// Pixel-density correction factor for the source rectangle.
    ///
    /// 1 unless an explicit display width styles the bitmap to a logical
    /// size different from its backing resolution (retina-style assets).
    pub fn pixel_density(&self) -> f64 {
        let Some(display_width) = self.display_width else {
            return 1.0;
        };
        if display_width <= 0.0 {
            return 1.0;
        }
        match self.kind {
            BitmapKind::VideoBacked { video_width, .. } => f64::from(video_width) / display_width,
            BitmapKind::Static { .. } => f64::from(self.width) / display_width,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;
