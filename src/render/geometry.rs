use kurbo::Rect;

use crate::assets::bitmap::Bitmap;

/// Convention for interpreting the destination parameters of a draw call.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// `(dx, dy)` is the top-left corner, `(dw, dh)` the size.
    #[default]
    Corner,
    /// `(dx, dy)` and `(dw, dh)` are opposite corners.
    Corners,
    /// `(dx, dy)` is the center, `(dw, dh)` the size.
    Center,
}

impl ImageMode {
    /// Parse a mode name by exact match against the three recognized
    /// constants; anything else is `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "corner" => Some(Self::Corner),
            "corners" => Some(Self::Corners),
            "center" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Optional destination/source parameters of a draw call; `None` fields
/// take bitmap-derived defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawOpts {
    /// Destination width. Default: the bitmap's default source width.
    pub dw: Option<f64>,
    /// Destination height. Default: the bitmap's default source height.
    pub dh: Option<f64>,
    /// Source x offset. Default: 0.
    pub sx: Option<f64>,
    /// Source y offset. Default: 0.
    pub sy: Option<f64>,
    /// Source width. Values outside `(0, default)` clamp to the default.
    pub sw: Option<f64>,
    /// Source height. Values outside `(0, default)` clamp to the default.
    pub sh: Option<f64>,
}

/// Resolve a draw request into the final destination rectangle and the
/// validated, density-corrected source rectangle.
///
/// Pure and infallible: out-of-range source dimensions clamp to the whole
/// bitmap rather than failing (a sub-rectangle must lie strictly inside
/// the bitmap bounds or it means "use the whole dimension").
pub fn resolve_draw(
    bitmap: &Bitmap,
    dx: f64,
    dy: f64,
    opts: DrawOpts,
    mode: ImageMode,
) -> (Rect, Rect) {
    let (def_w, def_h) = bitmap.default_source_size();

    let dw = opts.dw.unwrap_or(def_w);
    let dh = opts.dh.unwrap_or(def_h);

    let sx = opts.sx.unwrap_or(0.0);
    let sy = opts.sy.unwrap_or(0.0);
    let mut sw = opts.sw.unwrap_or(def_w);
    let mut sh = opts.sh.unwrap_or(def_h);
    if sw <= 0.0 || sw >= def_w {
        sw = def_w;
    }
    if sh <= 0.0 || sh >= def_h {
        sh = def_h;
    }

    // Source coordinates address the backing buffer, which may be denser
    // than the displayed logical size.
    let pd = bitmap.pixel_density();
    let src = Rect::from_origin_size((sx * pd, sy * pd), (sw * pd, sh * pd));

    let dest = match mode {
        ImageMode::Corner => Rect::from_origin_size((dx, dy), (dw, dh)),
        ImageMode::Corners => Rect::new(dx, dy, dw, dh).abs(),
        ImageMode::Center => Rect::from_center_size((dx, dy), (dw, dh)),
    };

    (dest, src)
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
