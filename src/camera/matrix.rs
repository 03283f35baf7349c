use glam::{Mat4, Vec3};

use crate::foundation::error::{EaselError, EaselResult};

/// Translation by `(dx, dy, dz)` as a 4x4 homogeneous transform.
pub fn translation(dx: f32, dy: f32, dz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(dx, dy, dz))
}

/// Compose a translation by `(dx, dy, dz)` onto `m`.
///
/// Left-multiplies: the translation applies after `m`, so
/// `translate(m, ..) * p == translation(..) * (m * p)` for any point `p`.
pub fn translate(m: &Mat4, dx: f32, dy: f32, dz: f32) -> Mat4 {
    translation(dx, dy, dz) * *m
}

/// Build a perspective-projection matrix from a vertical field of view in
/// radians, an aspect ratio, and near/far clip distances.
///
/// Standard GL convention: right-handed, clip-space z in `[-1, 1]`.
/// Parameters are validated before any matrix is constructed; rejected
/// inputs report [`EaselError::Projection`].
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> EaselResult<Mat4> {
    if !fovy.is_finite() || fovy <= 0.0 || fovy >= std::f32::consts::PI {
        return Err(EaselError::projection(format!(
            "fovy must be in (0, pi) radians, got {fovy}"
        )));
    }
    let focal = 1.0 / (fovy * 0.5).tan();
    if !focal.is_finite() || focal <= 0.0 {
        return Err(EaselError::projection(format!(
            "degenerate field of view: {fovy}"
        )));
    }
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(EaselError::projection(format!(
            "aspect must be finite and > 0, got {aspect}"
        )));
    }
    if !near.is_finite() || near <= 0.0 {
        return Err(EaselError::projection(format!(
            "near must be finite and > 0, got {near}"
        )));
    }
    if !far.is_finite() || far <= near {
        return Err(EaselError::projection(format!(
            "far must be finite and > near, got near={near} far={far}"
        )));
    }

    Ok(Mat4::perspective_rh_gl(fovy, aspect, near, far))
}

/// Build an orthographic-projection matrix mapping the given box to the
/// canonical clip volume.
///
/// Depth increases into the screen: `(left, bottom, near)` maps to clip
/// `(-1, -1, -1)` and `(right, top, far)` to `(1, 1, 1)`. Degenerate
/// boxes report [`EaselError::Projection`].
pub fn ortho(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> EaselResult<Mat4> {
    for (name, v) in [
        ("left", left),
        ("right", right),
        ("bottom", bottom),
        ("top", top),
        ("near", near),
        ("far", far),
    ] {
        if !v.is_finite() {
            return Err(EaselError::projection(format!(
                "ortho {name} must be finite, got {v}"
            )));
        }
    }
    if right == left || top == bottom || far == near {
        return Err(EaselError::projection(format!(
            "degenerate ortho box: left={left} right={right} bottom={bottom} top={top} near={near} far={far}"
        )));
    }

    let rl = right - left;
    let tb = top - bottom;
    let fnr = far - near;
    Ok(Mat4::from_cols_array(&[
        2.0 / rl,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / tb,
        0.0,
        0.0,
        0.0,
        0.0,
        2.0 / fnr,
        0.0,
        -(right + left) / rl,
        -(top + bottom) / tb,
        -(far + near) / fnr,
        1.0,
    ]))
}

#[cfg(test)]
#[path = "../../tests/unit/camera/matrix.rs"]
mod tests;
