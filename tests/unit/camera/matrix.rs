use super::*;

use crate::foundation::error::EaselError;

fn assert_mat_eq(m: &Mat4, expected: &[f32; 16], eps: f32) {
    let got = m.to_cols_array();
    for (i, (g, e)) in got.iter().zip(expected.iter()).enumerate() {
        assert!(
            (g - e).abs() < eps,
            "coefficient {i}: got {g}, expected {e}"
        );
    }
}

#[test]
fn identity_is_multiplicative_unit() {
    let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();
    assert_eq!(Mat4::IDENTITY * m, m);
    assert_eq!(m * Mat4::IDENTITY, m);
}

#[test]
fn translation_moves_the_origin() {
    let m = translation(1.0, 2.0, 3.0);
    let p = m.transform_point3(Vec3::ZERO);
    assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn translate_composes_after_the_given_transform() {
    assert_eq!(
        translate(&Mat4::IDENTITY, 1.0, 2.0, 3.0),
        translation(1.0, 2.0, 3.0)
    );

    // The translation applies after m.
    let m = translation(5.0, 0.0, 0.0);
    let composed = translate(&m, 0.0, 7.0, 0.0);
    let p = composed.transform_point3(Vec3::ZERO);
    assert_eq!(p, Vec3::new(5.0, 7.0, 0.0));
}

#[test]
fn perspective_matches_analytic_reference() {
    // fovy 90 deg, aspect 1, near 1, far 100: focal length is exactly 1.
    let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();
    let expected = [
        1.0,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
        0.0,
        0.0,
        0.0,
        0.0,
        -101.0 / 99.0,
        -1.0,
        0.0,
        0.0,
        -200.0 / 99.0,
        0.0,
    ];
    assert_mat_eq(&m, &expected, 1e-6);
}

#[test]
fn ortho_maps_box_corners_to_clip_corners() {
    let m = ortho(-50.0, 50.0, -50.0, 50.0, 0.0, 100.0).unwrap();

    let lo = m.project_point3(Vec3::new(-50.0, -50.0, 0.0));
    assert!((lo - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-6);

    let hi = m.project_point3(Vec3::new(50.0, 50.0, 100.0));
    assert!((hi - Vec3::new(1.0, 1.0, 1.0)).length() < 1e-6);

    let center = m.project_point3(Vec3::new(0.0, 0.0, 50.0));
    assert!(center.length() < 1e-6);
}

#[test]
fn perspective_rejects_invalid_parameters() {
    let cases = [
        (0.0, 1.0, 1.0, 100.0),
        (std::f32::consts::PI, 1.0, 1.0, 100.0),
        (1.0, 0.0, 1.0, 100.0),
        (1.0, -1.0, 1.0, 100.0),
        (1.0, 1.0, 0.0, 100.0),
        (1.0, 1.0, -1.0, 100.0),
        (1.0, 1.0, 1.0, 1.0),
        (1.0, 1.0, 1.0, 0.5),
        (f32::NAN, 1.0, 1.0, 100.0),
        (1.0, f32::INFINITY, 1.0, 100.0),
    ];
    for (fovy, aspect, near, far) in cases {
        let got = perspective(fovy, aspect, near, far);
        assert!(
            matches!(got, Err(EaselError::Projection(_))),
            "expected rejection for fovy={fovy} aspect={aspect} near={near} far={far}"
        );
    }
}

#[test]
fn ortho_rejects_degenerate_boxes() {
    assert!(matches!(
        ortho(10.0, 10.0, -50.0, 50.0, 0.0, 100.0),
        Err(EaselError::Projection(_))
    ));
    assert!(matches!(
        ortho(-50.0, 50.0, 5.0, 5.0, 0.0, 100.0),
        Err(EaselError::Projection(_))
    ));
    assert!(matches!(
        ortho(-50.0, 50.0, -50.0, 50.0, 7.0, 7.0),
        Err(EaselError::Projection(_))
    ));
    assert!(matches!(
        ortho(f32::NAN, 50.0, -50.0, 50.0, 0.0, 100.0),
        Err(EaselError::Projection(_))
    ));
}
