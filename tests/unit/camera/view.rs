use super::*;

use glam::{Vec3, Vec4};

fn surface() -> SurfaceSize {
    SurfaceSize::new(200, 100).unwrap()
}

#[test]
fn new_camera_is_default_kind_with_identity_view() {
    let cam = CameraState::new(surface()).unwrap();
    assert_eq!(cam.projection_kind(), ProjectionKind::Default);
    assert_eq!(*cam.view_matrix(), Mat4::IDENTITY);
}

#[test]
fn default_perspective_uses_surface_aspect_and_60_deg_fovy() {
    let cam = CameraState::new(surface()).unwrap();
    let m = cam.projection_matrix().to_cols_array();
    let focal = 1.0 / (DEFAULT_FOVY * 0.5).tan();
    assert!((m[5] - focal).abs() < 1e-6);
    assert!((m[0] - focal / 2.0).abs() < 1e-6);
}

#[test]
fn camera_position_is_absolute_not_cumulative() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_position(0.0, 0.0, 100.0);
    assert_eq!(
        cam.view_matrix().col(3),
        Vec4::new(0.0, 0.0, -100.0, 1.0)
    );

    cam.set_position(0.0, 0.0, 0.0);
    assert_eq!(*cam.view_matrix(), Mat4::IDENTITY);
}

#[test]
fn camera_translation_negates_the_position() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_position(10.0, 20.0, 30.0);
    assert_eq!(
        cam.view_matrix().col(3),
        Vec4::new(-10.0, -20.0, -30.0, 1.0)
    );
}

#[test]
fn perspective_command_marks_projection_custom() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_perspective(surface(), PerspectiveOpts::default())
        .unwrap();
    assert_eq!(cam.projection_kind(), ProjectionKind::Custom);
}

#[test]
fn ortho_command_marks_projection_custom() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_ortho(surface(), OrthoOpts::default()).unwrap();
    assert_eq!(cam.projection_kind(), ProjectionKind::Custom);
}

#[test]
fn explicit_zero_near_is_rejected_not_defaulted() {
    let mut cam = CameraState::new(surface()).unwrap();
    let before = *cam.projection_matrix();

    let opts = PerspectiveOpts {
        near: Some(0.0),
        ..PerspectiveOpts::default()
    };
    assert!(cam.set_perspective(surface(), opts).is_err());

    // Rejected command leaves projection and kind untouched.
    assert_eq!(*cam.projection_matrix(), before);
    assert_eq!(cam.projection_kind(), ProjectionKind::Default);
}

#[test]
fn ortho_defaults_span_the_surface_box() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_ortho(surface(), OrthoOpts::default()).unwrap();

    // 200x100 surface: box is [-100,100]x[-50,50], near 0, far 200.
    let m = cam.projection_matrix();
    let lo = m.project_point3(Vec3::new(-100.0, -50.0, 0.0));
    assert!((lo - Vec3::new(-1.0, -1.0, -1.0)).length() < 1e-6);
    let hi = m.project_point3(Vec3::new(100.0, 50.0, 200.0));
    assert!((hi - Vec3::new(1.0, 1.0, 1.0)).length() < 1e-6);
}

#[test]
fn view_projection_composes_projection_then_view() {
    let mut cam = CameraState::new(surface()).unwrap();
    cam.set_ortho(surface(), OrthoOpts::default()).unwrap();
    cam.set_position(10.0, 0.0, 0.0);

    let expected = *cam.projection_matrix() * *cam.view_matrix();
    assert_eq!(cam.view_projection_matrix(), expected);
}
