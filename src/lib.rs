//! Easel is the camera and image-compositing core of a 2D/3D rendering
//! front end.
//!
//! The crate owns the math and pixel rules a renderer consumes, nothing
//! else:
//!
//! - Build a [`Renderer`] for a render surface
//! - Drive the camera with [`Renderer::set_camera_position`],
//!   [`Renderer::set_perspective`] and [`Renderer::set_ortho`]
//! - Resolve image draws with [`Renderer::draw_image`] and hand the
//!   resulting [`ResolvedDraw`] to a [`Rasterizer`]
//!
//! Bitmap acquisition (network/decoding scheduling) and the actual surface
//! blit are external collaborators; see [`decode_bitmap`] for the
//! synchronous end of the former and [`Rasterizer`] for the seam to the
//! latter.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod effects;

/// Bitmap model and decoding.
pub mod assets;
/// Camera state and projection construction.
pub mod camera;
/// Draw-geometry resolution and the renderer front end.
pub mod render;

pub use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize, Vec2};
pub use crate::foundation::error::{EaselError, EaselResult, LOAD_ERR_DECODE, LOAD_ERR_EMPTY};

pub use crate::assets::bitmap::{Bitmap, BitmapKind};
pub use crate::assets::decode::decode_bitmap;
pub use crate::camera::matrix::{ortho, perspective, translate, translation};
pub use crate::camera::view::{CameraState, OrthoOpts, PerspectiveOpts, ProjectionKind};
pub use crate::effects::tint::{apply_tint, tinted_pixels};
pub use crate::render::backend::Rasterizer;
pub use crate::render::geometry::{DrawOpts, ImageMode};
pub use crate::render::renderer::{PixelSource, Renderer, ResolvedDraw};
pub use crate::render::state::DrawState;
