/// Rasterizer collaborator seam.
pub mod backend;
/// Draw-geometry resolution: placement modes and rectangle defaulting.
pub mod geometry;
/// Renderer front end tying camera, style, and draw resolution together.
pub mod renderer;
/// Renderer-wide drawing style state.
pub mod state;
