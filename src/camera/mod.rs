/// Validated view/projection matrix builders.
pub mod matrix;
/// Per-render-target camera state and projection defaulting.
pub mod view;
