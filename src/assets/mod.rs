/// Bitmap model: backing kinds, derived draw defaults, pixel access.
pub mod bitmap;
/// Synchronous bitmap decoding entry point.
pub mod decode;
