/// Convenience result type used across Easel.
pub type EaselResult<T> = Result<T, EaselError>;

/// Load-failure category: the resource bytes could not be decoded.
pub const LOAD_ERR_DECODE: u32 = 1;
/// Load-failure category: the resource decoded to an empty bitmap.
pub const LOAD_ERR_EMPTY: u32 = 2;

/// Top-level error taxonomy used by the renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum EaselError {
    /// Invalid caller-provided data (buffer lengths, zero-sized surfaces).
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected projection parameters. Raised before any matrix is
    /// constructed so non-finite coefficients never reach the pipeline.
    #[error("projection error: {0}")]
    Projection(String),

    /// Bitmap acquisition failure, identified by a numeric category code
    /// and the failing resource identifier.
    #[error("bitmap load error {code} for '{resource}'")]
    Load {
        /// Failure category (`LOAD_ERR_*`).
        code: u32,
        /// Identifier of the resource that failed to load.
        resource: String,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaselError {
    /// Build an [`EaselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EaselError::Projection`] value.
    pub fn projection(msg: impl Into<String>) -> Self {
        Self::Projection(msg.into())
    }

    /// Build an [`EaselError::Load`] value.
    pub fn load(code: u32, resource: impl Into<String>) -> Self {
        Self::Load {
            code,
            resource: resource.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
