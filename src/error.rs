//! Error taxonomy for the public dispatch layer.
//!
//! THE CORE's primitive functions are total: they skip out-of-clip writes
//! and never fail. Only the dispatchers in [`crate::draw`] validate their
//! arguments and can return an error.

use thiserror::Error;

/// Errors returned by the public dispatch operations in [`crate::draw`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    /// A color argument could not be converted to a packed pixel.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A point argument was not a valid finite (x, y) pair.
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    /// A point list had too few vertices for the requested operation.
    #[error("expected at least {min} points, got {got}")]
    InvalidPointCount { min: usize, got: usize },

    /// `closed` was requested on an operation that does not support it.
    #[error("closure flag is not valid here: {0}")]
    InvalidClosure(String),

    /// The surface's bytes-per-pixel is not one of {1, 2, 3, 4}.
    #[error("unsupported bit depth: {0} bytes per pixel")]
    UnsupportedBitDepth(u32),

    /// A scratch allocation would exceed the crate's documented ceiling,
    /// or (in principle) the allocator failed.
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// The surface's lock/unlock protocol reported failure.
    #[error("surface lock failed")]
    Lock,
}

/// Result type returned by every public dispatch operation.
pub type RasterResult<T> = Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RasterError::UnsupportedBitDepth(5).to_string(),
            "unsupported bit depth: 5 bytes per pixel"
        );
        assert_eq!(
            RasterError::InvalidPointCount { min: 3, got: 2 }.to_string(),
            "expected at least 3 points, got 2"
        );
        assert_eq!(RasterError::Lock.to_string(), "surface lock failed");
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(RasterError::Lock, RasterError::Lock);
        assert_ne!(
            RasterError::UnsupportedBitDepth(1),
            RasterError::UnsupportedBitDepth(2)
        );
    }
}
