//! Error types for layout synthesis.

use thiserror::Error;

/// Errors raised by the layout core.
///
/// Synthesis itself is total once a [`Site`](crate::models::Site) exists, so
/// the only failure is rejecting the site dimensions up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Site width or depth was not a positive millimeter value that fits in `u32`.
    #[error("invalid site dimensions {width}x{depth} mm: width and depth must be positive")]
    InvalidSiteDimensions {
        /// Requested width in millimeters
        width: i64,
        /// Requested depth in millimeters
        depth: i64,
    },
}

/// Result alias for the layout core.
pub type Result<T> = std::result::Result<T, LayoutError>;
