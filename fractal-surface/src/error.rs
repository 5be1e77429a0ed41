//! Error types for surface generation.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while sampling the field or building the mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurfaceError {
    /// Sampling extent is empty, degenerate, or non-finite.
    #[error("sampling extent must be finite with positive size on every axis, got min {min:?} max {max:?}")]
    InvalidBounds {
        /// Minimum corner of the rejected extent.
        min: [f64; 3],
        /// Maximum corner of the rejected extent.
        max: [f64; 3],
    },

    /// Grid resolution exceeds the supported maximum.
    #[error(
        "grid resolution must be at most {max}, got {0}",
        max = crate::grid::MAX_RESOLUTION
    )]
    InvalidResolution(usize),

    /// Iteration budget for the escape-time field is zero.
    #[error("max_iterations must be at least 1, got {0}")]
    InvalidIterations(u32),

    /// Escape radius would make the smoothed field undefined.
    #[error("escape_radius must be finite and greater than 1, got {0}")]
    InvalidEscapeRadius(f64),

    /// Iso level lies outside the field's open value range.
    #[error("iso_level must lie strictly between 0 and 1, got {0}")]
    InvalidIsoLevel(f64),

    /// Reserving space for triangles failed.
    #[error("mesh allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let error = SurfaceError::InvalidResolution(5000);
        assert!(error.to_string().contains("5000"));
        assert!(error.to_string().contains("4096"));

        let error = SurfaceError::InvalidIsoLevel(1.5);
        assert!(error.to_string().contains("1.5"));
    }

    #[test]
    fn test_allocation_error_converts_from_try_reserve() {
        let mut huge: Vec<u64> = Vec::new();
        let failure = huge
            .try_reserve(usize::MAX)
            .expect_err("reservation of usize::MAX must fail");
        let error = SurfaceError::from(failure);
        assert!(matches!(error, SurfaceError::Allocation(_)));
    }
}
