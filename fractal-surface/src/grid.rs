//! Uniform sampling grid over a bounded spatial extent.

use crate::error::SurfaceError;
use crate::marching_cubes::CORNER_OFFSETS;
use fractal_types::Aabb;
use nalgebra::{Point3, Vector3};

/// Hard per-axis resolution cap.
///
/// Keeps `resolution^3` voxel counts and the `x8` corner-evaluation
/// accounting comfortably inside 64-bit arithmetic; a sweep at this cap
/// is already far beyond practical CPU budgets.
pub const MAX_RESOLUTION: usize = 4096;

/// Precomputed axis coordinates for one sampling sweep.
///
/// The grid stores one coordinate sequence per axis, each of length
/// `resolution`, plus the per-axis step and the eight step-scaled corner
/// offsets shared by every voxel. A voxel `(ix, iy, iz)` has its base
/// (minimum) corner at `(x[ix], y[iy], z[iz])` and its remaining corners
/// at base + offset; the corner at index 6 of the last voxel on each
/// axis lands exactly on the extent maximum, so `resolution` voxels per
/// axis tile the extent completely.
///
/// Everything is computed once at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct SamplingGrid {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    step: Vector3<f64>,
    corner_offsets: [Vector3<f64>; 8],
    resolution: usize,
}

impl SamplingGrid {
    /// Build a uniform grid of `resolution` voxels per axis over
    /// `extent`.
    ///
    /// `resolution = 0` is valid and produces an empty grid (the sweep
    /// over it visits nothing).
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidBounds`] if the extent is empty,
    /// non-finite, or degenerate (zero size on any axis), and
    /// [`SurfaceError::InvalidResolution`] above [`MAX_RESOLUTION`].
    #[allow(clippy::cast_precision_loss)]
    // Precision: axis indexes are far below 2^52 under MAX_RESOLUTION
    pub fn new(extent: &Aabb, resolution: usize) -> Result<Self, SurfaceError> {
        let size = extent.size();
        if extent.is_empty() || !extent.is_finite() || size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0
        {
            return Err(SurfaceError::InvalidBounds {
                min: extent.min.into(),
                max: extent.max.into(),
            });
        }
        if resolution > MAX_RESOLUTION {
            return Err(SurfaceError::InvalidResolution(resolution));
        }

        let step = if resolution == 0 {
            Vector3::zeros()
        } else {
            size / resolution as f64
        };

        let axis = |min: f64, step: f64| -> Vec<f64> {
            (0..resolution).map(|i| min + i as f64 * step).collect()
        };

        let corner_offsets = CORNER_OFFSETS.map(|[dx, dy, dz]| {
            Vector3::new(dx * step.x, dy * step.y, dz * step.z)
        });

        Ok(Self {
            x: axis(extent.min.x, step.x),
            y: axis(extent.min.y, step.y),
            z: axis(extent.min.z, step.z),
            step,
            corner_offsets,
            resolution,
        })
    }

    /// Number of voxels along each axis.
    #[inline]
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Whether the grid contains no voxels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.resolution == 0
    }

    /// Total number of voxels in the grid.
    #[inline]
    #[must_use]
    pub fn voxel_count(&self) -> u64 {
        (self.resolution as u64).pow(3)
    }

    /// The per-axis spacing between adjacent voxel base positions.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> Vector3<f64> {
        self.step
    }

    /// X axis coordinates (voxel base positions).
    #[inline]
    #[must_use]
    pub fn x_axis(&self) -> &[f64] {
        &self.x
    }

    /// Y axis coordinates (voxel base positions).
    #[inline]
    #[must_use]
    pub fn y_axis(&self) -> &[f64] {
        &self.y
    }

    /// Z axis coordinates (voxel base positions).
    #[inline]
    #[must_use]
    pub fn z_axis(&self) -> &[f64] {
        &self.z
    }

    /// The eight corner offsets shared by every voxel, in standard
    /// marching-cubes corner order.
    #[inline]
    #[must_use]
    pub const fn corner_offsets(&self) -> &[Vector3<f64>; 8] {
        &self.corner_offsets
    }

    /// Base (minimum) corner position of voxel `(ix, iy, iz)`.
    ///
    /// # Panics
    ///
    /// Panics if any index is outside `[0, resolution)`.
    #[inline]
    #[must_use]
    pub fn voxel_base(&self, ix: usize, iy: usize, iz: usize) -> Point3<f64> {
        Point3::new(self.x[ix], self.y[iy], self.z[iz])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extent() -> Aabb {
        Aabb::new(Point3::new(-1.5, -1.5, -1.5), Point3::new(1.5, 1.5, 1.5))
    }

    #[test]
    fn test_axes_are_uniform_and_start_at_min() {
        let grid = SamplingGrid::new(&extent(), 30).unwrap();
        assert_eq!(grid.x_axis().len(), 30);
        assert_relative_eq!(grid.x_axis()[0], -1.5);
        assert_relative_eq!(grid.step().x, 0.1);
        for pair in grid.x_axis().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.1, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_last_voxel_corner_reaches_extent_max() {
        let grid = SamplingGrid::new(&extent(), 25).unwrap();
        let last_base = grid.voxel_base(24, 24, 24);
        let far_corner = last_base + grid.corner_offsets()[6];
        assert_relative_eq!(far_corner.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(far_corner.y, 1.5, epsilon = 1e-12);
        assert_relative_eq!(far_corner.z, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_corner_offsets_are_step_scaled() {
        let wide = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, 1.0));
        let grid = SamplingGrid::new(&wide, 4).unwrap();
        let offsets = grid.corner_offsets();
        // Corner 0 is the base itself; corner 6 is the opposite corner.
        assert_relative_eq!(offsets[0].norm(), 0.0);
        assert_relative_eq!(offsets[6].x, 1.0);
        assert_relative_eq!(offsets[6].y, 0.5);
        assert_relative_eq!(offsets[6].z, 0.25);
    }

    #[test]
    fn test_zero_resolution_is_an_empty_grid() {
        let grid = SamplingGrid::new(&extent(), 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.voxel_count(), 0);
        assert!(grid.x_axis().is_empty());
    }

    #[test]
    fn test_degenerate_extent_is_rejected() {
        let flat = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0));
        let err = SamplingGrid::new(&flat, 8).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidBounds { .. }));
    }

    #[test]
    fn test_non_finite_extent_is_rejected() {
        let bad = Aabb::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(f64::INFINITY, 1.0, 1.0),
        );
        let err = SamplingGrid::new(&bad, 8).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidBounds { .. }));
    }

    #[test]
    fn test_oversized_resolution_is_rejected() {
        let err = SamplingGrid::new(&extent(), MAX_RESOLUTION + 1).unwrap_err();
        assert!(matches!(err, SurfaceError::InvalidResolution(_)));
    }

    #[test]
    fn test_voxel_count_cubes_the_resolution() {
        let grid = SamplingGrid::new(&extent(), 10).unwrap();
        assert_eq!(grid.voxel_count(), 1000);
    }
}
