//! Surface generation parameters.

use fractal_types::{Aabb, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;
use crate::grid::MAX_RESOLUTION;
use crate::julia::JuliaParams;

/// Configuration parameters for surface generation.
///
/// Use the builder methods to configure the run, or start from one of
/// the preset constructors like [`SurfaceParams::preview`] or
/// [`SurfaceParams::basilica`].
///
/// # Examples
///
/// ```
/// use fractal_surface::SurfaceParams;
///
/// // Default quaternion Julia surface at 64^3
/// let params = SurfaceParams::new();
///
/// // Quick preview with a custom iso level
/// let params = SurfaceParams::preview().with_iso_level(0.4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceParams {
    /// Scalar field to sample.
    pub julia: JuliaParams,

    /// Region of space covered by the sampling grid.
    ///
    /// The default `[-1.5, 1.5]` cube comfortably contains every Julia
    /// set with `|c| <= 2`, since those sets lie inside the escape
    /// ball of radius 2.
    pub extent: Aabb,

    /// Number of voxels along each axis.
    ///
    /// Zero is allowed and yields an empty mesh. Values above
    /// [`MAX_RESOLUTION`] are rejected by [`validate`](Self::validate).
    pub resolution: usize,

    /// Field value at which the surface is extracted.
    ///
    /// Must lie strictly between 0 and 1, the open range of the
    /// smoothed escape-time field.
    pub iso_level: f64,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            julia: JuliaParams::default(),
            extent: Aabb::new(Point3::new(-1.5, -1.5, -1.5), Point3::new(1.5, 1.5, 1.5)),
            resolution: 64,
            iso_level: 0.5,
        }
    }
}

impl SurfaceParams {
    /// Creates a new `SurfaceParams` with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use fractal_surface::SurfaceParams;
    ///
    /// let params = SurfaceParams::new();
    /// assert_eq!(params.resolution, 64);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates parameters for a quick, chunky preview.
    ///
    /// Uses a 32 voxel grid, roughly an eighth of the default work.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            resolution: 32,
            ..Default::default()
        }
    }

    /// Creates parameters for a high-detail surface.
    ///
    /// Uses a 128 voxel grid. Expect several million field
    /// evaluations.
    #[must_use]
    pub fn detailed() -> Self {
        Self {
            resolution: 128,
            ..Default::default()
        }
    }

    /// Creates parameters for the basilica Julia set, `c = -1`.
    ///
    /// Its interior is well understood and always yields a non-empty
    /// surface inside the default extent.
    #[must_use]
    pub fn basilica() -> Self {
        Self {
            julia: JuliaParams::basilica(),
            ..Default::default()
        }
    }

    /// Sets the scalar field configuration.
    #[must_use]
    pub const fn with_julia(mut self, julia: JuliaParams) -> Self {
        self.julia = julia;
        self
    }

    /// Sets the sampled region.
    #[must_use]
    pub const fn with_extent(mut self, extent: Aabb) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the grid resolution.
    ///
    /// Values above [`MAX_RESOLUTION`] are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use fractal_surface::SurfaceParams;
    ///
    /// let params = SurfaceParams::new().with_resolution(48);
    /// assert_eq!(params.resolution, 48);
    /// ```
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.min(MAX_RESOLUTION);
        self
    }

    /// Sets the iso level the surface is extracted at.
    #[must_use]
    pub const fn with_iso_level(mut self, iso_level: f64) -> Self {
        self.iso_level = iso_level;
        self
    }

    /// Validates the parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or an error
    /// describing the first invalid parameter found.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the extent, resolution, iteration
    /// budget, escape radius, or iso level is out of range.
    pub fn validate(&self) -> Result<(), SurfaceError> {
        let size = self.extent.size();
        if self.extent.is_empty()
            || !self.extent.is_finite()
            || size.x <= 0.0
            || size.y <= 0.0
            || size.z <= 0.0
        {
            return Err(SurfaceError::InvalidBounds {
                min: self.extent.min.into(),
                max: self.extent.max.into(),
            });
        }

        if self.resolution > MAX_RESOLUTION {
            return Err(SurfaceError::InvalidResolution(self.resolution));
        }

        if self.julia.max_iterations == 0 {
            return Err(SurfaceError::InvalidIterations(self.julia.max_iterations));
        }

        if !self.julia.escape_radius.is_finite() || self.julia.escape_radius <= 1.0 {
            return Err(SurfaceError::InvalidEscapeRadius(self.julia.escape_radius));
        }

        if !self.iso_level.is_finite() || self.iso_level <= 0.0 || self.iso_level >= 1.0 {
            return Err(SurfaceError::InvalidIsoLevel(self.iso_level));
        }

        Ok(())
    }
}
