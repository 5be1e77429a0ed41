//! Quaternion Julia set scalar field.
//!
//! The field lifts each 3D sample position into quaternion space, runs
//! the bounded iteration `q <- q^2 + c`, and reports a smoothed
//! escape-time measure in `[0, 1]`. Points whose orbit never escapes
//! evaluate to exactly `1.0`; points that escape immediately evaluate
//! near `0.0`. The isosurface extracted at a level between the two is a
//! bounded approximation of the Julia set boundary.
//!
//! The value is continuous rather than a binary membership flag so that
//! the triangulator can interpolate surface crossings between voxel
//! corners.

use nalgebra::{Point3, Quaternion};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the quaternion Julia field.
///
/// The sample position supplies the vector (i, j, k) part of the
/// starting quaternion and [`slice_w`](Self::slice_w) supplies the
/// scalar part, so the 3D grid samples one hyperplane slice of the 4D
/// set.
///
/// # Example
///
/// ```
/// use fractal_surface::JuliaParams;
/// use nalgebra::Point3;
///
/// let julia = JuliaParams::basilica();
/// // The origin is periodic under z^2 - 1 and never escapes.
/// assert_eq!(julia.value_at(Point3::new(0.0, 0.0, 0.0)), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JuliaParams {
    /// The Julia constant `c` added after each squaring, as
    /// `(w, i, j, k)`.
    pub c: Quaternion<f64>,

    /// Scalar (w) coordinate of the 4D embedding, fixed for the whole
    /// grid.
    pub slice_w: f64,

    /// Iteration budget. Orbits still bounded after this many steps are
    /// treated as members of the set.
    pub max_iterations: u32,

    /// Escape radius `R`. The orbit is considered escaped once
    /// `|q| > R`. Must exceed 1 for the smoothed measure to be
    /// well defined; 2 is the conventional choice.
    pub escape_radius: f64,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c: Quaternion::new(-0.2, 0.8, 0.0, 0.0),
            slice_w: 0.0,
            max_iterations: 16,
            escape_radius: 2.0,
        }
    }
}

impl JuliaParams {
    /// Creates parameters with the default constant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The basilica set, `c = -1`.
    ///
    /// Connected with a fat interior (the origin sits on an attracting
    /// 2-cycle), so any reasonable grid over it yields a non-empty
    /// surface. Useful as a smoke-test constant.
    #[must_use]
    pub fn basilica() -> Self {
        Self {
            c: Quaternion::new(-1.0, 0.0, 0.0, 0.0),
            ..Self::default()
        }
    }

    /// The Douady rabbit, `c = -0.123 + 0.745i`.
    #[must_use]
    pub fn rabbit() -> Self {
        Self {
            c: Quaternion::new(-0.123, 0.745, 0.0, 0.0),
            ..Self::default()
        }
    }

    /// Sets the Julia constant.
    #[must_use]
    pub const fn with_constant(mut self, c: Quaternion<f64>) -> Self {
        self.c = c;
        self
    }

    /// Sets the scalar coordinate of the 4D embedding.
    #[must_use]
    pub const fn with_slice_w(mut self, slice_w: f64) -> Self {
        self.slice_w = slice_w;
        self
    }

    /// Sets the iteration budget.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the escape radius.
    #[must_use]
    pub const fn with_escape_radius(mut self, escape_radius: f64) -> Self {
        self.escape_radius = escape_radius;
        self
    }

    /// Evaluate the field at a 3D position.
    ///
    /// Iterates `q <- q^2 + c` from the lifted position until the orbit
    /// leaves the escape radius or the iteration budget is spent.
    /// Returns `1.0` for orbits that never escape, otherwise the
    /// smoothed escape time `(n + 1 - log2(ln|q| / ln R)) /
    /// max_iterations`, clamped to `[0, 1]`. Pure and total: every
    /// finite input yields a finite value, with non-finite intermediate
    /// magnitudes collapsing to `0.0`.
    #[must_use]
    pub fn value_at(&self, position: Point3<f64>) -> f64 {
        let escape_sq = self.escape_radius * self.escape_radius;
        let mut q = Quaternion::new(self.slice_w, position.x, position.y, position.z);

        for n in 0..self.max_iterations {
            let magnitude_sq = q.norm_squared();
            if !magnitude_sq.is_finite() || magnitude_sq > escape_sq {
                return self.smoothed_escape(n, magnitude_sq);
            }
            q = q * q + self.c;
        }
        1.0
    }

    /// Smoothed escape-time measure for an orbit that left the escape
    /// radius after `iterations` completed steps.
    fn smoothed_escape(&self, iterations: u32, magnitude_sq: f64) -> f64 {
        let ln_ratio = magnitude_sq.sqrt().ln() / self.escape_radius.ln();
        let nu = f64::from(iterations) + 1.0 - ln_ratio.log2();
        let value = nu / f64::from(self.max_iterations);
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
