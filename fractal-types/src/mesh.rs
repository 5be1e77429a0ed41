//! Flat, non-indexed triangle mesh.

use crate::{Aabb, Triangle};
use nalgebra::{Point3, Vector3};
use std::collections::TryReserveError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A growable triangle soup.
///
/// This is the accumulation buffer of the isosurface pipeline. Triangles
/// are appended in sweep order and never reordered, so two runs with
/// identical inputs produce bit-identical buffers. Unlike an indexed
/// mesh, vertices shared between adjacent triangles are stored once per
/// triangle; `point_count() == 3 * triangle_count()` always holds.
///
/// Growth goes through [`try_append`](Self::try_append), which reserves
/// capacity fallibly: on allocation failure the buffer keeps its prior
/// contents and the caller decides whether to abort.
///
/// # Example
///
/// ```
/// use fractal_types::{Point3, Triangle, TriangleMesh};
///
/// let mut mesh = TriangleMesh::new();
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
/// mesh.try_append(&[tri, tri]).unwrap();
///
/// assert_eq!(mesh.triangle_count(), 2);
/// assert_eq!(mesh.point_count(), 6);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Accumulated triangles, in append order.
    pub triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a mesh from an existing triangle list.
    #[inline]
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Number of triangles in the mesh.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of vertex records in the mesh.
    ///
    /// Always `3 * triangle_count()`; there is no shared-vertex indexing.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Check whether the mesh holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Append triangles to the end of the buffer, preserving order.
    ///
    /// Capacity is reserved fallibly before copying, so repeated small
    /// appends stay amortized-constant and a failed reservation leaves
    /// the existing contents untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError`] if the buffer cannot grow to hold the
    /// new triangles.
    pub fn try_append(&mut self, triangles: &[Triangle]) -> Result<(), TryReserveError> {
        self.triangles.try_reserve(triangles.len())?;
        self.triangles.extend_from_slice(triangles);
        Ok(())
    }

    /// Iterate over all vertex positions in triangle order.
    ///
    /// Yields `v0, v1, v2` of the first triangle, then the second, and
    /// so on; the stream length equals [`point_count`](Self::point_count).
    pub fn vertex_positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.triangles
            .iter()
            .flat_map(|t| [&t.v0, &t.v1, &t.v2])
    }

    /// Flatten the mesh into an `f32` position stream for GPU upload.
    ///
    /// The layout is `[x, y, z]` per vertex, three vertices per triangle,
    /// nine floats per triangle, with no index buffer and no normals.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: the upload stream is f32 by contract with the renderer
    pub fn position_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.point_count() * 3);
        for position in self.vertex_positions() {
            buffer.push(position.x as f32);
            buffer.push(position.y as f32);
            buffer.push(position.z as f32);
        }
        buffer
    }

    /// Compute the axis-aligned bounds of all vertices.
    ///
    /// Returns an empty [`Aabb`] for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertex_positions())
    }

    /// Translate every vertex by the given offset.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for triangle in &mut self.triangles {
            triangle.v0 += offset;
            triangle.v1 += offset;
            triangle.v2 += offset;
        }
    }

    /// Scale every vertex uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for triangle in &mut self.triangles {
            triangle.v0.coords *= factor;
            triangle.v1.coords *= factor;
            triangle.v2.coords *= factor;
        }
    }

    /// Scale and center the mesh so `extent` maps into `[-1, 1]^3`.
    ///
    /// The scale is uniform (aspect-preserving), chosen so the extent's
    /// longest edge spans the unit box. Renderers use this to fit the
    /// sampled region into their view volume before upload. Does nothing
    /// when `extent` is empty or degenerate.
    pub fn normalize_to_unit(&mut self, extent: &Aabb) {
        if extent.is_empty() {
            return;
        }
        let longest = extent.max_extent();
        if longest <= 0.0 || !longest.is_finite() {
            return;
        }
        let factor = 2.0 / longest;
        let center = extent.center();
        self.scale(factor);
        self.translate(-center.coords * factor);
    }
}
