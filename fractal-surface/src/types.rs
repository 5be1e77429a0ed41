//! Core result types for surface generation.

use fractal_types::TriangleMesh;

/// Result of surface generation.
#[derive(Debug, Clone)]
pub struct SurfaceResult {
    /// The triangulated isosurface.
    pub mesh: TriangleMesh,

    /// Number of voxels the layer sweep visited.
    pub cells_visited: u64,

    /// Number of scalar field evaluations performed.
    ///
    /// Eight per visited voxel; corners shared between neighbouring
    /// voxels are evaluated once per voxel.
    pub field_evaluations: u64,
}

impl SurfaceResult {
    /// Creates a new surface result.
    #[must_use]
    pub const fn new(mesh: TriangleMesh, cells_visited: u64, field_evaluations: u64) -> Self {
        Self {
            mesh,
            cells_visited,
            field_evaluations,
        }
    }

    /// Returns the number of triangles in the extracted surface.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Returns the number of mesh points, three per triangle.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.mesh.point_count()
    }
}
