//! Surface generation: sweep the sampling grid and triangulate.
//!
//! The sweep walks the grid layer by layer along z, evaluates the
//! scalar field at the eight corners of every voxel, and hands each
//! voxel to the marching-cubes triangulator. Triangles accumulate into
//! a single mesh in sweep order, so a given parameter set always
//! produces the same mesh, triangle for triangle.

use fractal_types::{Point3, TriangleMesh};
use tracing::{debug, info};

use crate::error::SurfaceError;
use crate::grid::SamplingGrid;
use crate::marching_cubes::{triangulate_voxel, Sample};
use crate::params::SurfaceParams;
use crate::progress::LayerProgress;
use crate::types::SurfaceResult;

/// Generates the iso-surface of the configured quaternion Julia field.
///
/// # Arguments
///
/// * `params` - Field, extent, resolution, and iso level configuration
///
/// # Returns
///
/// A [`SurfaceResult`] containing the mesh and sweep statistics, or an
/// error.
///
/// # Errors
///
/// Returns [`SurfaceError`] if:
/// - Parameters fail validation
/// - The sampling grid cannot be constructed
/// - Reserving memory for the mesh fails
///
/// # Examples
///
/// ```
/// use fractal_surface::{generate_surface, SurfaceParams};
///
/// let params = SurfaceParams::preview();
/// let result = generate_surface(&params);
///
/// match result {
///     Ok(surface) => println!("Generated {} triangles", surface.triangle_count()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn generate_surface(params: &SurfaceParams) -> Result<SurfaceResult, SurfaceError> {
    params.validate()?;
    let grid = SamplingGrid::new(&params.extent, params.resolution)?;

    info!(
        resolution = grid.resolution(),
        voxels = grid.voxel_count(),
        iso_level = params.iso_level,
        "Starting surface extraction"
    );

    let julia = params.julia;
    let result = sweep(&grid, |position| julia.value_at(position), params.iso_level)?;

    info!(
        triangles = result.triangle_count(),
        field_evaluations = result.field_evaluations,
        "Surface extraction complete"
    );

    Ok(result)
}

/// Sweeps the grid with an arbitrary scalar field.
///
/// Kept separate from [`generate_surface`] so synthetic fields can
/// drive the sweep in tests.
fn sweep<F>(
    grid: &SamplingGrid,
    field: F,
    iso_level: f64,
) -> Result<SurfaceResult, SurfaceError>
where
    F: Fn(Point3<f64>) -> f64,
{
    let resolution = grid.resolution();
    let offsets = *grid.corner_offsets();
    let progress = LayerProgress::new(resolution);
    debug!(layers = resolution, "Sampling grid ready");

    let mut mesh = TriangleMesh::new();
    let mut cells_visited = 0u64;
    let mut field_evaluations = 0u64;

    for iz in 0..resolution {
        for iy in 0..resolution {
            for ix in 0..resolution {
                let base = grid.voxel_base(ix, iy, iz);

                let mut corners = [Sample::new(base, 0.0); 8];
                for (corner, offset) in corners.iter_mut().zip(offsets) {
                    let position = base + offset;
                    *corner = Sample::new(position, field(position));
                }
                cells_visited += 1;
                field_evaluations += 8;

                let triangles = triangulate_voxel(&corners, iso_level);
                mesh.try_append(&triangles)?;
            }
        }

        if progress.should_report(iz) {
            info!(
                layer = iz + 1,
                total = resolution,
                percent = progress.percent(iz),
                "Swept layer"
            );
        }
    }

    Ok(SurfaceResult::new(mesh, cells_visited, field_evaluations))
}
