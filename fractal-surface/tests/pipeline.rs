//! End-to-end tests for the sampling and triangulation pipeline.
//!
//! These run the full sweep on small grids and check the structural
//! guarantees the pipeline makes: mesh accounting, determinism, and
//! graceful handling of degenerate configurations.

use fractal_surface::{
    generate_surface, JuliaParams, SurfaceError, SurfaceParams, MAX_RESOLUTION,
};
use fractal_types::{Aabb, Point3};

#[test]
fn zero_resolution_produces_an_empty_result() {
    let params = SurfaceParams::new().with_resolution(0);
    let result = generate_surface(&params).unwrap();

    assert!(result.mesh.is_empty());
    assert_eq!(result.triangle_count(), 0);
    assert_eq!(result.cells_visited, 0);
    assert_eq!(result.field_evaluations, 0);
}

#[test]
fn point_count_is_three_times_triangle_count() {
    let params = SurfaceParams::basilica().with_resolution(16);
    let result = generate_surface(&params).unwrap();

    assert!(result.triangle_count() > 0, "basilica interior must surface");
    assert_eq!(result.point_count(), 3 * result.triangle_count());
    assert_eq!(
        result.mesh.position_buffer().len(),
        9 * result.triangle_count()
    );
}

#[test]
fn sweep_visits_every_voxel_exactly_once() {
    let params = SurfaceParams::basilica().with_resolution(6);
    let result = generate_surface(&params).unwrap();

    assert_eq!(result.cells_visited, 6 * 6 * 6);
    assert_eq!(result.field_evaluations, 8 * result.cells_visited);
}

#[test]
fn region_outside_the_set_produces_no_triangles() {
    // Far from the origin every orbit escapes immediately, so the
    // field is uniformly zero and no voxel straddles the iso level.
    let far = Aabb::new(Point3::new(10.0, 10.0, 10.0), Point3::new(13.0, 13.0, 13.0));
    let params = SurfaceParams::basilica()
        .with_extent(far)
        .with_resolution(8);
    let result = generate_surface(&params).unwrap();

    assert!(result.mesh.is_empty());
    assert_eq!(result.field_evaluations, 8 * 8 * 8 * 8);
}

#[test]
fn region_inside_the_set_produces_no_triangles() {
    // A small box around the origin sits entirely inside the basilica
    // interior, so every sample saturates at 1.0.
    let inside = Aabb::new(
        Point3::new(-0.05, -0.05, -0.05),
        Point3::new(0.05, 0.05, 0.05),
    );
    let params = SurfaceParams::basilica()
        .with_extent(inside)
        .with_resolution(8);
    let result = generate_surface(&params).unwrap();

    assert!(result.mesh.is_empty());
    assert!(result.cells_visited > 0);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let params = SurfaceParams::basilica().with_resolution(12);
    let first = generate_surface(&params).unwrap();
    let second = generate_surface(&params).unwrap();

    assert_eq!(first.triangle_count(), second.triangle_count());
    assert_eq!(
        first.mesh.position_buffer(),
        second.mesh.position_buffer(),
        "same parameters must reproduce the same mesh"
    );
}

#[test]
fn surface_stays_inside_the_sampled_extent() {
    let params = SurfaceParams::basilica().with_resolution(16);
    let result = generate_surface(&params).unwrap();
    let bounds = result.mesh.bounds();

    assert!(!bounds.is_empty());
    for axis in 0..3 {
        assert!(bounds.min[axis] >= params.extent.min[axis] - 1e-12);
        assert!(bounds.max[axis] <= params.extent.max[axis] + 1e-12);
    }
}

#[test]
fn normalized_surface_fits_the_unit_cube() {
    let params = SurfaceParams::basilica().with_resolution(16);
    let mut result = generate_surface(&params).unwrap();

    let bounds = result.mesh.bounds();
    result.mesh.normalize_to_unit(&bounds);

    let normalized = result.mesh.bounds();
    for axis in 0..3 {
        assert!(normalized.min[axis] >= -1.0 - 1e-9);
        assert!(normalized.max[axis] <= 1.0 + 1e-9);
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    let mut params = SurfaceParams::new();
    params.resolution = MAX_RESOLUTION + 1;
    assert!(matches!(
        generate_surface(&params),
        Err(SurfaceError::InvalidResolution(_))
    ));

    let degenerate = SurfaceParams::new().with_extent(Aabb::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 1.0),
    ));
    assert!(matches!(
        generate_surface(&degenerate),
        Err(SurfaceError::InvalidBounds { .. })
    ));

    let no_budget =
        SurfaceParams::new().with_julia(JuliaParams::default().with_max_iterations(0));
    assert!(matches!(
        generate_surface(&no_budget),
        Err(SurfaceError::InvalidIterations(0))
    ));
}
