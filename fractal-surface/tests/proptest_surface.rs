//! Property-based tests for field evaluation and voxel triangulation.
//!
//! These use proptest to throw random corner values, iso levels, and
//! sample points at the pipeline's building blocks and verify the
//! invariants they promise.
//!
//! Run with: cargo test -p fractal-surface -- proptest

use fractal_surface::marching_cubes_algorithm::{triangulate_voxel, Sample};
use fractal_surface::JuliaParams;
use fractal_types::{Point3, Triangle, TriangleMesh};
use nalgebra::Quaternion;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Unit-cube corner positions in marching-cubes corner order.
const CUBE_CORNERS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [0.0, 1.0, 1.0],
];

fn corner_samples(values: [f64; 8]) -> [Sample; 8] {
    let mut corners = [Sample::new(Point3::origin(), 0.0); 8];
    for (corner, (position, value)) in corners
        .iter_mut()
        .zip(CUBE_CORNERS.iter().zip(values.iter()))
    {
        *corner = Sample::new(
            Point3::new(position[0], position[1], position[2]),
            *value,
        );
    }
    corners
}

/// Random corner values in the field's output range.
fn arb_corner_values() -> impl Strategy<Value = [f64; 8]> {
    prop::array::uniform8(0.0..=1.0f64)
}

/// Random iso level away from the degenerate endpoints.
fn arb_iso_level() -> impl Strategy<Value = f64> {
    0.01..0.99f64
}

/// Random sample position around the interesting part of the field.
fn arb_position() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-2.0..2.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// Random Julia constant with every component in a tame range.
fn arb_constant() -> impl Strategy<Value = Quaternion<f64>> {
    prop::array::uniform4(-1.0..1.0f64).prop_map(|[w, i, j, k]| Quaternion::new(w, i, j, k))
}

/// Random triangle with finite vertices.
fn arb_triangle() -> impl Strategy<Value = Triangle> {
    (arb_position(), arb_position(), arb_position())
        .prop_map(|(v0, v1, v2)| Triangle::new(v0, v1, v2))
}

// =============================================================================
// Property Tests: Voxel Triangulation
// =============================================================================

proptest! {
    /// Any classification yields at most five triangles.
    #[test]
    fn triangulation_caps_at_five_triangles(
        values in arb_corner_values(),
        iso_level in arb_iso_level(),
    ) {
        let triangles = triangulate_voxel(&corner_samples(values), iso_level);
        prop_assert!(triangles.len() <= 5);
    }

    /// Every emitted vertex is finite and stays inside the voxel.
    #[test]
    fn triangulation_vertices_stay_in_the_voxel(
        values in arb_corner_values(),
        iso_level in arb_iso_level(),
    ) {
        let triangles = triangulate_voxel(&corner_samples(values), iso_level);
        for triangle in &triangles {
            for vertex in triangle.vertices() {
                for coordinate in vertex.coords.iter() {
                    prop_assert!(coordinate.is_finite());
                    prop_assert!((0.0..=1.0).contains(coordinate));
                }
            }
        }
    }

    /// A uniform voxel never produces geometry, whichever side of the
    /// iso level it sits on.
    #[test]
    fn uniform_voxels_are_always_empty(
        value in 0.0..=1.0f64,
        iso_level in arb_iso_level(),
    ) {
        let triangles = triangulate_voxel(&corner_samples([value; 8]), iso_level);
        prop_assert!(triangles.is_empty());
    }
}

// =============================================================================
// Property Tests: Field Evaluation
// =============================================================================

proptest! {
    /// The smoothed escape-time value is always finite and in [0, 1],
    /// for any constant and any sample position.
    #[test]
    fn field_value_is_always_in_unit_range(
        position in arb_position(),
        c in arb_constant(),
        slice_w in -1.0..1.0f64,
        max_iterations in 1..24u32,
    ) {
        let julia = JuliaParams::new()
            .with_constant(c)
            .with_slice_w(slice_w)
            .with_max_iterations(max_iterations);
        let value = julia.value_at(position);
        prop_assert!(value.is_finite());
        prop_assert!((0.0..=1.0).contains(&value));
    }

    /// Evaluation is a pure function of its inputs.
    #[test]
    fn field_evaluation_is_deterministic(
        position in arb_position(),
        c in arb_constant(),
    ) {
        let julia = JuliaParams::new().with_constant(c);
        let first = julia.value_at(position);
        let second = julia.value_at(position);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

// =============================================================================
// Property Tests: Mesh Accumulation
// =============================================================================

proptest! {
    /// Appending batches accumulates exactly the batch sizes, in order.
    #[test]
    fn append_accumulates_batch_sizes(
        batches in prop::collection::vec(
            prop::collection::vec(arb_triangle(), 0..4),
            0..6,
        ),
    ) {
        let mut mesh = TriangleMesh::new();
        let expected: usize = batches.iter().map(Vec::len).sum();

        for batch in &batches {
            mesh.try_append(batch).unwrap();
        }

        prop_assert_eq!(mesh.triangle_count(), expected);
        prop_assert_eq!(mesh.point_count(), 3 * expected);

        let flattened: Vec<Triangle> = batches.into_iter().flatten().collect();
        prop_assert_eq!(&mesh.triangles, &flattened);
    }
}
