//! Core geometry types for fractal isosurface meshes.
//!
//! This crate provides the output-side types of the isosurface pipeline:
//!
//! - [`Triangle`] - A triangle with concrete vertex positions
//! - [`TriangleMesh`] - A flat, non-indexed triangle soup
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This crate has no knowledge of fractals, sampling grids, or renderers.
//! It can be consumed anywhere a triangle soup is useful:
//! - CLI tools
//! - Web applications (WASM)
//! - GPU upload paths (see [`TriangleMesh::position_buffer`])
//!
//! # Mesh Representation
//!
//! The mesh is deliberately **non-indexed**: every triangle stores its
//! three vertex positions, so `point_count() == 3 * triangle_count()`
//! always holds. There is no shared-vertex indexing and no normal data;
//! consumers that need normals compute them per face.
//!
//! # Units & Coordinate System
//!
//! All coordinates are `f64` and unit-agnostic. The coordinate system is
//! right-handed.
//!
//! # Example
//!
//! ```
//! use fractal_types::{Point3, Triangle, TriangleMesh};
//!
//! let mut mesh = TriangleMesh::new();
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! mesh.try_append(&[tri]).unwrap();
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert_eq!(mesh.point_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod triangle;

// Re-export core types
pub use bounds::Aabb;
pub use mesh::TriangleMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
